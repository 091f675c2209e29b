#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use pipewright::config::{AppConfig, GitHubConfig, JenkinsConfig, ProvisioningConfig, ServerConfig};
use pipewright::error::{AppError, Result};
use pipewright::platform::types::{CreateJob, CreateRepository};
use pipewright::platform::{CiPlatform, RepositoryPlatform};

pub const REPO_URL: &str = "https://github.com/acme/demo-svc";
pub const JOB_URL: &str = "http://jenkins.local:8080/job/demo-ci";
pub const HOOK_URL: &str = "http://jenkins.local:8080/github-webhook/";

/// Every call made against either fake, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    RepositoryExists(String),
    JobExists(String),
    CreateRepository(String),
    CreateJob { name: String, source_url: String },
    CreateWebhook { repository: String, hook_url: String },
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub fn calls(log: &CallLog) -> Vec<Call> {
    log.lock().unwrap().clone()
}

pub struct FakeRepositories {
    pub log: CallLog,
    pub exists: bool,
    pub create: Mutex<Option<Result<String>>>,
    pub webhook: Mutex<Option<Result<()>>>,
}

impl FakeRepositories {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: Arc::clone(log),
            exists: false,
            create: Mutex::new(Some(Ok(REPO_URL.to_string()))),
            webhook: Mutex::new(Some(Ok(()))),
        }
    }

    pub fn existing(mut self) -> Self {
        self.exists = true;
        self
    }

    pub fn failing_create(self, err: AppError) -> Self {
        *self.create.lock().unwrap() = Some(Err(err));
        self
    }

    pub fn failing_webhook(self, err: AppError) -> Self {
        *self.webhook.lock().unwrap() = Some(Err(err));
        self
    }
}

#[async_trait]
impl RepositoryPlatform for FakeRepositories {
    async fn owner(&self) -> Result<String> {
        Ok("acme".to_string())
    }

    async fn repository_exists(&self, name: &str) -> bool {
        self.log
            .lock()
            .unwrap()
            .push(Call::RepositoryExists(name.to_string()));
        self.exists
    }

    async fn create_repository(&self, repo: &CreateRepository) -> Result<String> {
        self.log
            .lock()
            .unwrap()
            .push(Call::CreateRepository(repo.name.clone()));
        self.create
            .lock()
            .unwrap()
            .take()
            .expect("create_repository called twice")
    }

    async fn create_webhook(&self, repository_name: &str, hook_url: &str) -> Result<()> {
        self.log.lock().unwrap().push(Call::CreateWebhook {
            repository: repository_name.to_string(),
            hook_url: hook_url.to_string(),
        });
        self.webhook
            .lock()
            .unwrap()
            .take()
            .expect("create_webhook called twice")
    }
}

pub struct FakeJobs {
    pub log: CallLog,
    pub exists: bool,
    pub create: Mutex<Option<Result<String>>>,
}

impl FakeJobs {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: Arc::clone(log),
            exists: false,
            create: Mutex::new(Some(Ok(JOB_URL.to_string()))),
        }
    }

    pub fn existing(mut self) -> Self {
        self.exists = true;
        self
    }

    pub fn failing_create(self, err: AppError) -> Self {
        *self.create.lock().unwrap() = Some(Err(err));
        self
    }
}

#[async_trait]
impl CiPlatform for FakeJobs {
    async fn job_exists(&self, job_name: &str) -> bool {
        self.log
            .lock()
            .unwrap()
            .push(Call::JobExists(job_name.to_string()));
        self.exists
    }

    async fn create_job(&self, job: &CreateJob) -> Result<String> {
        self.log.lock().unwrap().push(Call::CreateJob {
            name: job.name.clone(),
            source_url: job.source_url.clone(),
        });
        self.create
            .lock()
            .unwrap()
            .take()
            .expect("create_job called twice")
    }

    fn webhook_url(&self) -> String {
        HOOK_URL.to_string()
    }
}

pub fn test_config(link_webhook: bool) -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        github: GitHubConfig {
            token: "ghp_test".to_string(),
            api_url: "https://api.github.com".to_string(),
            organization: None,
            auto_init: true,
            webhook_secret: None,
        },
        jenkins: JenkinsConfig {
            url: "http://jenkins.local:8080".to_string(),
            username: "admin".to_string(),
            token: "jenkins-token".to_string(),
            branch_spec: "*/main".to_string(),
            job_description: "Auto-generated CI/CD pipeline".to_string(),
        },
        provisioning: ProvisioningConfig { link_webhook },
    }
}
