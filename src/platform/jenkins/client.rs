use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};

use crate::config::JenkinsConfig;
use crate::error::{AppError, Result};
use crate::platform::types::CreateJob;
use crate::platform::CiPlatform;

use super::job_config::JobDocument;

pub struct JenkinsPlatform {
    client: Client,
    base_url: String,
    authorization: String,
    branch_spec: String,
    job_description: String,
}

impl JenkinsPlatform {
    pub fn new(config: &JenkinsConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            authorization: basic_auth_header(&config.username, &config.token),
            branch_spec: config.branch_spec.clone(),
            job_description: config.job_description.clone(),
        }
    }

    /// Canonical address of a job on this server.
    pub fn job_url(&self, job_name: &str) -> String {
        format!("{}/job/{}", self.base_url, urlencoding::encode(job_name))
    }

    fn not_found(&self) -> AppError {
        AppError::NotFound(format!(
            "Jenkins server not found. Please check Jenkins URL: {}",
            self.base_url
        ))
    }
}

/// `Basic base64(username:token)` value for the Authorization header.
pub fn basic_auth_header(username: &str, token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{token}")))
}

/// Map a non-success `createItem` response into the user-facing taxonomy.
///
/// Returns `None` for the 404 case, which needs the server URL and is built
/// by the caller.
pub fn classify_create_job(job_name: &str, status: StatusCode, body: &str) -> Option<AppError> {
    match status.as_u16() {
        // Jenkins answers 400 when an item with this name already exists
        400 => Some(AppError::Conflict(format!(
            "Jenkins job '{job_name}' already exists. Please choose a different name."
        ))),
        401 | 403 => Some(AppError::Auth(
            "Jenkins authentication failed. Please check your username and API token.".to_string(),
        )),
        404 => None,
        _ => Some(AppError::Upstream(format!(
            "Failed to create Jenkins job: {body}"
        ))),
    }
}

#[async_trait]
impl CiPlatform for JenkinsPlatform {
    async fn job_exists(&self, job_name: &str) -> bool {
        let url = format!("{}/api/json", self.job_url(job_name));

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.authorization)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => true,
            Ok(resp) if resp.status() == StatusCode::NOT_FOUND => false,
            Ok(resp) => {
                tracing::warn!(
                    job = job_name,
                    status = %resp.status(),
                    "Ambiguous Jenkins job lookup, assuming job exists"
                );
                true
            }
            Err(e) => {
                tracing::warn!(
                    job = job_name,
                    error = %e,
                    "Jenkins job lookup failed, assuming job exists"
                );
                true
            }
        }
    }

    async fn create_job(&self, job: &CreateJob) -> Result<String> {
        let document = JobDocument {
            description: &self.job_description,
            source_url: &job.source_url,
            branch_spec: &self.branch_spec,
            build_script: &job.build_script,
            deploy_script: &job.deploy_script,
        }
        .render();

        let url = format!(
            "{}/createItem?name={}",
            self.base_url,
            urlencoding::encode(&job.name)
        );

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &self.authorization)
            .header(CONTENT_TYPE, "application/xml")
            .body(document)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    self.not_found()
                } else {
                    AppError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(job = %job.name, status = %status, "Jenkins rejected job creation");
            return Err(
                classify_create_job(&job.name, status, &body).unwrap_or_else(|| self.not_found())
            );
        }

        let job_url = self.job_url(&job.name);
        tracing::info!(job = %job.name, url = %job_url, "Created Jenkins job");

        Ok(job_url)
    }

    fn webhook_url(&self) -> String {
        format!("{}/github-webhook/", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(url: &str) -> JenkinsPlatform {
        JenkinsPlatform::new(&JenkinsConfig {
            url: url.to_string(),
            username: "admin".to_string(),
            token: "secret".to_string(),
            branch_spec: "*/main".to_string(),
            job_description: "Auto-generated CI/CD pipeline".to_string(),
        })
    }

    #[test]
    fn test_basic_auth_header() {
        // base64("admin:secret")
        assert_eq!(basic_auth_header("admin", "secret"), "Basic YWRtaW46c2VjcmV0");
    }

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let jenkins = platform("http://jenkins.local:8080/");
        assert_eq!(jenkins.job_url("demo-ci"), "http://jenkins.local:8080/job/demo-ci");
        assert_eq!(jenkins.webhook_url(), "http://jenkins.local:8080/github-webhook/");
    }

    #[test]
    fn test_job_url_encodes_name() {
        let jenkins = platform("http://jenkins.local");
        assert_eq!(jenkins.job_url("demo ci"), "http://jenkins.local/job/demo%20ci");
    }

    #[test]
    fn test_classify_create_job() {
        let conflict = classify_create_job("demo-ci", StatusCode::BAD_REQUEST, "").unwrap();
        assert!(matches!(conflict, AppError::Conflict(_)));
        assert_eq!(
            conflict.to_string(),
            "Jenkins job 'demo-ci' already exists. Please choose a different name."
        );

        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let err = classify_create_job("demo-ci", status, "").unwrap();
            assert!(matches!(err, AppError::Auth(_)));
        }

        assert!(classify_create_job("demo-ci", StatusCode::NOT_FOUND, "").is_none());

        let other =
            classify_create_job("demo-ci", StatusCode::INTERNAL_SERVER_ERROR, "boom").unwrap();
        assert_eq!(other.to_string(), "Failed to create Jenkins job: boom");
    }

    #[test]
    fn test_not_found_names_configured_url() {
        let jenkins = platform("http://jenkins.local");
        assert_eq!(
            jenkins.not_found().to_string(),
            "Jenkins server not found. Please check Jenkins URL: http://jenkins.local"
        );
    }
}
