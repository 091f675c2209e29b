use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::platform::types::{CreateJob, CreateRepository};
use crate::platform::{CiPlatform, RepositoryPlatform};

use super::request::ProvisioningRequest;
use super::types::ProvisioningOutcome;

const COMPLETED_MESSAGE: &str = "Project created successfully with automated CI/CD!";

/// Creates a repository and its CI job as one logical operation.
///
/// Holds no state besides the injected adapters, so a single instance serves
/// concurrent requests.
pub struct Provisioner {
    repositories: Arc<dyn RepositoryPlatform>,
    ci: Arc<dyn CiPlatform>,
    link_webhook: bool,
}

impl Provisioner {
    pub fn new(
        repositories: Arc<dyn RepositoryPlatform>,
        ci: Arc<dyn CiPlatform>,
        link_webhook: bool,
    ) -> Self {
        Self {
            repositories,
            ci,
            link_webhook,
        }
    }

    pub fn repositories(&self) -> &dyn RepositoryPlatform {
        self.repositories.as_ref()
    }

    pub fn ci(&self) -> &dyn CiPlatform {
        self.ci.as_ref()
    }

    /// Run the provisioning sequence.
    ///
    /// Steps run strictly in order: repository pre-check, job pre-check,
    /// repository creation, job creation, webhook linking. Nothing is retried
    /// and nothing created is ever rolled back.
    pub async fn provision(&self, request: &ProvisioningRequest) -> ProvisioningOutcome {
        let repo_name = request.repository_name();
        let job_name = request.job_name();

        tracing::info!(repo = repo_name, job = job_name, "Starting provisioning");

        if self.repositories.repository_exists(repo_name).await {
            tracing::info!(repo = repo_name, "Repository name already taken");
            return ProvisioningOutcome::failure(format!(
                "GitHub repository '{repo_name}' already exists. Please choose a different name."
            ));
        }

        if self.ci.job_exists(job_name).await {
            tracing::info!(job = job_name, "Job name already taken");
            return ProvisioningOutcome::failure(format!(
                "Jenkins job '{job_name}' already exists. Please choose a different name."
            ));
        }

        let repository_url = match self
            .repositories
            .create_repository(&CreateRepository {
                name: repo_name.to_string(),
                description: request.description().to_string(),
                private: request.is_private(),
            })
            .await
        {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(repo = repo_name, error = %e, "Repository creation failed");
                return ProvisioningOutcome::failure(format!("Failed to create project: {e}"));
            }
        };

        let job_url = match self
            .ci
            .create_job(&CreateJob {
                name: job_name.to_string(),
                source_url: repository_url.clone(),
                build_script: request.build_script().to_string(),
                deploy_script: request.deploy_script().to_string(),
            })
            .await
        {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(
                    repo = repo_name,
                    repo_url = %repository_url,
                    job = job_name,
                    error = %e,
                    "Job creation failed, repository left in place"
                );
                return ProvisioningOutcome::failure(partial_failure_message(&repository_url, &e));
            }
        };

        let message = match self.link(repo_name).await {
            Ok(()) => COMPLETED_MESSAGE.to_string(),
            Err(e) => {
                tracing::warn!(repo = repo_name, error = %e, "Webhook setup failed");
                link_failure_message(&e)
            }
        };

        tracing::info!(
            repo_url = %repository_url,
            job_url = %job_url,
            "Provisioning complete"
        );

        ProvisioningOutcome::Success {
            message,
            repository_url,
            job_url,
        }
    }

    /// Best-effort: wire the repository's pushes to the CI server.
    async fn link(&self, repository_name: &str) -> Result<()> {
        if !self.link_webhook {
            tracing::debug!(repo = repository_name, "Webhook linking disabled, skipping");
            return Ok(());
        }

        let hook_url = self.ci.webhook_url();
        self.repositories
            .create_webhook(repository_name, &hook_url)
            .await
    }
}

fn partial_failure_message(repository_url: &str, error: &AppError) -> String {
    format!(
        "GitHub repository created successfully at {repository_url}, \
         but Jenkins job creation failed: {error}. \
         You may need to delete the repository manually if desired."
    )
}

fn link_failure_message(error: &AppError) -> String {
    format!(
        "Project created successfully! Note: Webhook setup failed ({error}) - \
         you may need to configure it manually."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_failure_message() {
        let err = AppError::Conflict("Jenkins job 'demo-ci' already exists.".to_string());
        let msg = partial_failure_message("https://github.com/acme/demo-svc", &err);
        assert!(msg.starts_with(
            "GitHub repository created successfully at https://github.com/acme/demo-svc"
        ));
        assert!(msg.contains("Jenkins job 'demo-ci' already exists."));
        assert!(msg.ends_with("delete the repository manually if desired."));
    }

    #[test]
    fn test_link_failure_message() {
        let err = AppError::Upstream("Failed to create GitHub webhook: Not Found".to_string());
        let msg = link_failure_message(&err);
        assert!(msg.starts_with("Project created successfully!"));
        assert!(msg.contains("Webhook setup failed (Failed to create GitHub webhook: Not Found)"));
    }
}
