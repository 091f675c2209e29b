pub mod github;
pub mod jenkins;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;
use types::*;

/// Source-code hosting system that owns the repository namespace.
#[async_trait]
pub trait RepositoryPlatform: Send + Sync {
    /// Resolve the account that new repositories are created under.
    async fn owner(&self) -> Result<String>;

    /// Whether a repository with this name exists under the owner.
    ///
    /// Ambiguous failures (anything other than a definite "not found") report
    /// `true`, so a flaky lookup rejects the request instead of colliding.
    async fn repository_exists(&self, name: &str) -> bool;

    /// Create a repository and return its browsable address.
    async fn create_repository(&self, repo: &CreateRepository) -> Result<String>;

    /// Register a push webhook on the repository that notifies `hook_url`.
    async fn create_webhook(&self, repository_name: &str, hook_url: &str) -> Result<()>;
}

/// Continuous-integration server that owns the job namespace.
#[async_trait]
pub trait CiPlatform: Send + Sync {
    /// Whether a job with this name exists. Same fail-conservative policy as
    /// [`RepositoryPlatform::repository_exists`].
    async fn job_exists(&self, job_name: &str) -> bool;

    /// Create a job building from `job.source_url` and return its address.
    async fn create_job(&self, job: &CreateJob) -> Result<String>;

    /// Endpoint on the CI server that receives repository push notifications.
    fn webhook_url(&self) -> String;
}
