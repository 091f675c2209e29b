use serde::{Deserialize, Serialize};

/// Parameters for creating a repository.
#[derive(Debug, Clone)]
pub struct CreateRepository {
    pub name: String,
    pub description: String,
    pub private: bool,
}

/// Parameters for creating a CI job.
#[derive(Debug, Clone)]
pub struct CreateJob {
    pub name: String,
    pub source_url: String,
    pub build_script: String,
    pub deploy_script: String,
}

/// Subset of the GitHub user payload we need.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub login: String,
}

/// Subset of the GitHub repository payload we need.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryInfo {
    pub html_url: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Body of `POST /user/repos` and `POST /orgs/{org}/repos`.
#[derive(Debug, Clone, Serialize)]
pub struct NewRepositoryBody<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub private: bool,
    pub auto_init: bool,
}

/// Body of `POST /repos/{owner}/{repo}/hooks`.
#[derive(Debug, Clone, Serialize)]
pub struct NewHookBody<'a> {
    pub name: &'static str,
    pub active: bool,
    pub events: &'static [&'static str],
    pub config: HookConfig<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HookConfig<'a> {
    pub url: &'a str,
    pub content_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<&'a str>,
}
