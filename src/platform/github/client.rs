use async_trait::async_trait;
use octocrab::Octocrab;

use crate::config::GitHubConfig;
use crate::error::{AppError, Result};
use crate::platform::types::*;
use crate::platform::RepositoryPlatform;

use super::mapper;

const HOOK_EVENTS: &[&str] = &["push", "pull_request"];

pub struct GitHubPlatform {
    client: Octocrab,
    organization: Option<String>,
    auto_init: bool,
    webhook_secret: Option<String>,
}

impl GitHubPlatform {
    /// Build the adapter. Must be called from within a tokio runtime.
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let client = Octocrab::builder()
            .base_uri(config.api_url.as_str())
            .map_err(|e| {
                AppError::Config(format!("Invalid GitHub API URL {}: {e}", config.api_url))
            })?
            .personal_token(config.token.clone())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build octocrab client: {e}")))?;

        Ok(Self {
            client,
            organization: config.organization.clone(),
            auto_init: config.auto_init,
            webhook_secret: config.webhook_secret.clone(),
        })
    }

    fn create_route(&self) -> String {
        match &self.organization {
            Some(org) => format!("/orgs/{org}/repos"),
            None => "/user/repos".to_string(),
        }
    }
}

#[async_trait]
impl RepositoryPlatform for GitHubPlatform {
    async fn owner(&self) -> Result<String> {
        if let Some(org) = &self.organization {
            return Ok(org.clone());
        }

        let user: AuthenticatedUser = self
            .client
            .get("/user", None::<&()>)
            .await
            .map_err(|e| mapper::map_owner_error(&e))?;

        Ok(user.login)
    }

    async fn repository_exists(&self, name: &str) -> bool {
        let owner = match self.owner().await {
            Ok(owner) => owner,
            Err(e) => {
                tracing::warn!(
                    repo = name,
                    error = %e,
                    "Could not resolve repository owner, assuming repository exists"
                );
                return true;
            }
        };

        let route = format!("/repos/{owner}/{}", urlencoding::encode(name));
        let response: std::result::Result<serde_json::Value, _> =
            self.client.get(&route, None::<&()>).await;

        match response {
            Ok(_) => true,
            Err(e) if mapper::status_of(&e) == Some(404) => false,
            Err(e) => {
                tracing::warn!(
                    repo = name,
                    owner = %owner,
                    status = ?mapper::status_of(&e),
                    error = %mapper::response_content(&e),
                    "Ambiguous repository lookup, assuming repository exists"
                );
                true
            }
        }
    }

    async fn create_repository(&self, repo: &CreateRepository) -> Result<String> {
        let body = NewRepositoryBody {
            name: &repo.name,
            description: &repo.description,
            private: repo.private,
            auto_init: self.auto_init,
        };

        let created: RepositoryInfo = self
            .client
            .post(self.create_route(), Some(&body))
            .await
            .map_err(|e| mapper::map_create_repository_error(&repo.name, &e))?;

        tracing::info!(
            repo = %repo.name,
            full_name = ?created.full_name,
            url = %created.html_url,
            "Created GitHub repository"
        );

        Ok(created.html_url)
    }

    async fn create_webhook(&self, repository_name: &str, hook_url: &str) -> Result<()> {
        let owner = self.owner().await?;
        let route = format!(
            "/repos/{owner}/{}/hooks",
            urlencoding::encode(repository_name)
        );

        let body = NewHookBody {
            name: "web",
            active: true,
            events: HOOK_EVENTS,
            config: HookConfig {
                url: hook_url,
                content_type: "json",
                secret: self.webhook_secret.as_deref(),
            },
        };

        let _: serde_json::Value = self
            .client
            .post(route, Some(&body))
            .await
            .map_err(|e| mapper::map_create_webhook_error(&e))?;

        tracing::info!(repo = repository_name, hook_url, "Created GitHub webhook");

        Ok(())
    }
}
