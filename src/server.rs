use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::platform::github::GitHubPlatform;
use crate::platform::jenkins::JenkinsPlatform;
use crate::platform::{CiPlatform, RepositoryPlatform};
use crate::provision::Provisioner;

pub struct AppState {
    pub provisioner: Provisioner,
}

impl AppState {
    /// Build state backed by the real GitHub and Jenkins adapters.
    pub fn new(config: &AppConfig) -> crate::error::Result<Self> {
        let github: Arc<dyn RepositoryPlatform> = Arc::new(GitHubPlatform::new(&config.github)?);
        let jenkins: Arc<dyn CiPlatform> = Arc::new(JenkinsPlatform::new(&config.jenkins));

        Ok(Self::with_platforms(config, github, jenkins))
    }

    pub fn with_platforms(
        config: &AppConfig,
        repositories: Arc<dyn RepositoryPlatform>,
        ci: Arc<dyn CiPlatform>,
    ) -> Self {
        Self {
            provisioner: Provisioner::new(repositories, ci, config.provisioning.link_webhook),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/create-project", post(crate::api::handler::create_project))
        .route(
            "/check-availability",
            post(crate::api::handler::check_availability_handler),
        )
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "ok"
}
