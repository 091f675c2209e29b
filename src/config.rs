use serde::Deserialize;

use crate::error::{AppError, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub github: GitHubConfig,
    pub jenkins: JenkinsConfig,
    #[serde(default)]
    pub provisioning: ProvisioningConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct GitHubConfig {
    pub token: String,
    #[serde(default = "default_github_api_url")]
    pub api_url: String,
    /// Create repositories under this organization instead of the token's user.
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default = "default_auto_init")]
    pub auto_init: bool,
    /// Shared secret sent with the Jenkins webhook, if the receiver verifies it.
    #[serde(default)]
    pub webhook_secret: Option<String>,
}

// Manual Debug impl to avoid leaking the token and webhook secret
impl std::fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("token", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("organization", &self.organization)
            .field("auto_init", &self.auto_init)
            .field(
                "webhook_secret",
                &self.webhook_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

#[derive(Deserialize, Clone)]
pub struct JenkinsConfig {
    pub url: String,
    pub username: String,
    pub token: String,
    #[serde(default = "default_branch_spec")]
    pub branch_spec: String,
    #[serde(default = "default_job_description")]
    pub job_description: String,
}

// Manual Debug impl to avoid leaking the API token
impl std::fmt::Debug for JenkinsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JenkinsConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("token", &"[REDACTED]")
            .field("branch_spec", &self.branch_spec)
            .field("job_description", &self.job_description)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProvisioningConfig {
    /// Wire the new repository to Jenkins with a push webhook.
    #[serde(default = "default_link_webhook")]
    pub link_webhook: bool,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            link_webhook: default_link_webhook(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_auto_init() -> bool {
    true
}

fn default_branch_spec() -> String {
    "*/main".to_string()
}

fn default_job_description() -> String {
    "Auto-generated CI/CD pipeline".to_string()
}

fn default_link_webhook() -> bool {
    true
}

/// Environment overrides take the form `PIPEWRIGHT_<SECTION>__<KEY>`,
/// e.g. `PIPEWRIGHT_GITHUB__TOKEN`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("PIPEWRIGHT")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl AppConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        Self::load_with(config_path, environment())
    }

    fn load_with(config_path: Option<&str>, environment: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Load from file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        } else {
            // Try default paths
            builder = builder.add_source(config::File::with_name("pipewright").required(false));
        }

        builder = builder.add_source(environment);

        let config = builder
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.github.token.trim().is_empty() {
            return Err(AppError::Config("github.token must not be empty".to_string()));
        }
        if self.jenkins.url.trim().is_empty() {
            return Err(AppError::Config("jenkins.url must not be empty".to_string()));
        }
        Ok(())
    }
}
