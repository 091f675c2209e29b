use crate::error::{AppError, Result};

pub const DEFAULT_BUILD_SCRIPT: &str = "mvn clean compile test";
pub const DEFAULT_DEPLOY_SCRIPT: &str = "mvn clean package";

/// A validated provisioning request.
///
/// The only way to obtain one is [`ProvisioningRequest::new`], so anything
/// holding a `ProvisioningRequest` has already passed the validation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningRequest {
    repository_name: String,
    description: String,
    private: bool,
    job_name: String,
    build_script: String,
    deploy_script: String,
}

/// Unvalidated request fields as received from a client.
#[derive(Debug, Clone, Default)]
pub struct RequestFields {
    pub repository_name: Option<String>,
    pub description: Option<String>,
    pub private: bool,
    pub job_name: Option<String>,
    pub build_script: Option<String>,
    pub deploy_script: Option<String>,
}

impl ProvisioningRequest {
    pub fn new(fields: RequestFields) -> Result<Self> {
        let repository_name = required(fields.repository_name, "Repository name is required")?;
        validate_repository_name(&repository_name)?;
        let description = required(fields.description, "Description is required")?;
        let job_name = required(fields.job_name, "Jenkins job name is required")?;

        Ok(Self {
            repository_name,
            description,
            private: fields.private,
            job_name,
            build_script: fields
                .build_script
                .unwrap_or_else(|| DEFAULT_BUILD_SCRIPT.to_string()),
            deploy_script: fields
                .deploy_script
                .unwrap_or_else(|| DEFAULT_DEPLOY_SCRIPT.to_string()),
        })
    }

    pub fn repository_name(&self) -> &str {
        &self.repository_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    pub fn build_script(&self) -> &str {
        &self.build_script
    }

    pub fn deploy_script(&self) -> &str {
        &self.deploy_script
    }
}

fn required(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

/// Repository names are limited to ASCII letters, digits, `.`, `_` and `-`.
pub fn validate_repository_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if !valid {
        return Err(AppError::Validation("Invalid repository name".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> RequestFields {
        RequestFields {
            repository_name: Some("demo-svc".to_string()),
            description: Some("x".to_string()),
            private: false,
            job_name: Some("demo-ci".to_string()),
            build_script: None,
            deploy_script: None,
        }
    }

    fn rejection(fields: RequestFields) -> String {
        ProvisioningRequest::new(fields).unwrap_err().to_string()
    }

    #[test]
    fn test_valid_request_gets_default_scripts() {
        let request = ProvisioningRequest::new(fields()).unwrap();
        assert_eq!(request.repository_name(), "demo-svc");
        assert_eq!(request.build_script(), DEFAULT_BUILD_SCRIPT);
        assert_eq!(request.deploy_script(), DEFAULT_DEPLOY_SCRIPT);
        assert!(!request.is_private());
    }

    #[test]
    fn test_explicit_scripts_are_kept() {
        let request = ProvisioningRequest::new(RequestFields {
            build_script: Some("cargo test".to_string()),
            deploy_script: Some("cargo build --release".to_string()),
            ..fields()
        })
        .unwrap();
        assert_eq!(request.build_script(), "cargo test");
        assert_eq!(request.deploy_script(), "cargo build --release");
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        assert_eq!(
            rejection(RequestFields {
                repository_name: Some("   ".to_string()),
                ..fields()
            }),
            "Repository name is required"
        );
        assert_eq!(
            rejection(RequestFields {
                description: None,
                ..fields()
            }),
            "Description is required"
        );
        assert_eq!(
            rejection(RequestFields {
                job_name: Some(String::new()),
                ..fields()
            }),
            "Jenkins job name is required"
        );
    }

    #[test]
    fn test_repository_name_character_class() {
        for name in ["demo-svc", "Demo_Svc.v2", "a", "0.1-_"] {
            assert!(validate_repository_name(name).is_ok(), "{name} should be valid");
        }
        for name in ["demo svc", "demo/svc", "démo", "demo!", "owner:repo", ""] {
            assert!(validate_repository_name(name).is_err(), "{name} should be invalid");
        }
    }

    #[test]
    fn test_repository_name_checked_before_description() {
        let err = ProvisioningRequest::new(RequestFields {
            repository_name: Some("bad name".to_string()),
            description: None,
            ..fields()
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "Invalid repository name");
    }
}
