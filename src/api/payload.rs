use serde::{Deserialize, Serialize};

use crate::provision::{Availability, ExistenceQuery, ProvisioningOutcome, RequestFields};

/// Body of `POST /create-project`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub repository_name: Option<String>,
    pub description: Option<String>,
    #[serde(default, alias = "isPrivate")]
    pub private: bool,
    #[serde(rename = "jenkinsJobName", alias = "jobName")]
    pub job_name: Option<String>,
    pub build_script: Option<String>,
    pub deploy_script: Option<String>,
}

impl From<CreateProjectRequest> for RequestFields {
    fn from(req: CreateProjectRequest) -> Self {
        RequestFields {
            repository_name: req.repository_name,
            description: req.description,
            private: req.private,
            job_name: req.job_name,
            build_script: req.build_script,
            deploy_script: req.deploy_script,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jenkins_job_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ProvisioningOutcome> for CreateProjectResponse {
    fn from(outcome: ProvisioningOutcome) -> Self {
        match outcome {
            ProvisioningOutcome::Success {
                message,
                repository_url,
                job_url,
            } => Self {
                success: true,
                message: Some(message),
                github_repo_url: Some(repository_url),
                jenkins_job_url: Some(job_url),
                error: None,
            },
            ProvisioningOutcome::Failure { error } => Self {
                success: false,
                message: None,
                github_repo_url: None,
                jenkins_job_url: None,
                error: Some(error),
            },
        }
    }
}

/// Body of `POST /check-availability`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityRequest {
    pub repository_name: Option<String>,
    #[serde(rename = "jenkinsJobName", alias = "jobName")]
    pub job_name: Option<String>,
}

impl From<CheckAvailabilityRequest> for ExistenceQuery {
    fn from(req: CheckAvailabilityRequest) -> Self {
        ExistenceQuery {
            repository_name: req.repository_name,
            job_name: req.job_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityResponse {
    pub success: bool,
    pub repository_exists: bool,
    pub jenkins_job_exists: bool,
}

impl From<Availability> for CheckAvailabilityResponse {
    fn from(availability: Availability) -> Self {
        Self {
            success: true,
            repository_exists: availability.repository_exists,
            jenkins_job_exists: availability.job_exists,
        }
    }
}
