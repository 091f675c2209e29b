/// Result of a provisioning call.
///
/// Partial provisioning (repository created, job not) is a `Failure` whose
/// message says so; there is no separate variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisioningOutcome {
    /// Both resources exist.
    Success {
        message: String,
        repository_url: String,
        job_url: String,
    },
    /// The request was rejected or a required step failed.
    Failure { error: String },
}

impl ProvisioningOutcome {
    pub fn failure(error: impl Into<String>) -> Self {
        ProvisioningOutcome::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProvisioningOutcome::Success { .. })
    }
}
