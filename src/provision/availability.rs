use crate::platform::{CiPlatform, RepositoryPlatform};

/// Names to look up. Absent or blank names are reported as free without a
/// lookup.
#[derive(Debug, Clone, Default)]
pub struct ExistenceQuery {
    pub repository_name: Option<String>,
    pub job_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub repository_exists: bool,
    pub job_exists: bool,
}

/// Check both names independently, without provisioning anything.
pub async fn check_availability(
    repositories: &dyn RepositoryPlatform,
    ci: &dyn CiPlatform,
    query: &ExistenceQuery,
) -> Availability {
    let repository_exists = match non_blank(query.repository_name.as_deref()) {
        Some(name) => repositories.repository_exists(name).await,
        None => false,
    };

    let job_exists = match non_blank(query.job_name.as_deref()) {
        Some(name) => ci.job_exists(name).await,
        None => false,
    };

    tracing::debug!(repository_exists, job_exists, "Availability checked");

    Availability {
        repository_exists,
        job_exists,
    }
}

fn non_blank(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.trim().is_empty())
}
