use crate::error::AppError;

/// HTTP status GitHub answered with, if the request got that far.
pub fn status_of(err: &octocrab::Error) -> Option<u16> {
    match err {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}

/// Best description of what GitHub sent back, for diagnostics.
pub fn response_content(err: &octocrab::Error) -> String {
    match err {
        octocrab::Error::GitHub { source, .. } => source.message.clone(),
        other => other.to_string(),
    }
}

/// Map a failed repository creation into the user-facing error taxonomy.
pub fn map_create_repository_error(name: &str, err: &octocrab::Error) -> AppError {
    classify_create_repository(name, status_of(err), &response_content(err))
}

pub fn classify_create_repository(name: &str, status: Option<u16>, content: &str) -> AppError {
    match status {
        // GitHub answers 422 when the name is already taken
        Some(422) => AppError::Conflict(format!(
            "Repository '{name}' already exists. Please choose a different name."
        )),
        Some(401) => AppError::Auth(
            "GitHub authentication failed. Please check your access token.".to_string(),
        ),
        Some(403) => {
            AppError::Auth("GitHub access forbidden. Check your token permissions.".to_string())
        }
        _ => AppError::Upstream(format!("Failed to create GitHub repository: {content}")),
    }
}

pub fn map_create_webhook_error(err: &octocrab::Error) -> AppError {
    AppError::Upstream(format!(
        "Failed to create GitHub webhook: {}",
        response_content(err)
    ))
}

pub fn map_owner_error(err: &octocrab::Error) -> AppError {
    AppError::Upstream(format!(
        "Failed to get current user: {}",
        response_content(err)
    ))
}
