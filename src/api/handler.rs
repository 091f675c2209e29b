use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api::payload::{
    CheckAvailabilityRequest, CheckAvailabilityResponse, CreateProjectRequest,
    CreateProjectResponse,
};
use crate::provision::{check_availability, ProvisioningOutcome, ProvisioningRequest};
use crate::server::AppState;

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProjectRequest>,
) -> Json<CreateProjectResponse> {
    // Validation gate: nothing reaches the platforms unless this passes
    let request = match ProvisioningRequest::new(payload.into()) {
        Ok(request) => request,
        Err(e) => {
            tracing::info!(error = %e, "Rejected invalid provisioning request");
            return Json(ProvisioningOutcome::failure(format!("Validation failed: {e}")).into());
        }
    };

    let outcome = state.provisioner.provision(&request).await;
    Json(outcome.into())
}

pub async fn check_availability_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CheckAvailabilityRequest>,
) -> Json<CheckAvailabilityResponse> {
    let provisioner = &state.provisioner;
    let availability = check_availability(
        provisioner.repositories(),
        provisioner.ci(),
        &payload.into(),
    )
    .await;

    Json(availability.into())
}
