use axum::{extract::rejection::JsonRejection, extract::State, Json};

use service::catalog::domain::{StatusCheck, StatusCheckInput};
use service::catalog::operation::Operation;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(post, path = "/api/status", tag = "status",
    request_body = crate::openapi::StatusCheckInputDoc,
    responses(
        (status = 200, description = "Stored status check", body = crate::openapi::StatusCheckDoc),
        (status = 422, description = "client_name missing"),
    ))]
pub async fn create_status_check(
    State(state): State<ServerState>,
    body: Result<Json<StatusCheckInput>, JsonRejection>,
) -> Result<Json<StatusCheck>, JsonApiError> {
    let Json(input) = body?;
    let check = state
        .catalog
        .create_status_check(input)
        .await
        .map_err(|e| JsonApiError::from_service(Operation::CreateStatusCheck, e))?;
    Ok(Json(check))
}

#[utoipa::path(get, path = "/api/status", tag = "status",
    responses((status = 200, description = "Stored status checks", body = [crate::openapi::StatusCheckDoc])))]
pub async fn list_status_checks(State(state): State<ServerState>) -> Result<Json<Vec<StatusCheck>>, JsonApiError> {
    let checks = state
        .catalog
        .list_status_checks()
        .await
        .map_err(|e| JsonApiError::from_service(Operation::ListStatusChecks, e))?;
    Ok(Json(checks))
}
