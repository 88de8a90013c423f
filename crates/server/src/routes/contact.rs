use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::Serialize;
use uuid::Uuid;

use service::catalog::domain::{Contact, ContactInput};
use service::catalog::operation::Operation;

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub const CONTACT_ACK_MESSAGE: &str =
    "Mensaje enviado correctamente. Nos pondremos en contacto contigo pronto.";

#[derive(Debug, Serialize)]
pub struct ContactCreated {
    pub success: bool,
    pub message: &'static str,
    pub contact_id: Uuid,
}

#[utoipa::path(post, path = "/api/contact", tag = "contacts",
    request_body = crate::openapi::ContactInputDoc,
    responses(
        (status = 201, description = "Contact stored", body = crate::openapi::ContactCreatedDoc),
        (status = 422, description = "Invalid contact fields"),
        (status = 500, description = "Storage failure"),
    ))]
pub async fn submit_contact(
    State(state): State<ServerState>,
    body: Result<Json<ContactInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactCreated>), JsonApiError> {
    let Json(input) = body?;
    let receipt = state
        .catalog
        .submit_contact(input)
        .await
        .map_err(|e| JsonApiError::from_service(Operation::SubmitContact, e))?;
    Ok((
        StatusCode::CREATED,
        Json(ContactCreated { success: true, message: CONTACT_ACK_MESSAGE, contact_id: receipt.contact_id }),
    ))
}

#[utoipa::path(get, path = "/api/contacts", tag = "contacts",
    responses((status = 200, description = "Contacts, newest first", body = [crate::openapi::ContactDoc])))]
pub async fn list_contacts(State(state): State<ServerState>) -> Result<Json<Vec<Contact>>, JsonApiError> {
    let contacts = state
        .catalog
        .list_contacts()
        .await
        .map_err(|e| JsonApiError::from_service(Operation::ListContacts, e))?;
    Ok(Json(contacts))
}
