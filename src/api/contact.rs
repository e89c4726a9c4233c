use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, MessageResponse};
use crate::models::contact::ContactMessage;

/// POST /contact
/// Persist a contact-form submission. Required fields are enforced by the
/// store; a missing one fails the insert.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactMessage>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .store()
        .create_contact(&payload)
        .await
        .map_err(|e| ApiError::database("Failed to save contact message", e))?;

    Ok(Json(MessageResponse::new(
        "Contact message saved successfully",
    )))
}
