//! Contact form handler

use axum::{extract::State, Json};
use portfolio_shared::{ContactRequest, ContactResponse};

use crate::extract::ApiJson;
use crate::{AppResult, AppState};

pub const CONTACT_SUCCESS_MESSAGE: &str = "Message sent successfully. Thank you for your contact!";

/// Validate and store a contact form submission
pub async fn submit(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ContactRequest>,
) -> AppResult<Json<ContactResponse>> {
    let message = req.validated()?;

    let contact = state.contacts.insert(&message).await?;

    tracing::info!(
        id = contact.id,
        name = %contact.name,
        email = %contact.email,
        "Contact form submission stored"
    );

    Ok(Json(ContactResponse {
        success: true,
        message: CONTACT_SUCCESS_MESSAGE.to_string(),
    }))
}
