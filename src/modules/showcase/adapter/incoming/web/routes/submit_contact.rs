use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::content::application::domain::messages::MessageDraft;
use crate::modules::content::application::ports::incoming::use_cases::CreateEntryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/public/contact",
    tag = "public",
    request_body = MessageDraft,
    responses(
        (status = 201, description = "Message stored"),
        (status = 400, description = "Validation failed; resubmit with the field fixed"),
        (status = 500, description = "Store unavailable"),
    )
)]
#[post("/api/public/contact")]
pub async fn submit_contact_handler(
    req: web::Json<MessageDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    // The one public mutation. Reading the inbox stays behind the admin gate.
    match data.messages.create.execute(req.into_inner()).await {
        Ok(stored) => ApiResponse::created(stored),

        // Surfaced inline so the visitor can fix the field and resubmit.
        Err(CreateEntryError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(CreateEntryError::StoreError(msg)) => {
            error!("Failed to store contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
