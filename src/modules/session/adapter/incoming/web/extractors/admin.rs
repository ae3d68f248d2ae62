use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::modules::session::application::ports::outgoing::session_gate::SessionGate;
use crate::shared::api::ApiResponse;

/// An authenticated administrator. Every admin route takes this extractor;
/// the token itself is issued and revoked by the external identity provider.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub admin_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let gate = match req.app_data::<web::Data<Arc<dyn SessionGate>>>() {
            Some(gate) => gate,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match gate.verify(&token) {
            Ok(claims) => {
                if !claims.is_admin {
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "NOT_ADMIN",
                        "Administrator access required",
                    ))));
                }

                ready(Ok(AdminSession {
                    admin_id: claims.sub,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
