use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::content::application::ports::incoming::use_cases::GetContentStatsError;
use crate::modules::session::adapter::incoming::web::extractors::admin::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/dashboard")]
pub async fn get_dashboard_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),

        Err(GetContentStatsError::QueryFailed(msg)) => {
            error!("Failed to load dashboard stats: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
