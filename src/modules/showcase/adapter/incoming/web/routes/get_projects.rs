use actix_web::{get, web, Responder};
use tracing::warn;

use crate::modules::content::application::domain::projects::ProjectRecord;
use crate::modules::content::application::ports::incoming::use_cases::ListEntriesError;
use crate::modules::content::application::ports::outgoing::content_store::ListQuery;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/public/projects",
    tag = "public",
    responses(
        (
            status = 200,
            description = "Full project gallery in display order",
            body = Vec<ProjectRecord>,
        )
    )
)]
#[get("/api/public/projects")]
pub async fn get_public_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.projects.list.execute(ListQuery::all()).await {
        Ok(records) => ApiResponse::success(records),

        // The gallery degrades to an empty listing, never an error page.
        Err(ListEntriesError::QueryFailed(msg)) => {
            warn!("Project gallery degraded to empty: {}", msg);
            ApiResponse::success(Vec::<ProjectRecord>::new())
        }
    }
}
