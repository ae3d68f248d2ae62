use actix_web::{get, web, Responder};

use crate::modules::showcase::application::ports::incoming::use_cases::AboutContent;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/public/about",
    tag = "public",
    responses(
        (
            status = 200,
            description = "Skills grouped by category plus the experience timeline",
            body = AboutContent,
        )
    )
)]
#[get("/api/public/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    let content = data.about.execute().await;
    ApiResponse::success(content)
}
