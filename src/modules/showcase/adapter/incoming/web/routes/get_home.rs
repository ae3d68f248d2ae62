use actix_web::{get, web, Responder};

use crate::modules::showcase::application::ports::incoming::use_cases::HomeContent;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/public/home",
    tag = "public",
    responses(
        (
            status = 200,
            description = "Landing page content: top featured projects and testimonials",
            body = HomeContent,
        )
    )
)]
#[get("/api/public/home")]
pub async fn get_home_handler(data: web::Data<AppState>) -> impl Responder {
    let content = data.home.execute().await;
    ApiResponse::success(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{
        sample_project_record, sample_testimonial_record, StubGetHomeContentUseCase,
    };

    #[actix_web::test]
    async fn test_home_returns_featured_sections() {
        let state = TestAppStateBuilder::default()
            .with_home(StubGetHomeContentUseCase::new(HomeContent {
                featured_projects: vec![sample_project_record("One", 1, true)],
                featured_testimonials: vec![sample_testimonial_record("Jordan", 1, true, 5)],
            }))
            .build();

        let app = test::init_service(
            App::new().app_data(state.data()).service(get_home_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/public/home").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["featured_projects"][0]["title"], "One");
        assert_eq!(body["data"]["featured_testimonials"][0]["rating"], 5);
    }

    #[actix_web::test]
    async fn test_home_renders_empty_sections_without_error() {
        let state = TestAppStateBuilder::default()
            .with_home(StubGetHomeContentUseCase::new(HomeContent {
                featured_projects: vec![],
                featured_testimonials: vec![],
            }))
            .build();

        let app = test::init_service(
            App::new().app_data(state.data()).service(get_home_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/public/home").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["featured_projects"].as_array().unwrap().len(), 0);
    }
}
