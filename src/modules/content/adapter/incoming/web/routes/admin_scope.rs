use actix_web::{web, HttpResponse, Scope};
use tracing::error;
use uuid::Uuid;

use crate::modules::content::application::collection_use_cases::CollectionUseCases;
use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::domain::experience::Experience;
use crate::modules::content::application::domain::messages::Messages;
use crate::modules::content::application::domain::projects::Projects;
use crate::modules::content::application::domain::skills::Skills;
use crate::modules::content::application::domain::testimonials::Testimonials;
use crate::modules::content::application::ports::incoming::use_cases::{
    CreateEntryError, DeleteEntryError, ListEntriesError, UpdateEntryError,
};
use crate::modules::content::application::ports::outgoing::content_store::ListQuery;
use crate::modules::session::adapter::incoming::web::extractors::admin::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Collection -> state wiring
// ──────────────────────────────────────────────────────────
// The handlers below are written once; each collection only says where its
// use-case bundle lives in the app state.
//

pub trait AdminCollection: Collection {
    fn use_cases(state: &AppState) -> &CollectionUseCases<Self>;
}

impl AdminCollection for Projects {
    fn use_cases(state: &AppState) -> &CollectionUseCases<Projects> {
        &state.projects
    }
}

impl AdminCollection for Skills {
    fn use_cases(state: &AppState) -> &CollectionUseCases<Skills> {
        &state.skills
    }
}

impl AdminCollection for Experience {
    fn use_cases(state: &AppState) -> &CollectionUseCases<Experience> {
        &state.experience
    }
}

impl AdminCollection for Testimonials {
    fn use_cases(state: &AppState) -> &CollectionUseCases<Testimonials> {
        &state.testimonials
    }
}

impl AdminCollection for Messages {
    fn use_cases(state: &AppState) -> &CollectionUseCases<Messages> {
        &state.messages
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

pub async fn list_entries<C: AdminCollection>(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match C::use_cases(&data).list.execute(ListQuery::all()).await {
        Ok(records) => ApiResponse::success(records),

        Err(ListEntriesError::QueryFailed(msg)) => {
            error!("Failed to list {}: {}", C::NAME, msg);
            ApiResponse::internal_error()
        }
    }
}

pub async fn create_entry<C: AdminCollection>(
    _admin: AdminSession,
    req: web::Json<C::Draft>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match C::use_cases(&data).create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateEntryError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateEntryError::StoreError(msg)) => {
            error!("Failed to create {} record: {}", C::NAME, msg);
            ApiResponse::internal_error()
        }
    }
}

pub async fn update_entry<C: AdminCollection>(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<C::Patch>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match C::use_cases(&data)
        .update
        .execute(id, req.into_inner())
        .await
    {
        // The caller re-lists to observe the merged state.
        Ok(()) => ApiResponse::no_content(),

        Err(UpdateEntryError::NotFound) => {
            ApiResponse::not_found("RECORD_NOT_FOUND", "Record not found")
        }

        Err(UpdateEntryError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(UpdateEntryError::StoreError(msg)) => {
            error!("Failed to update {} record {}: {}", C::NAME, id, msg);
            ApiResponse::internal_error()
        }
    }
}

pub async fn delete_entry<C: AdminCollection>(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match C::use_cases(&data).delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteEntryError::StoreError(msg)) => {
            error!("Failed to delete {} record {}: {}", C::NAME, id, msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Scopes
// ──────────────────────────────────────────────────────────
//

pub fn admin_crud_scope<C: AdminCollection>(path: &str) -> Scope {
    web::scope(path)
        .service(
            web::resource("")
                .route(web::get().to(list_entries::<C>))
                .route(web::post().to(create_entry::<C>)),
        )
        .service(
            web::resource("/{id}")
                .route(web::patch().to(update_entry::<C>))
                .route(web::delete().to(delete_entry::<C>)),
        )
}

/// Contact messages are created only by the public form: list, toggle the
/// read flag, delete. No create route.
pub fn admin_inbox_scope<C: AdminCollection>(path: &str) -> Scope {
    web::scope(path)
        .service(web::resource("").route(web::get().to(list_entries::<C>)))
        .service(
            web::resource("/{id}")
                .route(web::patch().to(update_entry::<C>))
                .route(web::delete().to(delete_entry::<C>)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{
        sample_project_record, StubCreateEntryUseCase, StubDeleteEntryUseCase,
        StubListEntriesUseCase, StubUpdateEntryUseCase,
    };

    /* --------------------------------------------------
     * list
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_list_projects_success() {
        let state = TestAppStateBuilder::default()
            .with_project_list(StubListEntriesUseCase::success(vec![
                sample_project_record("One", 1, true),
                sample_project_record("Two", 2, false),
            ]))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state.data())
                .app_data(state.gate())
                .service(admin_crud_scope::<Projects>("/api/admin/projects")),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/projects")
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["title"], "One");
    }

    #[actix_web::test]
    async fn test_list_requires_auth() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state.data())
                .app_data(state.gate())
                .service(admin_crud_scope::<Projects>("/api/admin/projects")),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/projects")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_list_store_failure_is_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_project_list(StubListEntriesUseCase::failure("db down"))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state.data())
                .app_data(state.gate())
                .service(admin_crud_scope::<Projects>("/api/admin/projects")),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/projects")
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    /* --------------------------------------------------
     * create
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_project_created() {
        let state = TestAppStateBuilder::default()
            .with_project_create(StubCreateEntryUseCase::success(sample_project_record(
                "New Project",
                1,
                false,
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state.data())
                .app_data(state.gate())
                .service(admin_crud_scope::<Projects>("/api/admin/projects")),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/projects")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(json!({
                "title": "New Project",
                "description": "desc",
                "technologies": "Rust, Postgres"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["title"], "New Project");
    }

    #[actix_web::test]
    async fn test_create_validation_failure_is_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_project_create(StubCreateEntryUseCase::validation_failure(
                "title: must not be empty",
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state.data())
                .app_data(state.gate())
                .service(admin_crud_scope::<Projects>("/api/admin/projects")),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/projects")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(json!({
                "title": "",
                "description": "desc"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "title: must not be empty");
    }

    /* --------------------------------------------------
     * update
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_update_project_no_content() {
        let state = TestAppStateBuilder::default()
            .with_project_update(StubUpdateEntryUseCase::success())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state.data())
                .app_data(state.gate())
                .service(admin_crud_scope::<Projects>("/api/admin/projects")),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/projects/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(json!({"featured": true}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_update_vanished_record_is_not_found() {
        let state = TestAppStateBuilder::default()
            .with_project_update(StubUpdateEntryUseCase::not_found())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state.data())
                .app_data(state.gate())
                .service(admin_crud_scope::<Projects>("/api/admin/projects")),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/projects/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(json!({"featured": true}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "RECORD_NOT_FOUND");
    }

    /* --------------------------------------------------
     * delete
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_delete_project_no_content() {
        let state = TestAppStateBuilder::default()
            .with_project_delete(StubDeleteEntryUseCase::success())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state.data())
                .app_data(state.gate())
                .service(admin_crud_scope::<Projects>("/api/admin/projects")),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/projects/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    /* --------------------------------------------------
     * inbox scope
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_messages_scope_has_no_create_route() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state.data())
                .app_data(state.gate())
                .service(admin_inbox_scope::<Messages>("/api/admin/messages")),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/messages")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(json!({
                "name": "x", "email": "x@example.com",
                "subject": "s", "message": "m"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
