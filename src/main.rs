pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::content;
pub use modules::session;
pub use modules::showcase;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::content::adapter::incoming::web::routes::admin_scope::{
    admin_crud_scope, admin_inbox_scope,
};
use crate::content::adapter::outgoing::content_store_postgres::ContentStorePostgres;
use crate::content::application::collection_use_cases::CollectionUseCases;
use crate::content::application::domain::experience::Experience;
use crate::content::application::domain::messages::Messages;
use crate::content::application::domain::projects::Projects;
use crate::content::application::domain::skills::Skills;
use crate::content::application::domain::testimonials::Testimonials;
use crate::content::application::ports::incoming::use_cases::GetContentStatsUseCase;
use crate::content::application::ports::outgoing::content_store::ContentStore;
use crate::content::application::service::content_stats_service::ContentStatsService;
use crate::session::adapter::outgoing::jwt_gate::{JwtConfig, JwtSessionGate};
use crate::session::application::ports::outgoing::session_gate::SessionGate;
use crate::shared::api::custom_json_config;
use crate::showcase::application::ports::incoming::use_cases::{
    GetAboutContentUseCase, GetHomeContentUseCase,
};
use crate::showcase::application::service::get_about_content_service::GetAboutContentService;
use crate::showcase::application::service::get_home_content_service::GetHomeContentService;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub projects: CollectionUseCases<Projects>,
    pub skills: CollectionUseCases<Skills>,
    pub experience: CollectionUseCases<Experience>,
    pub testimonials: CollectionUseCases<Testimonials>,
    pub messages: CollectionUseCases<Messages>,
    pub stats: Arc<dyn GetContentStatsUseCase>,
    pub home: Arc<dyn GetHomeContentUseCase>,
    pub about: Arc<dyn GetAboutContentUseCase>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // One generic store client per collection
    let project_store = ContentStorePostgres::<Projects>::new(Arc::clone(&db_arc));
    let skill_store = ContentStorePostgres::<Skills>::new(Arc::clone(&db_arc));
    let experience_store = ContentStorePostgres::<Experience>::new(Arc::clone(&db_arc));
    let testimonial_store = ContentStorePostgres::<Testimonials>::new(Arc::clone(&db_arc));
    let message_store = ContentStorePostgres::<Messages>::new(Arc::clone(&db_arc));

    let project_store_arc: Arc<dyn ContentStore<Projects>> = Arc::new(project_store.clone());
    let skill_store_arc: Arc<dyn ContentStore<Skills>> = Arc::new(skill_store.clone());
    let experience_store_arc: Arc<dyn ContentStore<Experience>> =
        Arc::new(experience_store.clone());
    let testimonial_store_arc: Arc<dyn ContentStore<Testimonials>> =
        Arc::new(testimonial_store.clone());
    let message_store_arc: Arc<dyn ContentStore<Messages>> = Arc::new(message_store.clone());

    let stats_service = ContentStatsService::new(
        Arc::clone(&project_store_arc),
        Arc::clone(&skill_store_arc),
        Arc::clone(&experience_store_arc),
        Arc::clone(&testimonial_store_arc),
        Arc::clone(&message_store_arc),
    );
    let home_service = GetHomeContentService::new(
        Arc::clone(&project_store_arc),
        Arc::clone(&testimonial_store_arc),
    );
    let about_service = GetAboutContentService::new(
        Arc::clone(&skill_store_arc),
        Arc::clone(&experience_store_arc),
    );

    let state = AppState {
        projects: CollectionUseCases::wire(project_store),
        skills: CollectionUseCases::wire(skill_store),
        experience: CollectionUseCases::wire(experience_store),
        testimonials: CollectionUseCases::wire(testimonial_store),
        messages: CollectionUseCases::wire(message_store),
        stats: Arc::new(stats_service),
        home: Arc::new(home_service),
        about: Arc::new(about_service),
    };

    // Session Gate: verifies externally-issued admin tokens, nothing more
    let session_gate: Arc<dyn SessionGate> = Arc::new(JwtSessionGate::new(JwtConfig::from_env()));

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&session_gate)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public
    cfg.service(crate::showcase::adapter::incoming::web::routes::get_home::get_home_handler);
    cfg.service(
        crate::showcase::adapter::incoming::web::routes::get_projects::get_public_projects_handler,
    );
    cfg.service(crate::showcase::adapter::incoming::web::routes::get_about::get_about_handler);
    cfg.service(
        crate::showcase::adapter::incoming::web::routes::submit_contact::submit_contact_handler,
    );
    // Admin
    cfg.service(crate::content::adapter::incoming::web::routes::dashboard::get_dashboard_handler);
    cfg.service(admin_crud_scope::<Projects>("/api/admin/projects"));
    cfg.service(admin_crud_scope::<Skills>("/api/admin/skills"));
    cfg.service(admin_crud_scope::<Experience>("/api/admin/experience"));
    cfg.service(admin_crud_scope::<Testimonials>("/api/admin/testimonials"));
    cfg.service(admin_inbox_scope::<Messages>("/api/admin/messages"));
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
