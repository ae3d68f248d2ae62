use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use crate::modules::content::application::domain::experience::ExperienceRecord;
use crate::modules::content::application::domain::messages::{MessageDraft, MessageRecord};
use crate::modules::content::application::domain::projects::ProjectRecord;
use crate::modules::content::application::domain::skills::SkillRecord;
use crate::modules::content::application::domain::testimonials::TestimonialRecord;
use crate::modules::content::application::ports::incoming::use_cases::ContentStats;
use crate::modules::showcase::application::ports::incoming::use_cases::{
    AboutContent, HomeContent, SkillGroup,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio content plus the admin content-management surface",
    ),
    paths(
        // Public endpoints
        crate::modules::showcase::adapter::incoming::web::routes::get_home::get_home_handler,
        crate::modules::showcase::adapter::incoming::web::routes::get_projects::get_public_projects_handler,
        crate::modules::showcase::adapter::incoming::web::routes::get_about::get_about_handler,
        crate::modules::showcase::adapter::incoming::web::routes::submit_contact::submit_contact_handler,

        // Admin endpoints are generic handlers registered per collection;
        // utoipa cannot derive paths for them, so they are listed here for
        // reference only:
        // GET    /api/admin/dashboard
        // GET    /api/admin/{projects,skills,experience,testimonials,messages}
        // POST   /api/admin/{projects,skills,experience,testimonials}
        // PATCH  /api/admin/{projects,skills,experience,testimonials,messages}/{id}
        // DELETE /api/admin/{projects,skills,experience,testimonials,messages}/{id}
    ),
    components(schemas(
        SuccessResponse<ContentStats>,
        ErrorResponse,
        ErrorDetail,
        ProjectRecord,
        SkillRecord,
        ExperienceRecord,
        TestimonialRecord,
        MessageRecord,
        MessageDraft,
        ContentStats,
        HomeContent,
        AboutContent,
        SkillGroup,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "public", description = "Unauthenticated portfolio content"),
        (name = "admin", description = "Session-gated content management"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
