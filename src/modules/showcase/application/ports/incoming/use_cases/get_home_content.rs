use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::application::domain::projects::ProjectRecord;
use crate::modules::content::application::domain::testimonials::TestimonialRecord;

//
// ──────────────────────────────────────────────────────────
// Home page projection
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HomeContent {
    pub featured_projects: Vec<ProjectRecord>,
    pub featured_testimonials: Vec<TestimonialRecord>,
}

/// Infallible by contract: each section independently degrades to empty on a
/// store failure instead of turning the landing page into an error page.
#[async_trait]
pub trait GetHomeContentUseCase: Send + Sync {
    async fn execute(&self) -> HomeContent;
}
