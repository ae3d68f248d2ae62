use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::modules::content::application::domain::projects::{ProjectFilter, Projects};
use crate::modules::content::application::domain::testimonials::{
    TestimonialFilter, Testimonials,
};
use crate::modules::content::application::ports::outgoing::content_store::{
    ContentStore, ListQuery,
};
use crate::modules::showcase::application::ports::incoming::use_cases::{
    GetHomeContentUseCase, HomeContent,
};

/// Landing page hard limits, same as the rendered grid.
const FEATURED_PROJECTS_LIMIT: u64 = 3;
const FEATURED_TESTIMONIALS_LIMIT: u64 = 2;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
// Two independent reads, fanned out and joined. A failing section logs and
// renders empty; it never takes the other section down with it.
//

pub struct GetHomeContentService {
    projects: Arc<dyn ContentStore<Projects>>,
    testimonials: Arc<dyn ContentStore<Testimonials>>,
}

impl GetHomeContentService {
    pub fn new(
        projects: Arc<dyn ContentStore<Projects>>,
        testimonials: Arc<dyn ContentStore<Testimonials>>,
    ) -> Self {
        Self {
            projects,
            testimonials,
        }
    }
}

#[async_trait]
impl GetHomeContentUseCase for GetHomeContentService {
    async fn execute(&self) -> HomeContent {
        let projects_query =
            ListQuery::filtered(ProjectFilter::featured()).with_limit(FEATURED_PROJECTS_LIMIT);
        let testimonials_query = ListQuery::filtered(TestimonialFilter::featured())
            .with_limit(FEATURED_TESTIMONIALS_LIMIT);

        let (featured_projects, featured_testimonials) = tokio::join!(
            self.projects.list(projects_query),
            self.testimonials.list(testimonials_query),
        );

        let featured_projects = featured_projects.unwrap_or_else(|e| {
            warn!("Featured projects degraded to empty: {}", e);
            Vec::new()
        });

        let featured_testimonials = featured_testimonials.unwrap_or_else(|e| {
            warn!("Featured testimonials degraded to empty: {}", e);
            Vec::new()
        });

        HomeContent {
            featured_projects,
            featured_testimonials,
        }
    }
}
