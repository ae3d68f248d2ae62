use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::content::application::domain::experience::Experience;
use crate::modules::content::application::domain::messages::{MessageFilter, Messages};
use crate::modules::content::application::domain::projects::Projects;
use crate::modules::content::application::domain::skills::Skills;
use crate::modules::content::application::domain::testimonials::Testimonials;
use crate::modules::content::application::ports::incoming::use_cases::{
    ContentStats, GetContentStatsError, GetContentStatsUseCase,
};
use crate::modules::content::application::ports::outgoing::content_store::ContentStore;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
// The six counts are independent reads; they fan out concurrently and join
// before the dashboard renders.
//

pub struct ContentStatsService {
    projects: Arc<dyn ContentStore<Projects>>,
    skills: Arc<dyn ContentStore<Skills>>,
    experience: Arc<dyn ContentStore<Experience>>,
    testimonials: Arc<dyn ContentStore<Testimonials>>,
    messages: Arc<dyn ContentStore<Messages>>,
}

impl ContentStatsService {
    pub fn new(
        projects: Arc<dyn ContentStore<Projects>>,
        skills: Arc<dyn ContentStore<Skills>>,
        experience: Arc<dyn ContentStore<Experience>>,
        testimonials: Arc<dyn ContentStore<Testimonials>>,
        messages: Arc<dyn ContentStore<Messages>>,
    ) -> Self {
        Self {
            projects,
            skills,
            experience,
            testimonials,
            messages,
        }
    }
}

#[async_trait]
impl GetContentStatsUseCase for ContentStatsService {
    async fn execute(&self) -> Result<ContentStats, GetContentStatsError> {
        let (projects, skills, experience, testimonials, messages, unread_messages) =
            futures::try_join!(
                self.projects.count(None),
                self.skills.count(None),
                self.experience.count(None),
                self.testimonials.count(None),
                self.messages.count(None),
                self.messages.count(Some(MessageFilter::unread())),
            )
            .map_err(|e| GetContentStatsError::QueryFailed(e.to_string()))?;

        Ok(ContentStats {
            projects,
            skills,
            experience,
            testimonials,
            messages,
            unread_messages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::ports::outgoing::content_store::ContentStoreError;
    use crate::tests::support::stubs::MockStore;

    #[tokio::test]
    async fn joins_all_six_counts() {
        let messages = Arc::new(MockStore::<Messages>::counting(7));
        let service = ContentStatsService::new(
            Arc::new(MockStore::<Projects>::counting(3)),
            Arc::new(MockStore::<Skills>::counting(12)),
            Arc::new(MockStore::<Experience>::counting(2)),
            Arc::new(MockStore::<Testimonials>::counting(4)),
            messages.clone(),
        );

        let stats = service.execute().await.unwrap();

        assert_eq!(stats.projects, 3);
        assert_eq!(stats.skills, 12);
        assert_eq!(stats.experience, 2);
        assert_eq!(stats.testimonials, 4);
        assert_eq!(stats.messages, 7);
        assert_eq!(stats.unread_messages, 7);

        // The unread leg carries the read=false filter.
        let filters = messages.seen_filters.lock().unwrap();
        assert!(filters.contains(&Some(MessageFilter::unread())));
        assert!(filters.contains(&None));
    }

    #[tokio::test]
    async fn any_failing_count_fails_the_dashboard() {
        let service = ContentStatsService::new(
            Arc::new(MockStore::<Projects>::counting(3)),
            Arc::new(MockStore::<Skills>::failing(ContentStoreError::Unavailable(
                "db down".to_string(),
            ))),
            Arc::new(MockStore::<Experience>::counting(2)),
            Arc::new(MockStore::<Testimonials>::counting(4)),
            Arc::new(MockStore::<Messages>::counting(7)),
        );

        let err = service.execute().await.unwrap_err();

        assert!(matches!(err, GetContentStatsError::QueryFailed(_)));
    }
}
