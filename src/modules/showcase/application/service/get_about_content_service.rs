use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::modules::content::application::domain::experience::Experience;
use crate::modules::content::application::domain::skills::{SkillRecord, Skills};
use crate::modules::content::application::ports::outgoing::content_store::{
    ContentStore, ListQuery,
};
use crate::modules::showcase::application::ports::incoming::use_cases::{
    AboutContent, GetAboutContentUseCase, SkillGroup,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetAboutContentService {
    skills: Arc<dyn ContentStore<Skills>>,
    experience: Arc<dyn ContentStore<Experience>>,
}

impl GetAboutContentService {
    pub fn new(
        skills: Arc<dyn ContentStore<Skills>>,
        experience: Arc<dyn ContentStore<Experience>>,
    ) -> Self {
        Self { skills, experience }
    }
}

#[async_trait]
impl GetAboutContentUseCase for GetAboutContentService {
    async fn execute(&self) -> AboutContent {
        let (skills, experience) = tokio::join!(
            self.skills.list(ListQuery::all()),
            self.experience.list(ListQuery::all()),
        );

        let skills = skills.unwrap_or_else(|e| {
            warn!("Skills section degraded to empty: {}", e);
            Vec::new()
        });

        let experience = experience.unwrap_or_else(|e| {
            warn!("Experience section degraded to empty: {}", e);
            Vec::new()
        });

        AboutContent {
            skill_groups: group_by_category(skills),
            experience,
        }
    }
}

/// Groups an already-sorted skill listing by category. Group order is the
/// first appearance of each category in the input; within a group the input
/// order (sort key, then insertion order) is preserved.
fn group_by_category(skills: Vec<SkillRecord>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                skills: vec![skill],
            }),
        }
    }

    groups
}
