use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::application::domain::experience::ExperienceRecord;
use crate::modules::content::application::domain::skills::SkillRecord;

//
// ──────────────────────────────────────────────────────────
// About page projection
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<SkillRecord>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AboutContent {
    /// Groups appear in first-seen order of the sorted skill listing; skills
    /// keep their sort order within each group.
    pub skill_groups: Vec<SkillGroup>,
    pub experience: Vec<ExperienceRecord>,
}

/// Infallible by contract: sections degrade to empty on store failure.
#[async_trait]
pub trait GetAboutContentUseCase: Send + Sync {
    async fn execute(&self) -> AboutContent;
}
