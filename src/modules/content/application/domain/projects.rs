use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::domain::patch::PatchField;
use crate::modules::content::application::domain::tags::TagList;
use crate::modules::content::application::domain::validation::{
    optional_text, require_text, ValidationError,
};

//
// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Vec<String>,
    pub featured: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    /// Accepts a JSON array or the comma-joined form string.
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub technologies: TagList,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub long_description: PatchField<String>,
    #[serde(default)]
    pub image_url: PatchField<String>,
    #[serde(default)]
    pub demo_url: PatchField<String>,
    #[serde(default)]
    pub github_url: PatchField<String>,
    #[serde(default)]
    pub technologies: PatchField<TagList>,
    #[serde(default)]
    pub featured: PatchField<bool>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub featured: Option<bool>,
}

impl ProjectFilter {
    pub fn featured() -> Self {
        Self {
            featured: Some(true),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Schema declaration
// ──────────────────────────────────────────────────────────
//

pub struct Projects;

impl Collection for Projects {
    const NAME: &'static str = "projects";

    type Record = ProjectRecord;
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;
    type Filter = ProjectFilter;

    fn sanitize_draft(mut draft: ProjectDraft) -> Result<ProjectDraft, ValidationError> {
        draft.title = require_text("title", &draft.title)?;
        draft.description = require_text("description", &draft.description)?;
        draft.long_description = optional_text(draft.long_description);
        draft.image_url = optional_text(draft.image_url);
        draft.demo_url = optional_text(draft.demo_url);
        draft.github_url = optional_text(draft.github_url);
        Ok(draft)
    }

    fn sanitize_patch(mut patch: ProjectPatch) -> Result<ProjectPatch, ValidationError> {
        match patch.title {
            PatchField::Null => {
                return Err(ValidationError::new("title", "is required and cannot be cleared"))
            }
            PatchField::Value(ref v) => patch.title = PatchField::Value(require_text("title", v)?),
            PatchField::Unset => {}
        }
        match patch.description {
            PatchField::Null => {
                return Err(ValidationError::new(
                    "description",
                    "is required and cannot be cleared",
                ))
            }
            PatchField::Value(ref v) => {
                patch.description = PatchField::Value(require_text("description", v)?)
            }
            PatchField::Unset => {}
        }
        if patch.featured.is_null() {
            return Err(ValidationError::new("featured", "cannot be cleared"));
        }
        if patch.order_index.is_null() {
            return Err(ValidationError::new("order_index", "cannot be cleared"));
        }
        if patch.technologies.is_null() {
            // Clearing the tag list means an empty list, not NULL.
            patch.technologies = PatchField::Value(TagList::default());
        }
        Ok(patch)
    }
}
