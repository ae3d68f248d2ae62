use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::domain::patch::PatchField;
use crate::modules::content::application::domain::tags::TagList;
use crate::modules::content::application::domain::validation::{
    optional_text, require_text, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub location: Option<String>,
    pub technologies: Vec<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExperienceDraft {
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub location: Option<String>,
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub technologies: TagList,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperiencePatch {
    #[serde(default)]
    pub company: PatchField<String>,
    #[serde(default)]
    pub position: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub start_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub current: PatchField<bool>,
    #[serde(default)]
    pub location: PatchField<String>,
    #[serde(default)]
    pub technologies: PatchField<TagList>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
}

pub struct Experience;

impl Collection for Experience {
    const NAME: &'static str = "experience";

    type Record = ExperienceRecord;
    type Draft = ExperienceDraft;
    type Patch = ExperiencePatch;
    type Filter = ();

    fn sanitize_draft(mut draft: ExperienceDraft) -> Result<ExperienceDraft, ValidationError> {
        draft.company = require_text("company", &draft.company)?;
        draft.position = require_text("position", &draft.position)?;
        draft.description = require_text("description", &draft.description)?;
        draft.location = optional_text(draft.location);
        // A current position has no end date, whatever the form supplied.
        if draft.current {
            draft.end_date = None;
        }
        Ok(draft)
    }

    fn sanitize_patch(mut patch: ExperiencePatch) -> Result<ExperiencePatch, ValidationError> {
        match patch.company {
            PatchField::Null => {
                return Err(ValidationError::new("company", "is required and cannot be cleared"))
            }
            PatchField::Value(ref v) => {
                patch.company = PatchField::Value(require_text("company", v)?)
            }
            PatchField::Unset => {}
        }
        match patch.position {
            PatchField::Null => {
                return Err(ValidationError::new(
                    "position",
                    "is required and cannot be cleared",
                ))
            }
            PatchField::Value(ref v) => {
                patch.position = PatchField::Value(require_text("position", v)?)
            }
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
        if patch.start_date.is_null() {
            return Err(ValidationError::new("start_date", "is required and cannot be cleared"));
        }
        if patch.current.is_null() {
            return Err(ValidationError::new("current", "cannot be cleared"));
        }
        if patch.order_index.is_null() {
            return Err(ValidationError::new("order_index", "cannot be cleared"));
        }
        if patch.technologies.is_null() {
            patch.technologies = PatchField::Value(TagList::default());
        }
        // Switching to "currently employed" clears any stored end date, even
        // when the patch itself left end_date untouched.
        if patch.current == PatchField::Value(true) {
            patch.end_date = PatchField::Null;
        }
        Ok(patch)
    }
}
