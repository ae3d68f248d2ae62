use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::domain::patch::PatchField;
use crate::modules::content::application::domain::validation::{
    int_in_range, optional_text, require_text, ValidationError,
};

pub const PROFICIENCY_MIN: i32 = 0;
pub const PROFICIENCY_MAX: i32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkillRecord {
    pub id: Uuid,
    pub name: String,
    /// Free-text grouping key, not a relation.
    pub category: String,
    pub proficiency: i32,
    pub icon: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkillDraft {
    pub name: String,
    pub category: String,
    pub proficiency: i32,
    pub icon: Option<String>,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillPatch {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub category: PatchField<String>,
    #[serde(default)]
    pub proficiency: PatchField<i32>,
    #[serde(default)]
    pub icon: PatchField<String>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
}

pub struct Skills;

impl Collection for Skills {
    const NAME: &'static str = "skills";

    type Record = SkillRecord;
    type Draft = SkillDraft;
    type Patch = SkillPatch;
    type Filter = ();

    fn sanitize_draft(mut draft: SkillDraft) -> Result<SkillDraft, ValidationError> {
        draft.name = require_text("name", &draft.name)?;
        draft.category = require_text("category", &draft.category)?;
        int_in_range(
            "proficiency",
            draft.proficiency,
            PROFICIENCY_MIN,
            PROFICIENCY_MAX,
        )?;
        draft.icon = optional_text(draft.icon);
        Ok(draft)
    }

    fn sanitize_patch(mut patch: SkillPatch) -> Result<SkillPatch, ValidationError> {
        match patch.name {
            PatchField::Null => {
                return Err(ValidationError::new("name", "is required and cannot be cleared"))
            }
            PatchField::Value(ref v) => patch.name = PatchField::Value(require_text("name", v)?),
            PatchField::Unset => {}
        }
        match patch.category {
            PatchField::Null => {
                return Err(ValidationError::new(
                    "category",
                    "is required and cannot be cleared",
                ))
            }
            PatchField::Value(ref v) => {
                patch.category = PatchField::Value(require_text("category", v)?)
            }
            PatchField::Unset => {}
        }
        match patch.proficiency {
            PatchField::Null => {
                return Err(ValidationError::new("proficiency", "cannot be cleared"))
            }
            PatchField::Value(v) => {
                int_in_range("proficiency", v, PROFICIENCY_MIN, PROFICIENCY_MAX)?
            }
            PatchField::Unset => {}
        }
        if patch.order_index.is_null() {
            return Err(ValidationError::new("order_index", "cannot be cleared"));
        }
        Ok(patch)
    }
}
