use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::domain::patch::PatchField;
use crate::modules::content::application::domain::validation::{
    int_in_range, optional_text, require_text, ValidationError,
};

pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestimonialRecord {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub avatar_url: Option<String>,
    pub rating: i32,
    pub featured: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestimonialDraft {
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub avatar_url: Option<String>,
    pub rating: i32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestimonialPatch {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub position: PatchField<String>,
    #[serde(default)]
    pub company: PatchField<String>,
    #[serde(default)]
    pub content: PatchField<String>,
    #[serde(default)]
    pub avatar_url: PatchField<String>,
    #[serde(default)]
    pub rating: PatchField<i32>,
    #[serde(default)]
    pub featured: PatchField<bool>,
    #[serde(default)]
    pub order_index: PatchField<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestimonialFilter {
    pub featured: Option<bool>,
}

impl TestimonialFilter {
    pub fn featured() -> Self {
        Self {
            featured: Some(true),
        }
    }
}

pub struct Testimonials;

impl Collection for Testimonials {
    const NAME: &'static str = "testimonials";

    type Record = TestimonialRecord;
    type Draft = TestimonialDraft;
    type Patch = TestimonialPatch;
    type Filter = TestimonialFilter;

    fn sanitize_draft(mut draft: TestimonialDraft) -> Result<TestimonialDraft, ValidationError> {
        draft.name = require_text("name", &draft.name)?;
        draft.position = require_text("position", &draft.position)?;
        draft.company = require_text("company", &draft.company)?;
        draft.content = require_text("content", &draft.content)?;
        draft.avatar_url = optional_text(draft.avatar_url);
        int_in_range("rating", draft.rating, RATING_MIN, RATING_MAX)?;
        Ok(draft)
    }

    fn sanitize_patch(mut patch: TestimonialPatch) -> Result<TestimonialPatch, ValidationError> {
        for (field, value) in [
            ("name", &mut patch.name),
            ("position", &mut patch.position),
            ("company", &mut patch.company),
            ("content", &mut patch.content),
        ] {
            match value {
                PatchField::Null => {
                    return Err(ValidationError::new(field, "is required and cannot be cleared"))
                }
                PatchField::Value(v) => *value = PatchField::Value(require_text(field, v)?),
                PatchField::Unset => {}
            }
        }
        match patch.rating {
            PatchField::Null => return Err(ValidationError::new("rating", "cannot be cleared")),
            PatchField::Value(v) => int_in_range("rating", v, RATING_MIN, RATING_MAX)?,
            PatchField::Unset => {}
        }
        if patch.featured.is_null() {
            return Err(ValidationError::new("featured", "cannot be cleared"));
        }
        if patch.order_index.is_null() {
            return Err(ValidationError::new("order_index", "cannot be cleared"));
        }
        Ok(patch)
    }
}
