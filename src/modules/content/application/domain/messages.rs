use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::domain::patch::PatchField;
use crate::modules::content::application::domain::validation::{
    require_email, require_text, ValidationError,
};

//
// ──────────────────────────────────────────────────────────
// Contact messages
// ──────────────────────────────────────────────────────────
// Created only by the public contact form; the admin surface can list them,
// toggle the read flag and delete them, never create.
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDraft {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Project inquiry")]
    pub subject: String,
    pub message: String,
}

/// The only administrative mutation is flipping the read flag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagePatch {
    #[serde(default)]
    pub read: PatchField<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFilter {
    pub read: Option<bool>,
}

impl MessageFilter {
    pub fn unread() -> Self {
        Self { read: Some(false) }
    }
}

pub struct Messages;

impl Collection for Messages {
    const NAME: &'static str = "contact_messages";

    type Record = MessageRecord;
    type Draft = MessageDraft;
    type Patch = MessagePatch;
    type Filter = MessageFilter;

    fn sanitize_draft(mut draft: MessageDraft) -> Result<MessageDraft, ValidationError> {
        draft.name = require_text("name", &draft.name)?;
        draft.email = require_email("email", &draft.email)?;
        draft.subject = require_text("subject", &draft.subject)?;
        draft.message = require_text("message", &draft.message)?;
        Ok(draft)
    }

    fn sanitize_patch(patch: MessagePatch) -> Result<MessagePatch, ValidationError> {
        if patch.read.is_null() {
            return Err(ValidationError::new("read", "cannot be cleared"));
        }
        Ok(patch)
    }
}
