use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::content::application::domain::collection::Collection;

#[derive(Debug, Clone)]
pub enum UpdateEntryError {
    NotFound,
    Validation(String),
    StoreError(String),
}

impl fmt::Display for UpdateEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateEntryError::NotFound => write!(f, "record not found"),
            UpdateEntryError::Validation(msg) => write!(f, "validation failed: {}", msg),
            UpdateEntryError::StoreError(msg) => write!(f, "store error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateEntryUseCase<C: Collection>: Send + Sync {
    /// Merges the provided fields; callers re-list to observe the new state.
    async fn execute(&self, id: Uuid, patch: C::Patch) -> Result<(), UpdateEntryError>;
}
