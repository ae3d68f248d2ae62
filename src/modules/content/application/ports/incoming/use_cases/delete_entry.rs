use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::content::application::domain::collection::Collection;

#[derive(Debug, Clone)]
pub enum DeleteEntryError {
    StoreError(String),
}

impl fmt::Display for DeleteEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteEntryError::StoreError(msg) => write!(f, "store error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteEntryUseCase<C: Collection>: Send + Sync {
    /// Irreversible, and idempotent from the caller's perspective: a second
    /// delete of the same id (double submit) succeeds as a no-op.
    async fn execute(&self, id: Uuid) -> Result<(), DeleteEntryError>;
}
