use async_trait::async_trait;
use std::fmt;

use crate::modules::content::application::domain::collection::Collection;

#[derive(Debug, Clone)]
pub enum CreateEntryError {
    /// Rejected before reaching the store; the message names the field.
    Validation(String),
    StoreError(String),
}

impl fmt::Display for CreateEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateEntryError::Validation(msg) => write!(f, "validation failed: {}", msg),
            CreateEntryError::StoreError(msg) => write!(f, "store error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateEntryUseCase<C: Collection>: Send + Sync {
    async fn execute(&self, draft: C::Draft) -> Result<C::Record, CreateEntryError>;
}
