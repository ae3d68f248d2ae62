use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::collection::Collection;

//
// ──────────────────────────────────────────────────────────
// List query
// ──────────────────────────────────────────────────────────
// Ordering is not caller-chosen: every collection has one canonical composite
// display order (its sort key, with insertion order breaking ties).
//

pub struct ListQuery<C: Collection> {
    pub filter: Option<C::Filter>,
    pub limit: Option<u64>,
}

impl<C: Collection> ListQuery<C> {
    pub fn all() -> Self {
        Self {
            filter: None,
            limit: None,
        }
    }

    pub fn filtered(filter: C::Filter) -> Self {
        Self {
            filter: Some(filter),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl<C: Collection> Default for ListQuery<C> {
    fn default() -> Self {
        Self::all()
    }
}

impl<C: Collection> Clone for ListQuery<C> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            limit: self.limit,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentStoreError {
    /// Mutation target does not exist. Reads never produce this; an empty
    /// result set is an empty `Vec`.
    #[error("Record not found")]
    NotFound,

    /// The store rejected the record contents.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Connectivity or auth failure talking to the backing store.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
// Every call is one unbuffered round trip: no cache, no coalescing, no change
// notifications. Callers re-list after mutating to observe new state.
//

#[async_trait]
pub trait ContentStore<C: Collection>: Send + Sync {
    /// All matching records in canonical display order.
    async fn list(&self, query: ListQuery<C>) -> Result<Vec<C::Record>, ContentStoreError>;

    /// Cardinality without materializing rows.
    async fn count(&self, filter: Option<C::Filter>) -> Result<u64, ContentStoreError>;

    /// The store assigns identifier and creation timestamp.
    async fn insert(&self, draft: C::Draft) -> Result<C::Record, ContentStoreError>;

    /// Merges only the provided fields.
    async fn update(&self, id: Uuid, patch: C::Patch) -> Result<(), ContentStoreError>;

    /// Idempotent: deleting an absent id is a success.
    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError>;
}
