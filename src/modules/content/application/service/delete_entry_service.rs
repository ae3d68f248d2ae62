use async_trait::async_trait;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteEntryError, DeleteEntryUseCase,
};
use crate::modules::content::application::ports::outgoing::content_store::{
    ContentStore, ContentStoreError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct DeleteEntryService<C, S>
where
    C: Collection,
    S: ContentStore<C>,
{
    store: S,
    collection: PhantomData<C>,
}

impl<C, S> DeleteEntryService<C, S>
where
    C: Collection,
    S: ContentStore<C>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            collection: PhantomData,
        }
    }
}

#[async_trait]
impl<C, S> DeleteEntryUseCase<C> for DeleteEntryService<C, S>
where
    C: Collection,
    S: ContentStore<C>,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteEntryError> {
        self.store.delete(id).await.map_err(|e| match e {
            // The store already treats a missing id as success; anything else
            // surfacing here is a real failure.
            ContentStoreError::NotFound => DeleteEntryError::StoreError(
                "unexpected not found while deleting".to_string(),
            ),
            other => DeleteEntryError::StoreError(other.to_string()),
        })
    }
}
