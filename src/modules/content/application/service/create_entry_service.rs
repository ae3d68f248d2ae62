use async_trait::async_trait;
use std::marker::PhantomData;

use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::ports::incoming::use_cases::{
    CreateEntryError, CreateEntryUseCase,
};
use crate::modules::content::application::ports::outgoing::content_store::{
    ContentStore, ContentStoreError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateEntryService<C, S>
where
    C: Collection,
    S: ContentStore<C>,
{
    store: S,
    collection: PhantomData<C>,
}

impl<C, S> CreateEntryService<C, S>
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
impl<C, S> CreateEntryUseCase<C> for CreateEntryService<C, S>
where
    C: Collection,
    S: ContentStore<C>,
{
    async fn execute(&self, draft: C::Draft) -> Result<C::Record, CreateEntryError> {
        // Schema validation happens here; an invalid draft never reaches the
        // store and creates no row.
        let draft =
            C::sanitize_draft(draft).map_err(|e| CreateEntryError::Validation(e.to_string()))?;

        self.store.insert(draft).await.map_err(|e| match e {
            ContentStoreError::Validation(msg) => CreateEntryError::Validation(msg),
            ContentStoreError::Unavailable(msg) => CreateEntryError::StoreError(msg),
            ContentStoreError::NotFound => {
                CreateEntryError::StoreError("unexpected not found while inserting".to_string())
            }
        })
    }
}
