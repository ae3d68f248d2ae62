use async_trait::async_trait;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::ports::incoming::use_cases::{
    UpdateEntryError, UpdateEntryUseCase,
};
use crate::modules::content::application::ports::outgoing::content_store::{
    ContentStore, ContentStoreError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdateEntryService<C, S>
where
    C: Collection,
    S: ContentStore<C>,
{
    store: S,
    collection: PhantomData<C>,
}

impl<C, S> UpdateEntryService<C, S>
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
impl<C, S> UpdateEntryUseCase<C> for UpdateEntryService<C, S>
where
    C: Collection,
    S: ContentStore<C>,
{
    async fn execute(&self, id: Uuid, patch: C::Patch) -> Result<(), UpdateEntryError> {
        let patch =
            C::sanitize_patch(patch).map_err(|e| UpdateEntryError::Validation(e.to_string()))?;

        self.store.update(id, patch).await.map_err(|e| match e {
            ContentStoreError::NotFound => UpdateEntryError::NotFound,
            ContentStoreError::Validation(msg) => UpdateEntryError::Validation(msg),
            ContentStoreError::Unavailable(msg) => UpdateEntryError::StoreError(msg),
        })
    }
}
