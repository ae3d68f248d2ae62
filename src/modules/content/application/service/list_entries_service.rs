use async_trait::async_trait;
use std::marker::PhantomData;

use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::ports::incoming::use_cases::{
    ListEntriesError, ListEntriesUseCase,
};
use crate::modules::content::application::ports::outgoing::content_store::{
    ContentStore, ListQuery,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ListEntriesService<C, S>
where
    C: Collection,
    S: ContentStore<C>,
{
    store: S,
    collection: PhantomData<C>,
}

impl<C, S> ListEntriesService<C, S>
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
impl<C, S> ListEntriesUseCase<C> for ListEntriesService<C, S>
where
    C: Collection,
    S: ContentStore<C>,
{
    async fn execute(&self, query: ListQuery<C>) -> Result<Vec<C::Record>, ListEntriesError> {
        self.store
            .list(query)
            .await
            .map_err(|e| ListEntriesError::QueryFailed(e.to_string()))
    }
}
