use std::sync::Arc;

use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::ports::incoming::use_cases::{
    CreateEntryUseCase, DeleteEntryUseCase, ListEntriesUseCase, UpdateEntryUseCase,
};
use crate::modules::content::application::ports::outgoing::content_store::ContentStore;
use crate::modules::content::application::service::create_entry_service::CreateEntryService;
use crate::modules::content::application::service::delete_entry_service::DeleteEntryService;
use crate::modules::content::application::service::list_entries_service::ListEntriesService;
use crate::modules::content::application::service::update_entry_service::UpdateEntryService;

/// The CRUD bundle for one collection; generic handlers resolve it by type.
pub struct CollectionUseCases<C: Collection> {
    pub list: Arc<dyn ListEntriesUseCase<C>>,
    pub create: Arc<dyn CreateEntryUseCase<C>>,
    pub update: Arc<dyn UpdateEntryUseCase<C>>,
    pub delete: Arc<dyn DeleteEntryUseCase<C>>,
}

impl<C: Collection> Clone for CollectionUseCases<C> {
    fn clone(&self) -> Self {
        Self {
            list: Arc::clone(&self.list),
            create: Arc::clone(&self.create),
            update: Arc::clone(&self.update),
            delete: Arc::clone(&self.delete),
        }
    }
}

impl<C: Collection> CollectionUseCases<C> {
    /// Wires the full CRUD stack over one store client.
    pub fn wire<S>(store: S) -> Self
    where
        S: ContentStore<C> + Clone + 'static,
    {
        Self {
            list: Arc::new(ListEntriesService::new(store.clone())),
            create: Arc::new(CreateEntryService::new(store.clone())),
            update: Arc::new(UpdateEntryService::new(store.clone())),
            delete: Arc::new(DeleteEntryService::new(store)),
        }
    }
}
