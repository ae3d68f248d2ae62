use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::bindings::StoreBinding;
use crate::modules::content::application::ports::outgoing::content_store::{
    ContentStore, ContentStoreError, ListQuery,
};

// ============================================================================
// Store Implementation
// ============================================================================
// One adapter for all five collections; the per-collection differences live in
// the StoreBinding declarations.

pub struct ContentStorePostgres<C: StoreBinding> {
    db: Arc<DatabaseConnection>,
    collection: PhantomData<C>,
}

impl<C: StoreBinding> ContentStorePostgres<C> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            collection: PhantomData,
        }
    }
}

impl<C: StoreBinding> Clone for ContentStorePostgres<C> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            collection: PhantomData,
        }
    }
}

#[async_trait]
impl<C> ContentStore<C> for ContentStorePostgres<C>
where
    C: StoreBinding,
    <C::Entity as EntityTrait>::Model: IntoActiveModel<C::ActiveModel>,
{
    async fn list(&self, query: ListQuery<C>) -> Result<Vec<C::Record>, ContentStoreError> {
        let mut select = C::Entity::find();

        if let Some(filter) = &query.filter {
            select = select.filter(C::filter_condition(filter));
        }

        for (column, order) in C::order_by() {
            select = select.order_by(column, order);
        }

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        let models = select.all(&*self.db).await.map_err(map_db_err)?;

        Ok(models.into_iter().map(C::record).collect())
    }

    async fn count(&self, filter: Option<C::Filter>) -> Result<u64, ContentStoreError> {
        let mut select = C::Entity::find();

        if let Some(filter) = &filter {
            select = select.filter(C::filter_condition(filter));
        }

        select.count(&*self.db).await.map_err(map_db_err)
    }

    async fn insert(&self, draft: C::Draft) -> Result<C::Record, ContentStoreError> {
        let model = C::insert_model(draft);

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(C::record(inserted))
    }

    async fn update(&self, id: Uuid, patch: C::Patch) -> Result<(), ContentStoreError> {
        let model = C::patch_model(patch);

        // An all-unset patch merges nothing; skip the round trip.
        if !model.is_changed() {
            return Ok(());
        }

        let result = C::Entity::update_many()
            .set(model)
            .filter(C::id_column().eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContentStoreError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError> {
        // Zero rows affected means the id was already gone: success, so a
        // double submit from the admin UI stays harmless.
        C::Entity::delete_many()
            .filter(C::id_column().eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ContentStoreError {
    ContentStoreError::Unavailable(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
