use async_trait::async_trait;
use std::fmt;

use crate::modules::content::application::domain::collection::Collection;
use crate::modules::content::application::ports::outgoing::content_store::ListQuery;

#[derive(Debug, Clone)]
pub enum ListEntriesError {
    QueryFailed(String),
}

impl fmt::Display for ListEntriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListEntriesError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListEntriesUseCase<C: Collection>: Send + Sync {
    async fn execute(&self, query: ListQuery<C>) -> Result<Vec<C::Record>, ListEntriesError>;
}
