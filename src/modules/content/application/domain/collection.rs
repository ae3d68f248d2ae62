use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::modules::content::application::domain::validation::ValidationError;

//
// ──────────────────────────────────────────────────────────
// Collection descriptor
// ──────────────────────────────────────────────────────────
// One schema declaration per content collection; all CRUD machinery (use
// cases, services, the store adapter, the admin routes) is generic over this
// trait, so adding a collection means adding a declaration, not a module.
//

pub trait Collection: Sized + Send + Sync + 'static {
    /// Collection name as the store knows it (table name).
    const NAME: &'static str;

    /// A full stored record, identifier and timestamps included.
    type Record: Clone + Serialize + Send + Sync + 'static;

    /// Fields accepted at insert time; the store assigns id and timestamps.
    type Draft: DeserializeOwned + Send + 'static;

    /// Partial update; unset fields keep their stored values.
    type Patch: DeserializeOwned + Send + 'static;

    /// Supported equality filter for list/count.
    type Filter: Clone + Send + Sync + 'static;

    /// Validate and normalize a draft before it reaches the store.
    fn sanitize_draft(draft: Self::Draft) -> Result<Self::Draft, ValidationError>;

    /// Validate and normalize a patch before it reaches the store.
    fn sanitize_patch(patch: Self::Patch) -> Result<Self::Patch, ValidationError>;
}
