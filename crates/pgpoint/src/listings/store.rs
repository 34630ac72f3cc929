use super::domain::{Lead, PropertyRecord};
use super::search::PropertyFilter;

/// Read access to the property catalog so the services can be exercised in isolation.
pub trait PropertyStore: Send + Sync {
    /// Records matching `filter`, in store order.
    fn search(&self, filter: &PropertyFilter) -> Result<Vec<PropertyRecord>, StoreError>;
    fn find_by_slug(&self, slug: &str) -> Result<Option<PropertyRecord>, StoreError>;
    fn find_by_id(&self, id: &str) -> Result<Option<PropertyRecord>, StoreError>;
}

/// Write-once sink for captured leads.
pub trait LeadRepository: Send + Sync {
    fn insert(&self, lead: Lead) -> Result<Lead, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
