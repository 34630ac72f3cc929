use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::detail::{key_may_be_id, ListingDetail};
use super::projection::ListingSummary;
use super::search::SearchParams;
use super::store::{PropertyStore, StoreError};

/// Search results ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub city: String,
    pub total: usize,
    pub results: Vec<ListingSummary>,
}

/// Read-side service composing the filter builder, store, and projector.
pub struct ListingService<S> {
    store: Arc<S>,
}

impl<S> ListingService<S>
where
    S: PropertyStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Run a filtered search and project every match, in store order.
    pub fn search(&self, params: &SearchParams) -> Result<SearchResults, ListingServiceError> {
        let filter = params.filter();
        let records = self.store.search(&filter)?;
        debug!(city = %params.city, matches = records.len(), "listing search completed");

        let results: Vec<ListingSummary> =
            records.iter().map(ListingSummary::from_record).collect();

        Ok(SearchResults {
            city: params.city.clone(),
            total: results.len(),
            results,
        })
    }

    /// Look up a single listing by slug, or by identifier when the key is UUID-shaped.
    pub fn detail(&self, key: &str) -> Result<ListingDetail, ListingServiceError> {
        let mut record = self.store.find_by_slug(key)?;
        if record.is_none() && key_may_be_id(key) {
            record = self.store.find_by_id(key)?;
        }

        record
            .as_ref()
            .map(ListingDetail::from_record)
            .ok_or_else(|| ListingServiceError::NotFound(key.to_string()))
    }
}

/// Error raised by the listing service.
#[derive(Debug, thiserror::Error)]
pub enum ListingServiceError {
    #[error("listing '{0}' not found")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
