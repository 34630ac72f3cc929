//! Paying-guest listing search, display projection, and lead capture.
//!
//! Search requests become a `PropertyFilter`, the store returns matching records, and each
//! record is projected into a `ListingSummary`. Lead intake is an independent write path.

pub mod catalog;
pub mod detail;
pub mod domain;
pub mod leads;
pub mod pricing;
pub mod projection;
pub mod router;
pub mod search;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CatalogLoader};
pub use detail::{ListingDetail, PageMeta};
pub use domain::{
    Address, Amenity, Floor, Lead, LeadId, LeadSource, LeadStatus, PricingConfig, Property,
    PropertyId, PropertyRecord, RoomType,
};
pub use leads::{
    LeadIntakeError, LeadIntakeService, LeadOutcome, LeadOutcomeKind, LeadSubmission,
    ValidationError,
};
pub use pricing::{derive_min_rent, PricingRules, PricingShapeError};
pub use projection::{AmenitySummary, ListingSummary};
pub use router::{lead_router, listing_router};
pub use search::{AmenityTag, PropertyFilter, SearchParams};
pub use service::{ListingService, ListingServiceError, SearchResults};
pub use store::{LeadRepository, PropertyStore, StoreError};
