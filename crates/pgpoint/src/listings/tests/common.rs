use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::listings::domain::{
    Address, Amenity, Floor, Lead, PricingConfig, Property, PropertyId, PropertyRecord,
};
use crate::listings::leads::{LeadIntakeService, LeadSubmission};
use crate::listings::search::PropertyFilter;
use crate::listings::service::ListingService;
use crate::listings::store::{LeadRepository, PropertyStore, StoreError};

pub(super) const UUID_ID: &str = "3f2b8c1e-9d4a-4e6b-8f00-1a2b3c4d5e6f";

pub(super) fn address(line1: &str, line2: &str, city: &str) -> Address {
    Address {
        address_line1: line1.to_string(),
        address_line2: line2.to_string(),
        city: city.to_string(),
        zipcode: "560034".to_string(),
    }
}

pub(super) fn record(id: &str, city: &str) -> PropertyRecord {
    PropertyRecord {
        property: Property {
            id: PropertyId(id.to_string()),
            name: format!("{id} residency"),
            slug: Some(format!("{id}-residency")),
            is_public_listed: true,
            public_description: None,
            cover_image: None,
            images: Vec::new(),
            min_rent: None,
        },
        address: address("80 Feet Road", "Koramangala 4th Block", city),
        amenity: None,
        room_types: Vec::new(),
        floors: Vec::new(),
        pricing: None,
    }
}

pub(super) fn with_rent(mut record: PropertyRecord, rent: Option<u32>) -> PropertyRecord {
    record.property.min_rent = rent;
    record
}

pub(super) fn with_amenity(mut record: PropertyRecord, internet: bool, food: bool, ac: bool) -> PropertyRecord {
    record.amenity = Some(Amenity {
        internet,
        food,
        air_conditioned: ac,
    });
    record
}

pub(super) fn with_floors(mut record: PropertyRecord, genders: &[&str]) -> PropertyRecord {
    record.floors = genders
        .iter()
        .map(|gender| Floor {
            gender_allowed: gender.to_string(),
        })
        .collect();
    record
}

pub(super) fn with_pricing(mut record: PropertyRecord, rules: Value) -> PropertyRecord {
    record.pricing = Some(PricingConfig {
        pricing_rules: rules,
    });
    record
}

pub(super) fn submission(name: &str, phone: &str, property_id: &str) -> LeadSubmission {
    LeadSubmission {
        name: name.to_string(),
        phone: phone.to_string(),
        property_id: property_id.to_string(),
    }
}

pub(super) fn sample_catalog() -> Vec<PropertyRecord> {
    vec![
        with_floors(
            with_amenity(with_rent(record("pg-1", "Bengaluru"), Some(7000)), true, true, false),
            &["Girls"],
        ),
        with_floors(
            with_amenity(with_rent(record("pg-2", "Pune"), Some(12000)), true, false, true),
            &["Boys"],
        ),
        with_pricing(
            record(UUID_ID, "Bengaluru"),
            serde_json::json!({ "rt1": { "2": 8000, "3": 6000 } }),
        ),
    ]
}

pub(super) fn build_listing_service(
    records: Vec<PropertyRecord>,
) -> (ListingService<MemoryPropertyStore>, Arc<MemoryPropertyStore>) {
    let store = Arc::new(MemoryPropertyStore::new(records));
    (ListingService::new(store.clone()), store)
}

pub(super) fn build_lead_service() -> (LeadIntakeService<MemoryLeads>, Arc<MemoryLeads>) {
    let repository = Arc::new(MemoryLeads::default());
    (LeadIntakeService::new(repository.clone()), repository)
}

pub(super) struct MemoryPropertyStore {
    records: Vec<PropertyRecord>,
    pub(super) id_lookups: Mutex<Vec<String>>,
}

impl MemoryPropertyStore {
    pub(super) fn new(records: Vec<PropertyRecord>) -> Self {
        Self {
            records,
            id_lookups: Mutex::new(Vec::new()),
        }
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn search(&self, filter: &PropertyFilter) -> Result<Vec<PropertyRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<PropertyRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .find(|record| record.property.slug.as_deref() == Some(slug))
            .cloned())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<PropertyRecord>, StoreError> {
        self.id_lookups
            .lock()
            .expect("lookup mutex poisoned")
            .push(id.to_string());
        Ok(self
            .records
            .iter()
            .find(|record| record.property.id.0 == id)
            .cloned())
    }
}

pub(super) struct UnavailableStore;

impl PropertyStore for UnavailableStore {
    fn search(&self, _filter: &PropertyFilter) -> Result<Vec<PropertyRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn find_by_slug(&self, _slug: &str) -> Result<Option<PropertyRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn find_by_id(&self, _id: &str) -> Result<Option<PropertyRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryLeads {
    leads: Arc<Mutex<Vec<Lead>>>,
}

impl MemoryLeads {
    pub(super) fn leads(&self) -> Vec<Lead> {
        self.leads.lock().expect("lead mutex poisoned").clone()
    }
}

impl LeadRepository for MemoryLeads {
    fn insert(&self, lead: Lead) -> Result<Lead, StoreError> {
        self.leads
            .lock()
            .expect("lead mutex poisoned")
            .push(lead.clone());
        Ok(lead)
    }
}

pub(super) struct UnavailableLeads;

impl LeadRepository for UnavailableLeads {
    fn insert(&self, _lead: Lead) -> Result<Lead, StoreError> {
        Err(StoreError::Unavailable(
            "connection refused: 10.0.0.12:5432".to_string(),
        ))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
