use serde::Serialize;
use tracing::debug;

use super::domain::{Amenity, Floor, Property, PropertyId, PropertyRecord};
use super::pricing::derive_min_rent;

/// Displayed when a property has no floors recorded.
pub const DEFAULT_GENDER_TYPE: &str = "Co-ed";

/// Flat, display-ready view of a matched property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingSummary {
    pub id: PropertyId,
    pub name: String,
    pub slug: String,
    pub address: String,
    pub min_rent: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub amenities: AmenitySummary,
    pub gender_type: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AmenitySummary {
    pub wifi: bool,
    pub food: bool,
    /// Not modeled on `Amenity`; always false.
    pub power_backup: bool,
}

impl ListingSummary {
    pub fn from_record(record: &PropertyRecord) -> Self {
        let property = &record.property;

        Self {
            id: property.id.clone(),
            name: property.name.clone(),
            slug: property.public_slug().to_string(),
            address: format!(
                "{}, {}",
                record.address.address_line1, record.address.city
            ),
            min_rent: resolve_min_rent(record),
            image_url: resolve_image(property),
            amenities: AmenitySummary::from_amenity(record.amenity.as_ref()),
            gender_type: resolve_gender_type(&record.floors),
        }
    }
}

impl AmenitySummary {
    pub fn from_amenity(amenity: Option<&Amenity>) -> Self {
        let flags = amenity.copied().unwrap_or_default();
        Self {
            wifi: flags.internet,
            food: flags.food,
            power_backup: false,
        }
    }
}

/// Precomputed rent when present and non-zero, otherwise the pricing rules, otherwise zero.
pub fn resolve_min_rent(record: &PropertyRecord) -> u32 {
    match record.property.min_rent {
        Some(rent) if rent > 0 => rent,
        _ => derive_min_rent(record.pricing.as_ref()).unwrap_or_else(|reason| {
            debug!(property_id = %record.property.id.0, %reason, "no rent derivable from pricing rules");
            0
        }),
    }
}

pub fn resolve_image(property: &Property) -> Option<String> {
    property
        .cover_image
        .as_ref()
        .filter(|cover| !cover.is_empty())
        .or_else(|| property.images.first())
        .cloned()
}

// First floor in store order; the store does not promise a stable order.
pub fn resolve_gender_type(floors: &[Floor]) -> String {
    floors
        .first()
        .map(|floor| floor.gender_allowed.clone())
        .unwrap_or_else(|| DEFAULT_GENDER_TYPE.to_string())
}
