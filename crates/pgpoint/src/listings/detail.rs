use serde::Serialize;

use super::domain::{PropertyId, PropertyRecord, RoomType};
use super::projection::{resolve_gender_type, resolve_image, resolve_min_rent};

/// Length of a hyphenated UUID; only keys of this length are tried as identifiers.
const UUID_KEY_LEN: usize = 36;

const DESCRIPTION_FALLBACK: &str = "No description provided by owner.";
const SITE_NAME: &str = "PGPoint";
const FALLBACK_REGION: &str = "India";

/// Whether a detail lookup key may also be an identifier rather than a slug.
pub fn key_may_be_id(key: &str) -> bool {
    key.len() == UUID_KEY_LEN
}

/// Everything the detail page renders for one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingDetail {
    pub id: PropertyId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub address: FullAddress,
    pub min_rent: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub amenities: DetailAmenities,
    pub gender_type: String,
    pub room_types: Vec<RoomTypeView>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullAddress {
    pub line1: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub line2: String,
    pub city: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailAmenities {
    pub wifi: bool,
    pub food: bool,
    pub ac: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomTypeView {
    pub name: String,
    pub ac: bool,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
}

/// Title and description for search engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl ListingDetail {
    pub fn from_record(record: &PropertyRecord) -> Self {
        let property = &record.property;
        let address = &record.address;
        let amenity = record.amenity.unwrap_or_default();

        let description = property
            .public_description
            .as_deref()
            .filter(|text| !text.trim().is_empty());

        Self {
            id: property.id.clone(),
            name: property.name.clone(),
            slug: property.public_slug().to_string(),
            description: description.unwrap_or(DESCRIPTION_FALLBACK).to_string(),
            address: FullAddress {
                line1: address.address_line1.clone(),
                line2: address.address_line2.clone(),
                city: address.city.clone(),
                zipcode: address.zipcode.clone(),
            },
            min_rent: resolve_min_rent(record),
            image_url: resolve_image(property),
            images: property.images.clone(),
            amenities: DetailAmenities {
                wifi: amenity.internet,
                food: amenity.food,
                ac: amenity.air_conditioned,
            },
            gender_type: resolve_gender_type(&record.floors),
            room_types: record.room_types.iter().map(RoomTypeView::from).collect(),
            meta: PageMeta::for_record(record, description),
        }
    }
}

impl From<&RoomType> for RoomTypeView {
    fn from(room: &RoomType) -> Self {
        Self {
            name: room.name.clone(),
            ac: room.air_conditioned,
            images: room.images.clone(),
            amenities: room.amenities.clone(),
        }
    }
}

impl PageMeta {
    fn for_record(record: &PropertyRecord, description: Option<&str>) -> Self {
        let name = &record.property.name;
        let city = record.address.city.trim();
        let region = if city.is_empty() { FALLBACK_REGION } else { city };

        Self {
            title: format!("{name} - PG in {region} | {SITE_NAME}"),
            description: match description {
                Some(text) => text.to_string(),
                None => format!(
                    "Affordable PG accommodation in {city}. Book your stay at {name} today."
                ),
            },
        }
    }
}
