use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier wrapper for listed properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub String);

/// Identifier wrapper for captured leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(pub Uuid);

impl LeadId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Paying-guest property as advertised on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub is_public_listed: bool,
    #[serde(default)]
    pub public_description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Precomputed "starting from" rent, maintained by owner tooling.
    #[serde(default)]
    pub min_rent: Option<u32>,
}

impl Property {
    /// Slug used in public URLs, falling back to the identifier.
    pub fn public_slug(&self) -> &str {
        match self.slug.as_deref() {
            Some(slug) if !slug.is_empty() => slug,
            _ => &self.id.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(default)]
    pub internet: bool,
    #[serde(default)]
    pub food: bool,
    #[serde(default)]
    pub air_conditioned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub air_conditioned: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Floor of a property; only its gender eligibility is consumed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub gender_allowed: String,
}

/// Owner-maintained pricing data. The JSON shape is not uniform across properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub pricing_rules: serde_json::Value,
}

/// A property together with every relation the read side needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub property: Property,
    pub address: Address,
    #[serde(default)]
    pub amenity: Option<Amenity>,
    #[serde(default)]
    pub room_types: Vec<RoomType>,
    #[serde(default)]
    pub floors: Vec<Floor>,
    #[serde(default)]
    pub pricing: Option<PricingConfig>,
}

/// Follow-up state of a lead. Intake only ever creates `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    New,
}

impl LeadStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LeadStatus::New => "NEW",
        }
    }
}

/// Channel a lead arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadSource {
    Website,
}

impl LeadSource {
    pub const fn label(self) -> &'static str {
        match self {
            LeadSource::Website => "WEBSITE",
        }
    }
}

/// Prospective tenant contact request. Written once, never updated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub phone: String,
    pub property_id: PropertyId,
    pub status: LeadStatus,
    pub source: LeadSource,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
