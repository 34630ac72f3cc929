use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Deserializer};

use super::domain::{Address, Amenity, Floor, PropertyRecord};

pub const DEFAULT_PRICE_MIN: u32 = 0;
pub const DEFAULT_PRICE_MAX: u32 = 100_000;

/// Amenity tags accepted by the search filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AmenityTag {
    Wifi,
    Food,
    Ac,
    /// No backing flag on `Amenity`; filtering on it admits every property.
    Power,
}

impl AmenityTag {
    pub fn from_tag(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "wifi" => Some(Self::Wifi),
            "food" => Some(Self::Food),
            "ac" => Some(Self::Ac),
            "power" => Some(Self::Power),
            _ => None,
        }
    }

    fn is_satisfied_by(self, amenity: Option<&Amenity>) -> bool {
        match self {
            AmenityTag::Power => true,
            AmenityTag::Wifi => amenity.is_some_and(|flags| flags.internet),
            AmenityTag::Food => amenity.is_some_and(|flags| flags.food),
            AmenityTag::Ac => amenity.is_some_and(|flags| flags.air_conditioned),
        }
    }
}

/// Search request as received from the filter widgets, passed by value to the filter builder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub city: String,
    #[serde(default, deserialize_with = "price_min_or_default")]
    pub price_min: u32,
    #[serde(default = "default_price_max", deserialize_with = "price_max_or_default")]
    pub price_max: u32,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "comma_separated_amenities")]
    pub amenities: BTreeSet<AmenityTag>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            city: String::new(),
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
            gender: None,
            amenities: BTreeSet::new(),
        }
    }
}

impl SearchParams {
    pub fn for_city(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            ..Self::default()
        }
    }

    pub fn filter(&self) -> PropertyFilter {
        PropertyFilter::from_params(self)
    }
}

/// Predicate over property records built from `SearchParams`.
///
/// Store implementations may translate the accessors into native queries; `matches` is the
/// reference semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFilter {
    city_needle: String,
    rent_window: RangeInclusive<u32>,
    gender: Option<String>,
    required_amenities: BTreeSet<AmenityTag>,
}

impl PropertyFilter {
    pub fn from_params(params: &SearchParams) -> Self {
        Self {
            city_needle: params.city.to_lowercase(),
            rent_window: params.price_min..=params.price_max,
            gender: params
                .gender
                .as_deref()
                .filter(|gender| !gender.is_empty())
                .map(str::to_lowercase),
            required_amenities: params.amenities.clone(),
        }
    }

    /// Lowercased substring matched against city and both address lines.
    pub fn city_needle(&self) -> &str {
        &self.city_needle
    }

    pub fn rent_window(&self) -> &RangeInclusive<u32> {
        &self.rent_window
    }

    /// Lowercased gender category, when one was requested.
    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn required_amenities(&self) -> &BTreeSet<AmenityTag> {
        &self.required_amenities
    }

    pub fn matches(&self, record: &PropertyRecord) -> bool {
        record.property.is_public_listed
            && self.matches_location(&record.address)
            && self.admits_rent(record.property.min_rent)
            && self.matches_gender(&record.floors)
            && self.matches_amenities(record.amenity.as_ref())
    }

    fn matches_location(&self, address: &Address) -> bool {
        if self.city_needle.is_empty() {
            return true;
        }

        [
            &address.city,
            &address.address_line1,
            &address.address_line2,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.city_needle))
    }

    // Properties without a precomputed rent stay visible whatever the bounds.
    fn admits_rent(&self, min_rent: Option<u32>) -> bool {
        match min_rent {
            Some(rent) => self.rent_window.contains(&rent),
            None => true,
        }
    }

    fn matches_gender(&self, floors: &[Floor]) -> bool {
        match &self.gender {
            Some(gender) => floors
                .iter()
                .any(|floor| floor.gender_allowed.to_lowercase() == *gender),
            None => true,
        }
    }

    fn matches_amenities(&self, amenity: Option<&Amenity>) -> bool {
        self.required_amenities
            .iter()
            .all(|tag| tag.is_satisfied_by(amenity))
    }
}

fn default_price_max() -> u32 {
    DEFAULT_PRICE_MAX
}

fn parse_price(raw: Option<String>, fallback: u32) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(fallback)
}

fn price_min_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(parse_price(raw, DEFAULT_PRICE_MIN))
}

fn price_max_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(parse_price(raw, DEFAULT_PRICE_MAX))
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.is_empty()))
}

fn comma_separated_amenities<'de, D>(deserializer: D) -> Result<BTreeSet<AmenityTag>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(parse_amenity_list)
        .unwrap_or_default())
}

/// Parse a comma separated tag list, skipping unknown tags.
pub fn parse_amenity_list(raw: &str) -> BTreeSet<AmenityTag> {
    raw.split(',').filter_map(AmenityTag::from_tag).collect()
}
