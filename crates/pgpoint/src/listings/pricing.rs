use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::domain::PricingConfig;

/// Known layouts of `pricing_rules`.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingRules {
    /// `{ room_type_id: { occupancy: price } }`
    PerRoomOccupancy(BTreeMap<String, BTreeMap<String, Value>>),
    /// `[{ rent: price, .. }, ..]`
    RentEntryList(Vec<RentEntry>),
    Unrecognized,
}

/// Element of the list layout. Other keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RentEntry {
    #[serde(default)]
    pub rent: Option<Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PricingShape {
    PerRoomOccupancy(BTreeMap<String, BTreeMap<String, Value>>),
    RentEntryList(Vec<RentEntry>),
}

/// Reasons a minimum rent could not be derived from pricing data.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PricingShapeError {
    #[error("no pricing rules configured")]
    Missing,
    #[error("pricing rules match neither the per-room nor the rent-list layout")]
    UnrecognizedShape,
    #[error("pricing rules contain no numeric rent figures")]
    NoRentFigures,
    #[error("rent figure {0} is not a whole amount between 0 and {max}", max = u32::MAX)]
    OutOfRangeFigure(f64),
}

impl PricingRules {
    pub fn classify(value: &Value) -> Self {
        match PricingShape::deserialize(value) {
            Ok(PricingShape::PerRoomOccupancy(rooms)) => Self::PerRoomOccupancy(rooms),
            Ok(PricingShape::RentEntryList(entries)) => Self::RentEntryList(entries),
            Err(_) => Self::Unrecognized,
        }
    }

    /// Smallest numeric rent reachable in the rules.
    ///
    /// Non-numeric leaves are skipped. A numeric leaf that is negative, fractional, or beyond
    /// `u32` fails the whole derivation.
    pub fn min_rent(&self) -> Result<u32, PricingShapeError> {
        let leaves: Vec<&Value> = match self {
            PricingRules::PerRoomOccupancy(rooms) => rooms
                .values()
                .flat_map(|occupancy| occupancy.values())
                .collect(),
            PricingRules::RentEntryList(entries) => entries
                .iter()
                .filter_map(|entry| entry.rent.as_ref())
                .collect(),
            PricingRules::Unrecognized => return Err(PricingShapeError::UnrecognizedShape),
        };

        let mut lowest: Option<u32> = None;
        for leaf in leaves {
            if let Some(figure) = rent_figure(leaf)? {
                lowest = Some(lowest.map_or(figure, |current| current.min(figure)));
            }
        }

        lowest.ok_or(PricingShapeError::NoRentFigures)
    }
}

/// Derive the minimum rent from a property's pricing configuration.
pub fn derive_min_rent(config: Option<&PricingConfig>) -> Result<u32, PricingShapeError> {
    let rules = match config {
        Some(config) if !config.pricing_rules.is_null() => &config.pricing_rules,
        _ => return Err(PricingShapeError::Missing),
    };

    PricingRules::classify(rules).min_rent()
}

fn rent_figure(value: &Value) -> Result<Option<u32>, PricingShapeError> {
    if !value.is_number() {
        return Ok(None);
    }

    if let Some(whole) = value.as_u64() {
        return u32::try_from(whole)
            .map(Some)
            .map_err(|_| PricingShapeError::OutOfRangeFigure(whole as f64));
    }

    let amount = value.as_f64().unwrap_or(f64::NAN);
    if amount.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&amount) {
        Ok(Some(amount as u32))
    } else {
        Err(PricingShapeError::OutOfRangeFigure(amount))
    }
}
