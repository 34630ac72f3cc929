use super::common::*;
use serde_json::json;

use crate::listings::projection::{ListingSummary, DEFAULT_GENDER_TYPE};

#[test]
fn precomputed_rent_wins_over_pricing_rules() {
    let record = with_pricing(
        with_rent(record("pg-1", "Pune"), Some(9500)),
        json!({ "rt1": { "2": 6000 } }),
    );
    assert_eq!(ListingSummary::from_record(&record).min_rent, 9500);
}

#[test]
fn zero_or_missing_rent_falls_back_to_pricing_rules() {
    let occupancy = with_pricing(
        with_rent(record("pg-1", "Pune"), Some(0)),
        json!({ "rt1": { "2": 8000, "3": 6000 } }),
    );
    assert_eq!(ListingSummary::from_record(&occupancy).min_rent, 6000);

    let entries = with_pricing(
        record("pg-2", "Pune"),
        json!([{ "rent": 9000 }, { "rent": 7000 }]),
    );
    assert_eq!(ListingSummary::from_record(&entries).min_rent, 7000);
}

#[test]
fn no_price_data_projects_zero() {
    let bare = record("pg-1", "Pune");
    assert_eq!(ListingSummary::from_record(&bare).min_rent, 0);

    let null_rules = with_pricing(record("pg-2", "Pune"), serde_json::Value::Null);
    assert_eq!(ListingSummary::from_record(&null_rules).min_rent, 0);

    let garbage = with_pricing(record("pg-3", "Pune"), json!("ask the warden"));
    assert_eq!(ListingSummary::from_record(&garbage).min_rent, 0);
}

#[test]
fn out_of_range_rent_figures_project_zero() {
    let negative = with_pricing(record("pg-1", "Pune"), json!({ "rt1": { "1": 5000, "2": -10 } }));
    assert_eq!(ListingSummary::from_record(&negative).min_rent, 0);

    let fractional = with_pricing(record("pg-2", "Pune"), json!([{ "rent": 6999.6 }]));
    assert_eq!(ListingSummary::from_record(&fractional).min_rent, 0);
}

#[test]
fn image_prefers_cover_then_gallery() {
    let mut listing = record("pg-1", "Pune");
    assert_eq!(ListingSummary::from_record(&listing).image_url, None);

    listing.property.images = vec!["/img/room-1.jpg".to_string(), "/img/room-2.jpg".to_string()];
    assert_eq!(
        ListingSummary::from_record(&listing).image_url.as_deref(),
        Some("/img/room-1.jpg")
    );

    listing.property.cover_image = Some("/img/cover.jpg".to_string());
    assert_eq!(
        ListingSummary::from_record(&listing).image_url.as_deref(),
        Some("/img/cover.jpg")
    );
}

#[test]
fn amenities_default_to_false_and_power_backup_is_never_set() {
    let bare = ListingSummary::from_record(&record("pg-1", "Pune"));
    assert!(!bare.amenities.wifi);
    assert!(!bare.amenities.food);
    assert!(!bare.amenities.power_backup);

    let equipped = ListingSummary::from_record(&with_amenity(record("pg-2", "Pune"), true, true, true));
    assert!(equipped.amenities.wifi);
    assert!(equipped.amenities.food);
    assert!(!equipped.amenities.power_backup);
}

#[test]
fn gender_type_uses_first_floor_or_coed() {
    let floors = with_floors(record("pg-1", "Pune"), &["Girls", "Boys"]);
    assert_eq!(ListingSummary::from_record(&floors).gender_type, "Girls");

    let none = record("pg-2", "Pune");
    assert_eq!(ListingSummary::from_record(&none).gender_type, DEFAULT_GENDER_TYPE);
    assert_eq!(DEFAULT_GENDER_TYPE, "Co-ed");
}

#[test]
fn slug_falls_back_to_identifier() {
    let mut listing = record("pg-1", "Pune");
    assert_eq!(ListingSummary::from_record(&listing).slug, "pg-1-residency");

    listing.property.slug = Some(String::new());
    assert_eq!(ListingSummary::from_record(&listing).slug, "pg-1");

    listing.property.slug = None;
    assert_eq!(ListingSummary::from_record(&listing).slug, "pg-1");
}

#[test]
fn address_line_joins_first_line_and_city() {
    let summary = ListingSummary::from_record(&record("pg-1", "Pune"));
    assert_eq!(summary.address, "80 Feet Road, Pune");
}

#[test]
fn projection_is_stable_across_runs() {
    let listing = with_pricing(record("pg-1", "Pune"), json!({ "a": { "1": 5000 }, "b": { "2": 4000 } }));
    assert_eq!(
        ListingSummary::from_record(&listing),
        ListingSummary::from_record(&listing)
    );
}
