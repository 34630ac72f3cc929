use crate::infra::InMemoryPropertyStore;
use clap::Args;
use pgpoint::config::AppConfig;
use pgpoint::error::AppError;
use pgpoint::listings::search::{parse_amenity_list, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};
use pgpoint::listings::{ListingDetail, ListingService, SearchParams, SearchResults};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// City, locality, or street fragment to match
    #[arg(long, default_value = "")]
    pub(crate) city: String,
    /// Lowest acceptable starting rent
    #[arg(long, default_value_t = DEFAULT_PRICE_MIN)]
    pub(crate) price_min: u32,
    /// Highest acceptable starting rent
    #[arg(long, default_value_t = DEFAULT_PRICE_MAX)]
    pub(crate) price_max: u32,
    /// Gender category (Boys, Girls, Co-ed)
    #[arg(long)]
    pub(crate) gender: Option<String>,
    /// Comma separated amenity tags: wifi, food, ac, power
    #[arg(long)]
    pub(crate) amenities: Option<String>,
    /// Property catalog to search (defaults to APP_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ListingArgs {
    /// Listing slug, or identifier for listings without one
    pub(crate) slug: String,
    /// Property catalog to read (defaults to APP_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

impl SearchArgs {
    fn params(&self) -> SearchParams {
        SearchParams {
            city: self.city.clone(),
            price_min: self.price_min,
            price_max: self.price_max,
            gender: self
                .gender
                .clone()
                .filter(|gender| !gender.is_empty()),
            amenities: self
                .amenities
                .as_deref()
                .map(parse_amenity_list)
                .unwrap_or_default(),
        }
    }
}

fn listing_service(
    catalog: Option<PathBuf>,
    config: &AppConfig,
) -> Result<ListingService<InMemoryPropertyStore>, AppError> {
    let catalog = catalog.or_else(|| config.storage.catalog_path.clone());
    let store = InMemoryPropertyStore::from_catalog(catalog.as_deref())?;
    Ok(ListingService::new(Arc::new(store)))
}

pub(crate) fn run_search(args: SearchArgs, config: &AppConfig) -> Result<(), AppError> {
    let params = args.params();
    let service = listing_service(args.catalog, config)?;
    let results = service.search(&params)?;
    render_search(&results);
    Ok(())
}

pub(crate) fn run_listing(args: ListingArgs, config: &AppConfig) -> Result<(), AppError> {
    let service = listing_service(args.catalog, config)?;
    let detail = service.detail(&args.slug)?;
    render_listing(&detail);
    Ok(())
}

pub(crate) fn render_search(results: &SearchResults) {
    if results.city.is_empty() {
        println!("All PG listings");
    } else {
        println!("PGs in \"{}\"", results.city);
    }
    println!("{} results found", results.total);

    if results.results.is_empty() {
        println!("\nNo PGs found in this location.");
        return;
    }

    for summary in &results.results {
        let rent = if summary.min_rent > 0 {
            format!("from {} / month", summary.min_rent)
        } else {
            "contact for price".to_string()
        };

        let mut amenities = Vec::new();
        if summary.amenities.wifi {
            amenities.push("WiFi");
        }
        if summary.amenities.food {
            amenities.push("Food");
        }

        println!(
            "\n- {} [{}] ({})\n  {}\n  {} | /pg/{}",
            summary.name,
            summary.gender_type,
            rent,
            summary.address,
            if amenities.is_empty() {
                "no listed amenities".to_string()
            } else {
                amenities.join(", ")
            },
            summary.slug
        );
    }
}

pub(crate) fn render_listing(detail: &ListingDetail) {
    println!("{}", detail.meta.title);
    println!("{}", detail.name);

    let address = &detail.address;
    if address.line2.is_empty() {
        println!("{}, {}, {}", address.line1, address.city, address.zipcode);
    } else {
        println!(
            "{}, {}, {}, {}",
            address.line1, address.line2, address.city, address.zipcode
        );
    }

    if detail.min_rent > 0 {
        println!("Starting from {} / month | {}", detail.min_rent, detail.gender_type);
    } else {
        println!("Contact for price | {}", detail.gender_type);
    }

    println!("\nAbout the property\n{}", detail.description);

    println!("\nAmenities");
    let flags = [
        (detail.amenities.wifi, "Free WiFi"),
        (detail.amenities.food, "Food Included"),
        (detail.amenities.ac, "Air Conditioning"),
    ];
    for (_, label) in flags.iter().filter(|(present, _)| *present) {
        println!("- {}", label);
    }

    if !detail.room_types.is_empty() {
        println!("\nRoom types");
        for room in &detail.room_types {
            let ac = if room.ac { "AC" } else { "Non-AC" };
            if room.amenities.is_empty() {
                println!("- {} ({})", room.name, ac);
            } else {
                println!("- {} ({}): {}", room.name, ac, room.amenities.join(", "));
            }
        }
    }

    if !detail.images.is_empty() {
        println!("\nGallery: {} photos", detail.images.len());
    }
}
