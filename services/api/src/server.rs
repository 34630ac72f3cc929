use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryPropertyStore, LeadSink};
use crate::routes::with_listing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pgpoint::config::AppConfig;
use pgpoint::error::AppError;
use pgpoint::listings::{LeadIntakeService, ListingService};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(catalog) = args.catalog.take() {
        config.storage.catalog_path = Some(catalog);
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = InMemoryPropertyStore::from_catalog(config.storage.catalog_path.as_deref())?;
    let leads = LeadSink::from_config(&config.storage)?;
    let listing_service = Arc::new(ListingService::new(Arc::new(store)));
    let lead_service = Arc::new(LeadIntakeService::new(Arc::new(leads)));

    let app = with_listing_routes(listing_service, lead_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "pgpoint listing service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
