use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use tracing::{error, warn};

use crate::error::AppError;

use super::detail::ListingDetail;
use super::leads::{LeadIntakeService, LeadOutcomeKind, LeadSubmission};
use super::search::SearchParams;
use super::service::{ListingService, ListingServiceError, SearchResults};
use super::store::{LeadRepository, PropertyStore};

/// Router exposing listing search and detail endpoints.
pub fn listing_router<S>(service: Arc<ListingService<S>>) -> Router
where
    S: PropertyStore + 'static,
{
    Router::new()
        .route("/api/v1/search", get(search_handler::<S>))
        .route("/api/v1/pg/:slug", get(detail_handler::<S>))
        .with_state(service)
}

/// Router exposing the lead capture form endpoint.
pub fn lead_router<L>(service: Arc<LeadIntakeService<L>>) -> Router
where
    L: LeadRepository + 'static,
{
    Router::new()
        .route("/api/v1/leads/:property_id", post(lead_handler::<L>))
        .with_state(service)
}

/// Form fields posted by the listing page; the property comes from the path.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LeadForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    phone: String,
}

pub(crate) async fn search_handler<S>(
    State(service): State<Arc<ListingService<S>>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResults>, AppError>
where
    S: PropertyStore + 'static,
{
    let results = service.search(&params).inspect_err(|err| {
        error!(error = %err, "listing search failed");
    })?;
    Ok(Json(results))
}

pub(crate) async fn detail_handler<S>(
    State(service): State<Arc<ListingService<S>>>,
    Path(slug): Path<String>,
) -> Result<Json<ListingDetail>, AppError>
where
    S: PropertyStore + 'static,
{
    let detail = service.detail(&slug).inspect_err(|err| {
        if let ListingServiceError::Store(_) = err {
            error!(error = %err, %slug, "listing lookup failed");
        }
    })?;
    Ok(Json(detail))
}

pub(crate) async fn lead_handler<L>(
    State(service): State<Arc<LeadIntakeService<L>>>,
    Path(property_id): Path<String>,
    form: Result<Form<LeadForm>, FormRejection>,
) -> Response
where
    L: LeadRepository + 'static,
{
    // Unreadable bodies are validated as an empty form.
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(error = %rejection, %property_id, "lead form could not be read");
            LeadForm::default()
        }
    };

    let submission = LeadSubmission {
        name: form.name,
        phone: form.phone,
        property_id,
    };

    let outcome = service.register_interest(submission);
    let status = match outcome.kind {
        LeadOutcomeKind::Accepted => StatusCode::CREATED,
        LeadOutcomeKind::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
        LeadOutcomeKind::Failed => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(outcome)).into_response()
}
