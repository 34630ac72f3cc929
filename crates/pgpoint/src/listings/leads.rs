use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::domain::{Lead, LeadId, LeadSource, LeadStatus, PropertyId};
use super::store::{LeadRepository, StoreError};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const LEAD_ACCEPTED_MESSAGE: &str = "Interest registered successfully!";
pub const LEAD_FAILED_MESSAGE: &str = "Failed to submit. Please try again.";

/// Contact request as captured by the listing page form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub property_id: String,
}

/// A required lead field was empty or absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required fields")]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

impl LeadSubmission {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("property_id", &self.property_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

/// Result handed back to the form; never carries store error details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip)]
    pub kind: LeadOutcomeKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeadOutcomeKind {
    #[default]
    Accepted,
    Invalid,
    Failed,
}

impl LeadOutcome {
    fn accepted() -> Self {
        Self {
            success: true,
            message: LEAD_ACCEPTED_MESSAGE.to_string(),
            kind: LeadOutcomeKind::Accepted,
        }
    }

    fn rejected(kind: LeadOutcomeKind, message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            kind,
        }
    }
}

/// Validates contact requests and records them for the property owner.
pub struct LeadIntakeService<L> {
    repository: Arc<L>,
}

impl<L> LeadIntakeService<L>
where
    L: LeadRepository + 'static,
{
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Persist a new lead. Repeated identical submissions create distinct leads.
    pub fn submit(&self, submission: LeadSubmission) -> Result<Lead, LeadIntakeError> {
        submission.validate()?;

        let now = Utc::now();
        let lead = Lead {
            id: LeadId::generate(),
            name: submission.name,
            phone: submission.phone,
            property_id: PropertyId(submission.property_id),
            status: LeadStatus::New,
            source: LeadSource::Website,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(lead)?;
        Ok(stored)
    }

    /// Submit and fold the result into the user-facing outcome.
    pub fn register_interest(&self, submission: LeadSubmission) -> LeadOutcome {
        match self.submit(submission) {
            Ok(lead) => {
                info!(lead_id = %lead.id.0, property_id = %lead.property_id.0, "lead registered");
                LeadOutcome::accepted()
            }
            Err(LeadIntakeError::Validation(err)) => {
                info!(missing = ?err.missing, "lead rejected");
                LeadOutcome::rejected(LeadOutcomeKind::Invalid, MISSING_FIELDS_MESSAGE)
            }
            Err(LeadIntakeError::Store(err)) => {
                error!(error = %err, "failed to store lead");
                LeadOutcome::rejected(LeadOutcomeKind::Failed, LEAD_FAILED_MESSAGE)
            }
        }
    }
}

/// Error raised by lead intake.
#[derive(Debug, thiserror::Error)]
pub enum LeadIntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
