use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use super::domain::ValidationIssue;
use super::ledger::LedgerError;
use super::profiles::ProfileLookupError;
use super::store::StoreError;

/// Pipeline error taxonomy. Every variant carries a stable machine-readable
/// code; membership failures name the precondition so callers can recover
/// (re-seed the lobby, re-invite) without guessing.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationIssue),
    #[error("hire request '{id}' not found")]
    HireRequestNotFound { id: String },
    #[error("business '{id}' not found")]
    BusinessNotFound { id: String },
    #[error("freelancer '{id}' not found")]
    FreelancerNotFound { id: String },
    #[error("freelancer '{freelancer_id}' is not in the lobby")]
    NotInLobby { freelancer_id: String },
    #[error("freelancer '{freelancer_id}' has not been invited")]
    NotInvited { freelancer_id: String },
    #[error("insufficient connects (required {required}, available {available})")]
    InsufficientConnects { required: u32, available: u32 },
    #[error("storage failure: {0}")]
    Store(StoreError),
    #[error("ledger failure: {0}")]
    Ledger(LedgerError),
    #[error("profile lookup failure: {0}")]
    Profiles(ProfileLookupError),
}

impl PipelineError {
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::Validation(_) => "VALIDATION_ERROR",
            PipelineError::HireRequestNotFound { .. } => "HIRE_DEHIX_TALENT_NOT_FOUND",
            PipelineError::BusinessNotFound { .. } => "BUSINESS_NOT_FOUND",
            PipelineError::FreelancerNotFound { .. } => "FREELANCER_NOT_FOUND",
            PipelineError::NotInLobby { .. } => "FREELANCER_NOT_IN_LOBBY",
            PipelineError::NotInvited { .. } => "FREELANCER_NOT_INVITED",
            PipelineError::InsufficientConnects { .. } => "INSUFFICIENT_CONNECTS",
            PipelineError::Store(StoreError::Conflict) => "CONFLICT",
            PipelineError::Store(_) | PipelineError::Ledger(_) | PipelineError::Profiles(_) => {
                "SERVER_ERROR"
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            PipelineError::Validation(_) => StatusCode::BAD_REQUEST,
            PipelineError::HireRequestNotFound { .. }
            | PipelineError::BusinessNotFound { .. }
            | PipelineError::FreelancerNotFound { .. }
            | PipelineError::NotInLobby { .. }
            | PipelineError::NotInvited { .. } => StatusCode::NOT_FOUND,
            PipelineError::InsufficientConnects { .. } => StatusCode::PAYMENT_REQUIRED,
            PipelineError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
            PipelineError::Store(_) | PipelineError::Ledger(_) | PipelineError::Profiles(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = if status.is_server_error() {
            error!(error = %self, "hire pipeline internal failure");
            json!({ "code": self.code(), "message": "internal server error" })
        } else {
            json!({ "code": self.code(), "message": self.to_string() })
        };
        (status, Json(body)).into_response()
    }
}

/// Translate ledger failures for a specific business into pipeline terms.
pub(crate) fn map_ledger_error(business_id: &str, err: LedgerError) -> PipelineError {
    match err {
        LedgerError::BusinessNotFound => PipelineError::BusinessNotFound {
            id: business_id.to_string(),
        },
        LedgerError::InsufficientConnects {
            required,
            available,
        } => PipelineError::InsufficientConnects {
            required,
            available,
        },
        other => PipelineError::Ledger(other),
    }
}
