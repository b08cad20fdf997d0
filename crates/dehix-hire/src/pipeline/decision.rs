use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use super::domain::{next_entry_id, HireRequest, HireRequestId, SelectionEntry};
use super::error::PipelineError;
use super::store::{HireRequestStore, Precondition, StoreError};

/// Terminal-outcome payload for select and reject.
#[derive(Debug, Clone, Deserialize)]
pub struct Decision {
    #[serde(rename = "freelancerId")]
    pub freelancer_id: String,
    #[serde(rename = "dehixTalentId")]
    pub dehix_talent_id: String,
}

/// Resolves an invited freelancer to selected or rejected.
///
/// Outcomes are not mutually exclusive: selecting and later rejecting the
/// same pair records both entries, keeping the audit trail intact.
pub struct DecisionManager<S> {
    store: Arc<S>,
}

impl<S> DecisionManager<S>
where
    S: HireRequestStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Requires a prior invitation for the freelancer.
    pub fn select(
        &self,
        id: &HireRequestId,
        decision: Decision,
    ) -> Result<HireRequest, PipelineError> {
        let entry = self.entry_for(&decision);
        match self.store.append_selected_if_invited(id, entry) {
            Ok(request) => {
                info!(
                    hire_request_id = %id.0,
                    freelancer_id = %decision.freelancer_id,
                    "freelancer selected"
                );
                Ok(request)
            }
            Err(StoreError::NotFound) => Err(PipelineError::HireRequestNotFound {
                id: id.0.clone(),
            }),
            Err(StoreError::PreconditionFailed(_)) => Err(PipelineError::NotInvited {
                freelancer_id: decision.freelancer_id,
            }),
            Err(other) => Err(PipelineError::Store(other)),
        }
    }

    /// Requires the freelancer to be present in both the lobby and the
    /// invited list; rejection is only meaningful after an invitation was
    /// extended to a lobby-sourced candidate.
    pub fn reject(
        &self,
        id: &HireRequestId,
        decision: Decision,
    ) -> Result<HireRequest, PipelineError> {
        let entry = self.entry_for(&decision);
        match self.store.append_rejected_if_in_lobby_and_invited(id, entry) {
            Ok(request) => {
                info!(
                    hire_request_id = %id.0,
                    freelancer_id = %decision.freelancer_id,
                    "freelancer rejected"
                );
                Ok(request)
            }
            Err(StoreError::NotFound) => Err(PipelineError::HireRequestNotFound {
                id: id.0.clone(),
            }),
            Err(StoreError::PreconditionFailed(Precondition::InLobby)) => {
                Err(PipelineError::NotInLobby {
                    freelancer_id: decision.freelancer_id,
                })
            }
            Err(StoreError::PreconditionFailed(Precondition::Invited)) => {
                Err(PipelineError::NotInvited {
                    freelancer_id: decision.freelancer_id,
                })
            }
            Err(other) => Err(PipelineError::Store(other)),
        }
    }

    fn entry_for(&self, decision: &Decision) -> SelectionEntry {
        SelectionEntry {
            id: next_entry_id(),
            freelancer_id: decision.freelancer_id.clone(),
            dehix_talent_id: decision.dehix_talent_id.clone(),
        }
    }
}
