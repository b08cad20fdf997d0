use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use super::domain::{next_entry_id, HireRequest, HireRequestId, InvitedEntry, InvitedStatus};
use super::error::PipelineError;
use super::store::{HireRequestStore, StoreError};

/// Invitation payload; the status defaults to `PENDING` when the business
/// does not set one explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct Invitation {
    #[serde(rename = "freelancerId")]
    pub freelancer_id: String,
    #[serde(rename = "dehixTalentId")]
    pub dehix_talent_id: String,
    #[serde(default)]
    pub status: InvitedStatus,
}

/// Promotes a lobby member to invited.
pub struct InvitationManager<S> {
    store: Arc<S>,
}

impl<S> InvitationManager<S>
where
    S: HireRequestStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Lobby membership is validated by freelancer id alone; the invitation
    /// may name a different talent than the lobby entry did.
    pub fn invite(
        &self,
        id: &HireRequestId,
        invitation: Invitation,
    ) -> Result<HireRequest, PipelineError> {
        let entry = InvitedEntry {
            id: next_entry_id(),
            freelancer_id: invitation.freelancer_id.clone(),
            dehix_talent_id: invitation.dehix_talent_id,
            status: invitation.status,
        };

        match self.store.append_invited_if_in_lobby(id, entry) {
            Ok(request) => {
                info!(
                    hire_request_id = %id.0,
                    freelancer_id = %invitation.freelancer_id,
                    "freelancer invited"
                );
                Ok(request)
            }
            Err(StoreError::NotFound) => Err(PipelineError::HireRequestNotFound {
                id: id.0.clone(),
            }),
            Err(StoreError::PreconditionFailed(_)) => Err(PipelineError::NotInLobby {
                freelancer_id: invitation.freelancer_id,
            }),
            Err(other) => Err(PipelineError::Store(other)),
        }
    }
}
