use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use crate::config::HireConfig;

use super::decision::{Decision, DecisionManager};
use super::domain::{
    HireRequest, HireRequestDraft, HireRequestId, HireRequestUpdate, InvitedEntry, StatusPatch,
};
use super::error::{map_ledger_error, PipelineError};
use super::invitation::{Invitation, InvitationManager};
use super::ledger::ConnectsLedger;
use super::lobby::{LobbyManager, LobbySeed};
use super::notification::{NotificationDispatcher, NotificationSink};
use super::profiles::{CandidateProfile, FreelancerProfileLookup};
use super::store::{HireRequestStore, StoreError};

static HIRE_REQUEST_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_hire_request_id() -> HireRequestId {
    let id = HIRE_REQUEST_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    HireRequestId(format!("hire-{id:06}"))
}

/// Root orchestrator of the hire pipeline: composes the store, the connects
/// ledger, the stage managers, the notification dispatcher, and the profile
/// collaborator behind one service facade.
pub struct HirePipelineService<S, L, N, F> {
    store: Arc<S>,
    ledger: Arc<L>,
    lobby: LobbyManager<S>,
    invitations: InvitationManager<S>,
    decisions: DecisionManager<S>,
    notifications: NotificationDispatcher<N>,
    profiles: Arc<F>,
    config: HireConfig,
}

impl<S, L, N, F> HirePipelineService<S, L, N, F>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    pub fn new(
        store: Arc<S>,
        ledger: Arc<L>,
        sink: Arc<N>,
        profiles: Arc<F>,
        config: HireConfig,
    ) -> Self {
        Self {
            lobby: LobbyManager::new(store.clone()),
            invitations: InvitationManager::new(store.clone()),
            decisions: DecisionManager::new(store.clone()),
            notifications: NotificationDispatcher::new(sink),
            store,
            ledger,
            profiles,
            config,
        }
    }

    /// Open a hire request, debiting the creation cost from the business.
    ///
    /// The debit and the insert form one unit of work: the ledger enforces
    /// the balance check atomically inside `debit`, and an insert failure
    /// refunds the debit before the error propagates.
    pub fn create(
        &self,
        business_id: &str,
        draft: HireRequestDraft,
    ) -> Result<HireRequest, PipelineError> {
        draft.validate(business_id)?;

        let cost = self.config.creation_cost;
        let remaining = self
            .ledger
            .debit(business_id, cost)
            .map_err(|err| map_ledger_error(business_id, err))?;

        let request = draft.into_request(next_hire_request_id(), business_id);
        match self.store.insert(request) {
            Ok(stored) => {
                info!(
                    hire_request_id = %stored.id.0,
                    business_id,
                    connects_remaining = remaining,
                    "hire request created"
                );
                Ok(stored)
            }
            Err(err) => {
                if let Err(refund_err) = self.ledger.credit(business_id, cost) {
                    error!(
                        business_id,
                        amount = cost,
                        error = %refund_err,
                        "refund after failed hire-request insert did not apply"
                    );
                }
                Err(PipelineError::Store(err))
            }
        }
    }

    pub fn fetch(&self, id: &HireRequestId) -> Result<HireRequest, PipelineError> {
        self.store
            .fetch(id)
            .map_err(PipelineError::Store)?
            .ok_or_else(|| PipelineError::HireRequestNotFound { id: id.0.clone() })
    }

    /// Full update of the scalar request fields.
    pub fn update(
        &self,
        id: &HireRequestId,
        update: HireRequestUpdate,
    ) -> Result<HireRequest, PipelineError> {
        update.validate()?;
        self.store
            .update(id, update)
            .map_err(|err| Self::request_error(id, err))
    }

    pub fn delete(&self, id: &HireRequestId) -> Result<(), PipelineError> {
        self.store
            .delete(id)
            .map_err(|err| Self::request_error(id, err))?;
        info!(hire_request_id = %id.0, "hire request deleted");
        Ok(())
    }

    /// All requests owned by the business; the business must exist.
    pub fn list_for_business(&self, business_id: &str) -> Result<Vec<HireRequest>, PipelineError> {
        self.ledger
            .balance(business_id)
            .map_err(|err| map_ledger_error(business_id, err))?;
        self.store
            .list_by_business(business_id)
            .map_err(PipelineError::Store)
    }

    /// Patch `status`/`visible`. A transition to `APPROVED` notifies both
    /// parties; notification failure never rolls the patch back.
    pub fn patch_status(
        &self,
        business_id: &str,
        id: &HireRequestId,
        patch: StatusPatch,
    ) -> Result<HireRequest, PipelineError> {
        self.ledger
            .balance(business_id)
            .map_err(|err| map_ledger_error(business_id, err))?;

        let request = self
            .store
            .set_status(id, patch)
            .map_err(|err| Self::request_error(id, err))?;

        if matches!(patch.status, Some(super::domain::HireRequestStatus::Approved)) {
            self.notifications.on_status_approved(id, business_id);
        }

        Ok(request)
    }

    pub fn set_bookmarked(
        &self,
        business_id: &str,
        id: &HireRequestId,
        bookmarked: bool,
    ) -> Result<HireRequest, PipelineError> {
        self.ledger
            .balance(business_id)
            .map_err(|err| map_ledger_error(business_id, err))?;
        self.store
            .set_bookmarked(id, bookmarked)
            .map_err(|err| Self::request_error(id, err))
    }

    pub fn add_to_lobby(&self, seed: &LobbySeed) -> Result<Vec<HireRequest>, PipelineError> {
        self.lobby.add_to_lobby(seed)
    }

    pub fn invite(
        &self,
        id: &HireRequestId,
        invitation: Invitation,
    ) -> Result<HireRequest, PipelineError> {
        self.invitations.invite(id, invitation)
    }

    pub fn select(
        &self,
        id: &HireRequestId,
        decision: Decision,
    ) -> Result<HireRequest, PipelineError> {
        self.decisions.select(id, decision)
    }

    pub fn reject(
        &self,
        id: &HireRequestId,
        decision: Decision,
    ) -> Result<HireRequest, PipelineError> {
        self.decisions.reject(id, decision)
    }

    /// Resolve the lobby list into full freelancer profiles.
    pub fn lobby_profiles(&self, id: &HireRequestId) -> Result<Vec<CandidateProfile>, PipelineError> {
        let request = self.fetch(id)?;
        let pairs: Vec<(String, String)> = request
            .freelancer_in_lobby
            .iter()
            .map(|entry| (entry.freelancer_id.clone(), entry.dehix_talent_id.clone()))
            .collect();
        self.resolve_profiles(pairs, |_| None)
    }

    /// Resolve the invited list, carrying each entry's invitation status.
    pub fn invited_profiles(
        &self,
        id: &HireRequestId,
    ) -> Result<Vec<CandidateProfile>, PipelineError> {
        let request = self.fetch(id)?;
        let entries: Vec<InvitedEntry> = request.freelancer_invited.clone();
        let pairs: Vec<(String, String)> = entries
            .iter()
            .map(|entry| (entry.freelancer_id.clone(), entry.dehix_talent_id.clone()))
            .collect();
        self.resolve_profiles(pairs, |index| Some(entries[index].status))
    }

    pub fn selected_profiles(
        &self,
        id: &HireRequestId,
    ) -> Result<Vec<CandidateProfile>, PipelineError> {
        let request = self.fetch(id)?;
        let pairs = Self::selection_pairs(&request.freelancer_selected);
        self.resolve_profiles(pairs, |_| None)
    }

    pub fn rejected_profiles(
        &self,
        id: &HireRequestId,
    ) -> Result<Vec<CandidateProfile>, PipelineError> {
        let request = self.fetch(id)?;
        let pairs = Self::selection_pairs(&request.freelancer_rejected);
        self.resolve_profiles(pairs, |_| None)
    }

    fn selection_pairs(entries: &[super::domain::SelectionEntry]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|entry| (entry.freelancer_id.clone(), entry.dehix_talent_id.clone()))
            .collect()
    }

    /// Fan-out read to the profile collaborator. A candidate entry whose
    /// profile no longer resolves fails the whole read, matching the
    /// consistency expectation of the business-facing candidate views.
    fn resolve_profiles(
        &self,
        pairs: Vec<(String, String)>,
        invited_status: impl Fn(usize) -> Option<super::domain::InvitedStatus>,
    ) -> Result<Vec<CandidateProfile>, PipelineError> {
        let mut resolved = Vec::with_capacity(pairs.len());
        for (index, (freelancer_id, dehix_talent_id)) in pairs.into_iter().enumerate() {
            let profile = self
                .profiles
                .find(&freelancer_id)
                .map_err(PipelineError::Profiles)?
                .ok_or_else(|| PipelineError::FreelancerNotFound {
                    id: freelancer_id.clone(),
                })?;
            resolved.push(CandidateProfile {
                profile,
                dehix_talent_id,
                invited_status: invited_status(index),
            });
        }
        Ok(resolved)
    }

    fn request_error(id: &HireRequestId, err: StoreError) -> PipelineError {
        match err {
            StoreError::NotFound => PipelineError::HireRequestNotFound { id: id.0.clone() },
            other => PipelineError::Store(other),
        }
    }
}
