use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::domain::{
    HireRequest, HireRequestId, HireRequestUpdate, InvitedEntry, LobbyEntry, SelectionEntry,
    StatusPatch,
};
use super::store::{HireRequestStore, Precondition, StoreError};

/// Document store backed by a mutex-guarded map. Each trait operation takes
/// the lock once, so every mutation is one atomic document update — the same
/// guarantee the production document database gives to a single
/// find-and-update call.
#[derive(Default, Clone)]
pub struct InMemoryHireRequestStore {
    requests: Arc<Mutex<BTreeMap<HireRequestId, HireRequest>>>,
}

impl InMemoryHireRequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_request<T>(
        &self,
        id: &HireRequestId,
        mutate: impl FnOnce(&mut HireRequest) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.requests.lock().expect("store mutex poisoned");
        let request = guard.get_mut(id).ok_or(StoreError::NotFound)?;
        mutate(request)
    }
}

impl HireRequestStore for InMemoryHireRequestStore {
    fn insert(&self, request: HireRequest) -> Result<HireRequest, StoreError> {
        let mut guard = self.requests.lock().expect("store mutex poisoned");
        if guard.contains_key(&request.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(request.id.clone(), request.clone());
        Ok(request)
    }

    fn fetch(&self, id: &HireRequestId) -> Result<Option<HireRequest>, StoreError> {
        let guard = self.requests.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn update(
        &self,
        id: &HireRequestId,
        update: HireRequestUpdate,
    ) -> Result<HireRequest, StoreError> {
        self.with_request(id, |request| {
            request.domain_id = update.domain_id;
            request.domain_name = update.domain_name;
            request.skill_id = update.skill_id;
            request.skill_name = update.skill_name;
            request.description = update.description;
            request.experience = update.experience;
            request.freelancer_required = update.freelancer_required;
            request.status = update.status;
            request.visible = update.visible;
            Ok(request.clone())
        })
    }

    fn delete(&self, id: &HireRequestId) -> Result<(), StoreError> {
        let mut guard = self.requests.lock().expect("store mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    fn list_by_business(&self, business_id: &str) -> Result<Vec<HireRequest>, StoreError> {
        let guard = self.requests.lock().expect("store mutex poisoned");
        Ok(guard
            .values()
            .filter(|request| request.business_id == business_id)
            .cloned()
            .collect())
    }

    fn set_status(
        &self,
        id: &HireRequestId,
        patch: StatusPatch,
    ) -> Result<HireRequest, StoreError> {
        self.with_request(id, |request| {
            if let Some(status) = patch.status {
                request.status = status;
            }
            if let Some(visible) = patch.visible {
                request.visible = visible;
            }
            Ok(request.clone())
        })
    }

    fn set_bookmarked(
        &self,
        id: &HireRequestId,
        bookmarked: bool,
    ) -> Result<HireRequest, StoreError> {
        self.with_request(id, |request| {
            request.bookmarked = bookmarked;
            Ok(request.clone())
        })
    }

    fn append_to_lobby(
        &self,
        id: &HireRequestId,
        entries: Vec<LobbyEntry>,
    ) -> Result<HireRequest, StoreError> {
        self.with_request(id, |request| {
            request.freelancer_in_lobby.extend(entries);
            Ok(request.clone())
        })
    }

    fn append_invited_if_in_lobby(
        &self,
        id: &HireRequestId,
        entry: InvitedEntry,
    ) -> Result<HireRequest, StoreError> {
        self.with_request(id, |request| {
            if !request.lobby_contains(&entry.freelancer_id) {
                return Err(StoreError::PreconditionFailed(Precondition::InLobby));
            }
            request.freelancer_invited.push(entry);
            Ok(request.clone())
        })
    }

    fn append_selected_if_invited(
        &self,
        id: &HireRequestId,
        entry: SelectionEntry,
    ) -> Result<HireRequest, StoreError> {
        self.with_request(id, |request| {
            if !request.invited_contains(&entry.freelancer_id) {
                return Err(StoreError::PreconditionFailed(Precondition::Invited));
            }
            request.freelancer_selected.push(entry);
            Ok(request.clone())
        })
    }

    fn append_rejected_if_in_lobby_and_invited(
        &self,
        id: &HireRequestId,
        entry: SelectionEntry,
    ) -> Result<HireRequest, StoreError> {
        self.with_request(id, |request| {
            if !request.lobby_contains(&entry.freelancer_id) {
                return Err(StoreError::PreconditionFailed(Precondition::InLobby));
            }
            if !request.invited_contains(&entry.freelancer_id) {
                return Err(StoreError::PreconditionFailed(Precondition::Invited));
            }
            request.freelancer_rejected.push(entry);
            Ok(request.clone())
        })
    }
}
