use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::config::HireConfig;
use crate::pipeline::domain::{
    HireRequest, HireRequestDraft, HireRequestId, HireRequestUpdate, InvitedEntry, LobbyEntry,
    SelectionEntry, StatusPatch,
};
use crate::pipeline::ledger::InMemoryConnectsLedger;
use crate::pipeline::lobby::LobbySeed;
use crate::pipeline::memory::InMemoryHireRequestStore;
use crate::pipeline::notification::{
    NotificationError, NotificationSink, RecordingNotificationSink, UserNotification,
};
use crate::pipeline::profiles::{FreelancerProfile, InMemoryFreelancerDirectory};
use crate::pipeline::service::HirePipelineService;
use crate::pipeline::store::{HireRequestStore, StoreError};

pub(super) const BUSINESS: &str = "biz-100";
pub(super) const OPENING_BALANCE: u32 = 500;
pub(super) const CREATION_COST: u32 = 50;

pub(super) const FREELANCER_ONE: &str = "free-001";
pub(super) const FREELANCER_TWO: &str = "free-002";
pub(super) const TALENT_ONE: &str = "talent-001";
pub(super) const TALENT_TWO: &str = "talent-002";

pub(super) type MemoryService = HirePipelineService<
    InMemoryHireRequestStore,
    InMemoryConnectsLedger,
    RecordingNotificationSink,
    InMemoryFreelancerDirectory,
>;

pub(super) struct TestStack {
    pub(super) service: Arc<MemoryService>,
    pub(super) store: Arc<InMemoryHireRequestStore>,
    pub(super) ledger: Arc<InMemoryConnectsLedger>,
    pub(super) sink: Arc<RecordingNotificationSink>,
    pub(super) directory: Arc<InMemoryFreelancerDirectory>,
}

pub(super) fn stack() -> TestStack {
    let store = Arc::new(InMemoryHireRequestStore::new());
    let ledger = Arc::new(InMemoryConnectsLedger::new());
    ledger.open_account(BUSINESS, OPENING_BALANCE);

    let directory = Arc::new(InMemoryFreelancerDirectory::new());
    directory.register(FreelancerProfile {
        id: FREELANCER_ONE.to_string(),
        user_name: "aarav.sharma".to_string(),
        email: "aarav@example.com".to_string(),
    });
    directory.register(FreelancerProfile {
        id: FREELANCER_TWO.to_string(),
        user_name: "meera.patel".to_string(),
        email: "meera@example.com".to_string(),
    });

    let sink = Arc::new(RecordingNotificationSink::new());
    let service = Arc::new(HirePipelineService::new(
        store.clone(),
        ledger.clone(),
        sink.clone(),
        directory.clone(),
        HireConfig {
            creation_cost: CREATION_COST,
        },
    ));

    TestStack {
        service,
        store,
        ledger,
        sink,
        directory,
    }
}

pub(super) fn draft() -> HireRequestDraft {
    HireRequestDraft {
        domain_id: None,
        domain_name: None,
        skill_id: Some("skill-rust".to_string()),
        skill_name: Some("Rust".to_string()),
        description: "Backend engineer for the marketplace team".to_string(),
        experience: "5+ years".to_string(),
        freelancer_required: 2,
        status: Default::default(),
        visible: true,
        bookmarked: false,
    }
}

pub(super) fn update() -> HireRequestUpdate {
    HireRequestUpdate {
        domain_id: None,
        domain_name: None,
        skill_id: Some("skill-rust".to_string()),
        skill_name: Some("Rust".to_string()),
        description: "Staff engineer for the payments rework".to_string(),
        experience: "8+ years".to_string(),
        freelancer_required: 1,
        status: Default::default(),
        visible: false,
    }
}

pub(super) fn seed_request(stack: &TestStack) -> HireRequest {
    stack
        .service
        .create(BUSINESS, draft())
        .expect("seed request creates")
}

/// Create a request and put `FREELANCER_ONE`/`TALENT_ONE` into its lobby.
pub(super) fn seed_with_lobby(stack: &TestStack) -> HireRequest {
    let request = seed_request(stack);
    let updated = stack
        .service
        .add_to_lobby(&LobbySeed {
            hire_request_ids: vec![request.id.0.clone()],
            freelancer_id: FREELANCER_ONE.to_string(),
            dehix_talent_ids: vec![TALENT_ONE.to_string()],
        })
        .expect("lobby seed applies");
    updated.into_iter().next().expect("one request updated")
}

/// Insert an aggregate directly, bypassing manager validation, so tests can
/// stage list states the managers themselves refuse to produce.
pub(super) fn insert_raw(
    store: &InMemoryHireRequestStore,
    id: &str,
    lobby: Vec<LobbyEntry>,
    invited: Vec<InvitedEntry>,
) -> HireRequest {
    let request = HireRequest {
        id: HireRequestId(id.to_string()),
        business_id: BUSINESS.to_string(),
        domain_id: None,
        domain_name: None,
        skill_id: None,
        skill_name: None,
        description: "staged".to_string(),
        experience: "staged".to_string(),
        freelancer_required: 1,
        status: Default::default(),
        visible: true,
        bookmarked: false,
        freelancer_in_lobby: lobby,
        freelancer_invited: invited,
        freelancer_selected: Vec::new(),
        freelancer_rejected: Vec::new(),
    };
    store.insert(request).expect("raw insert succeeds")
}

pub(super) fn lobby_entry(freelancer_id: &str, talent_id: &str) -> LobbyEntry {
    LobbyEntry {
        id: format!("fixture-{freelancer_id}-{talent_id}"),
        freelancer_id: freelancer_id.to_string(),
        dehix_talent_id: talent_id.to_string(),
    }
}

pub(super) fn invited_entry(freelancer_id: &str, talent_id: &str) -> InvitedEntry {
    InvitedEntry {
        id: format!("fixture-inv-{freelancer_id}-{talent_id}"),
        freelancer_id: freelancer_id.to_string(),
        dehix_talent_id: talent_id.to_string(),
        status: Default::default(),
    }
}

pub(super) fn selection_entry(freelancer_id: &str, talent_id: &str) -> SelectionEntry {
    SelectionEntry {
        id: format!("fixture-sel-{freelancer_id}-{talent_id}"),
        freelancer_id: freelancer_id.to_string(),
        dehix_talent_id: talent_id.to_string(),
    }
}

pub(super) fn approve_patch() -> StatusPatch {
    StatusPatch {
        status: Some(crate::pipeline::domain::HireRequestStatus::Approved),
        visible: None,
    }
}

/// Store double whose every operation reports the backend as offline.
pub(super) struct UnavailableStore;

impl UnavailableStore {
    fn offline<T>() -> Result<T, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

impl HireRequestStore for UnavailableStore {
    fn insert(&self, _request: HireRequest) -> Result<HireRequest, StoreError> {
        Self::offline()
    }

    fn fetch(&self, _id: &HireRequestId) -> Result<Option<HireRequest>, StoreError> {
        Self::offline()
    }

    fn update(
        &self,
        _id: &HireRequestId,
        _update: HireRequestUpdate,
    ) -> Result<HireRequest, StoreError> {
        Self::offline()
    }

    fn delete(&self, _id: &HireRequestId) -> Result<(), StoreError> {
        Self::offline()
    }

    fn list_by_business(&self, _business_id: &str) -> Result<Vec<HireRequest>, StoreError> {
        Self::offline()
    }

    fn set_status(
        &self,
        _id: &HireRequestId,
        _patch: StatusPatch,
    ) -> Result<HireRequest, StoreError> {
        Self::offline()
    }

    fn set_bookmarked(
        &self,
        _id: &HireRequestId,
        _bookmarked: bool,
    ) -> Result<HireRequest, StoreError> {
        Self::offline()
    }

    fn append_to_lobby(
        &self,
        _id: &HireRequestId,
        _entries: Vec<LobbyEntry>,
    ) -> Result<HireRequest, StoreError> {
        Self::offline()
    }

    fn append_invited_if_in_lobby(
        &self,
        _id: &HireRequestId,
        _entry: InvitedEntry,
    ) -> Result<HireRequest, StoreError> {
        Self::offline()
    }

    fn append_selected_if_invited(
        &self,
        _id: &HireRequestId,
        _entry: SelectionEntry,
    ) -> Result<HireRequest, StoreError> {
        Self::offline()
    }

    fn append_rejected_if_in_lobby_and_invited(
        &self,
        _id: &HireRequestId,
        _entry: SelectionEntry,
    ) -> Result<HireRequest, StoreError> {
        Self::offline()
    }
}

/// Sink double that refuses every delivery.
pub(super) struct FailingSink;

impl NotificationSink for FailingSink {
    fn create(&self, _notification: UserNotification) -> Result<(), NotificationError> {
        Err(NotificationError::Transport(
            "push gateway offline".to_string(),
        ))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
