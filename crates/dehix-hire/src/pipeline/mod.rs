//! Hire-Dehix-Talent pipeline.
//!
//! Moves a freelancer from a hire request's applicant lobby, through an
//! invitation, to a terminal selected or rejected outcome, debiting the
//! business's connects balance at creation and notifying both parties when a
//! request is approved. Candidate lists are append-only: downstream
//! promotion never erases upstream history, and membership validation plus
//! append execute as one atomic store update.

pub mod decision;
pub mod domain;
pub mod error;
pub mod invitation;
pub mod ledger;
pub mod lobby;
pub mod memory;
pub mod notification;
pub mod profiles;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use decision::{Decision, DecisionManager};
pub use domain::{
    HireRequest, HireRequestDraft, HireRequestId, HireRequestStatus, HireRequestUpdate,
    InvitedEntry, InvitedStatus, LobbyEntry, SelectionEntry, StatusPatch, ValidationIssue,
};
pub use error::PipelineError;
pub use invitation::{Invitation, InvitationManager};
pub use ledger::{ConnectsLedger, InMemoryConnectsLedger, LedgerError};
pub use lobby::{LobbyManager, LobbySeed};
pub use memory::InMemoryHireRequestStore;
pub use notification::{
    NotificationDispatcher, NotificationError, NotificationKind, NotificationSink,
    RecordingNotificationSink, UserNotification,
};
pub use profiles::{
    CandidateProfile, FreelancerProfile, FreelancerProfileLookup, InMemoryFreelancerDirectory,
    ProfileLookupError,
};
pub use router::{hire_router, BusinessIdentity, BUSINESS_ID_HEADER};
pub use service::HirePipelineService;
pub use store::{HireRequestStore, Precondition, StoreError};
