use super::domain::{
    HireRequest, HireRequestId, HireRequestUpdate, InvitedEntry, LobbyEntry, SelectionEntry,
    StatusPatch,
};

/// Membership check a conditional append found missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    InLobby,
    Invited,
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("hire request already exists")]
    Conflict,
    #[error("hire request not found")]
    NotFound,
    #[error("append precondition failed: {0:?}")]
    PreconditionFailed(Precondition),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence contract for hire-request aggregates.
///
/// Every mutating operation is a single atomic document update: membership
/// validation and list appends execute under the same update so that two
/// concurrent writers cannot interleave between check and append. There is
/// deliberately no uniqueness constraint on candidate entries — concurrent
/// identical appends both land, matching the append-only audit-trail model.
pub trait HireRequestStore: Send + Sync {
    fn insert(&self, request: HireRequest) -> Result<HireRequest, StoreError>;

    fn fetch(&self, id: &HireRequestId) -> Result<Option<HireRequest>, StoreError>;

    /// Replace the scalar request fields, leaving candidate lists untouched.
    fn update(&self, id: &HireRequestId, update: HireRequestUpdate)
        -> Result<HireRequest, StoreError>;

    fn delete(&self, id: &HireRequestId) -> Result<(), StoreError>;

    fn list_by_business(&self, business_id: &str) -> Result<Vec<HireRequest>, StoreError>;

    /// Set `status`/`visible`; fields absent from the patch keep their value.
    fn set_status(&self, id: &HireRequestId, patch: StatusPatch)
        -> Result<HireRequest, StoreError>;

    fn set_bookmarked(&self, id: &HireRequestId, bookmarked: bool)
        -> Result<HireRequest, StoreError>;

    /// Unconditional append of one or more lobby entries.
    fn append_to_lobby(
        &self,
        id: &HireRequestId,
        entries: Vec<LobbyEntry>,
    ) -> Result<HireRequest, StoreError>;

    /// Append to the invited list only if the entry's freelancer already has
    /// a lobby entry; fails with `PreconditionFailed(InLobby)` otherwise.
    fn append_invited_if_in_lobby(
        &self,
        id: &HireRequestId,
        entry: InvitedEntry,
    ) -> Result<HireRequest, StoreError>;

    /// Append to the selected list only if the entry's freelancer has been
    /// invited; fails with `PreconditionFailed(Invited)` otherwise.
    fn append_selected_if_invited(
        &self,
        id: &HireRequestId,
        entry: SelectionEntry,
    ) -> Result<HireRequest, StoreError>;

    /// Append to the rejected list only if the entry's freelancer is present
    /// in both the lobby and invited lists; reports whichever membership is
    /// missing, lobby first.
    fn append_rejected_if_in_lobby_and_invited(
        &self,
        id: &HireRequestId,
        entry: SelectionEntry,
    ) -> Result<HireRequest, StoreError>;
}
