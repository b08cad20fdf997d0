use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identifier wrapper for hire requests.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HireRequestId(pub String);

static ENTRY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Mint an identifier for a candidate-list entry.
pub(crate) fn next_entry_id() -> String {
    let id = ENTRY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("cand-{id:06}")
}

/// Business-facing lifecycle of a hire request, independent of per-candidate
/// state. `Approved` is the terminal value that triggers hire notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HireRequestStatus {
    #[default]
    Added,
    Approved,
    Closed,
}

impl HireRequestStatus {
    pub const fn label(self) -> &'static str {
        match self {
            HireRequestStatus::Added => "ADDED",
            HireRequestStatus::Approved => "APPROVED",
            HireRequestStatus::Closed => "CLOSED",
        }
    }
}

/// Per-invitation response state, set by the business when extending the
/// invitation and updated as the freelancer responds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvitedStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl InvitedStatus {
    pub const fn label(self) -> &'static str {
        match self {
            InvitedStatus::Pending => "PENDING",
            InvitedStatus::Accepted => "ACCEPTED",
            InvitedStatus::Rejected => "REJECTED",
        }
    }
}

/// Candidate known to the business but not yet invited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbyEntry {
    pub id: String,
    #[serde(rename = "freelancerId")]
    pub freelancer_id: String,
    #[serde(rename = "dehixTalentId")]
    pub dehix_talent_id: String,
}

/// Candidate explicitly asked to proceed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitedEntry {
    pub id: String,
    #[serde(rename = "freelancerId")]
    pub freelancer_id: String,
    #[serde(rename = "dehixTalentId")]
    pub dehix_talent_id: String,
    pub status: InvitedStatus,
}

/// Terminal outcome entry, used for both the selected and rejected lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub id: String,
    #[serde(rename = "freelancerId")]
    pub freelancer_id: String,
    #[serde(rename = "dehixTalentId")]
    pub dehix_talent_id: String,
}

/// Aggregate representing one open hiring need and its candidate pipeline.
///
/// The four candidate lists are append-only: promotion to a downstream list
/// never removes the upstream entry, so the lists double as an audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireRequest {
    pub id: HireRequestId,
    #[serde(rename = "businessId")]
    pub business_id: String,
    #[serde(rename = "domainId", skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    #[serde(rename = "domainName", skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(rename = "skillId", skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<String>,
    #[serde(rename = "skillName", skip_serializing_if = "Option::is_none")]
    pub skill_name: Option<String>,
    pub description: String,
    pub experience: String,
    #[serde(rename = "freelancerRequired")]
    pub freelancer_required: u32,
    pub status: HireRequestStatus,
    pub visible: bool,
    pub bookmarked: bool,
    #[serde(rename = "freelancerInLobby")]
    pub freelancer_in_lobby: Vec<LobbyEntry>,
    #[serde(rename = "freelancerInvited")]
    pub freelancer_invited: Vec<InvitedEntry>,
    #[serde(rename = "freelancerSelected")]
    pub freelancer_selected: Vec<SelectionEntry>,
    #[serde(rename = "freelancerRejected")]
    pub freelancer_rejected: Vec<SelectionEntry>,
}

impl HireRequest {
    /// Lobby membership is checked by freelancer id alone; the talent id on
    /// the entry is informational at validation time.
    pub fn lobby_contains(&self, freelancer_id: &str) -> bool {
        self.freelancer_in_lobby
            .iter()
            .any(|entry| entry.freelancer_id == freelancer_id)
    }

    pub fn invited_contains(&self, freelancer_id: &str) -> bool {
        self.freelancer_invited
            .iter()
            .any(|entry| entry.freelancer_id == freelancer_id)
    }
}

fn default_headcount() -> u32 {
    1
}

/// Creation payload. The owning `businessId` comes from caller identity and
/// is supplied separately, never from the request body.
#[derive(Debug, Clone, Deserialize)]
pub struct HireRequestDraft {
    #[serde(rename = "domainId", default)]
    pub domain_id: Option<String>,
    #[serde(rename = "domainName", default)]
    pub domain_name: Option<String>,
    #[serde(rename = "skillId", default)]
    pub skill_id: Option<String>,
    #[serde(rename = "skillName", default)]
    pub skill_name: Option<String>,
    pub description: String,
    pub experience: String,
    #[serde(rename = "freelancerRequired", default = "default_headcount")]
    pub freelancer_required: u32,
    #[serde(default)]
    pub status: HireRequestStatus,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub bookmarked: bool,
}

impl HireRequestDraft {
    pub fn validate(&self, business_id: &str) -> Result<(), ValidationIssue> {
        if business_id.trim().is_empty() {
            return Err(ValidationIssue::MissingBusinessId);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationIssue::MissingDescription);
        }
        if self.experience.trim().is_empty() {
            return Err(ValidationIssue::MissingExperience);
        }
        if self.freelancer_required < 1 {
            return Err(ValidationIssue::HeadcountTooLow {
                requested: self.freelancer_required,
            });
        }
        Ok(())
    }

    /// Materialize the aggregate with empty candidate lists.
    pub fn into_request(self, id: HireRequestId, business_id: &str) -> HireRequest {
        HireRequest {
            id,
            business_id: business_id.to_string(),
            domain_id: self.domain_id,
            domain_name: self.domain_name,
            skill_id: self.skill_id,
            skill_name: self.skill_name,
            description: self.description,
            experience: self.experience,
            freelancer_required: self.freelancer_required,
            status: self.status,
            visible: self.visible,
            bookmarked: self.bookmarked,
            freelancer_in_lobby: Vec::new(),
            freelancer_invited: Vec::new(),
            freelancer_selected: Vec::new(),
            freelancer_rejected: Vec::new(),
        }
    }
}

/// Full-field replacement applied by `PUT`; candidate lists are untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct HireRequestUpdate {
    #[serde(rename = "domainId", default)]
    pub domain_id: Option<String>,
    #[serde(rename = "domainName", default)]
    pub domain_name: Option<String>,
    #[serde(rename = "skillId", default)]
    pub skill_id: Option<String>,
    #[serde(rename = "skillName", default)]
    pub skill_name: Option<String>,
    pub description: String,
    pub experience: String,
    #[serde(rename = "freelancerRequired", default = "default_headcount")]
    pub freelancer_required: u32,
    pub status: HireRequestStatus,
    pub visible: bool,
}

impl HireRequestUpdate {
    pub fn validate(&self) -> Result<(), ValidationIssue> {
        if self.description.trim().is_empty() {
            return Err(ValidationIssue::MissingDescription);
        }
        if self.experience.trim().is_empty() {
            return Err(ValidationIssue::MissingExperience);
        }
        if self.freelancer_required < 1 {
            return Err(ValidationIssue::HeadcountTooLow {
                requested: self.freelancer_required,
            });
        }
        Ok(())
    }
}

/// Targeted `PATCH` of the scalar lifecycle fields; absent fields keep their
/// stored value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StatusPatch {
    #[serde(default)]
    pub status: Option<HireRequestStatus>,
    #[serde(default)]
    pub visible: Option<bool>,
}

/// Rejected creation/update payloads, named by the precondition that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("businessId is required")]
    MissingBusinessId,
    #[error("description is required")]
    MissingDescription,
    #[error("experience is required")]
    MissingExperience,
    #[error("freelancerRequired must be at least 1 (got {requested})")]
    HeadcountTooLow { requested: u32 },
}
