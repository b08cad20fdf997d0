use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::domain::InvitedStatus;

/// Slim projection of a freelancer profile. Full profile CRUD lives in the
/// freelancer service; the pipeline only reads this view when resolving
/// candidate lists for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreelancerProfile {
    pub id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub email: String,
}

/// Profile lookup error. The collaborator distinguishes "no such profile"
/// (`Ok(None)`) from transport failure.
#[derive(Debug, thiserror::Error)]
pub enum ProfileLookupError {
    #[error("profile service unavailable: {0}")]
    Unavailable(String),
}

/// Read-side collaborator interface to the freelancer-profile service.
pub trait FreelancerProfileLookup: Send + Sync {
    fn find(&self, freelancer_id: &str) -> Result<Option<FreelancerProfile>, ProfileLookupError>;
}

/// Candidate-list entry resolved into a full profile, annotated with the
/// talent the entry was recorded for and, for invited entries, the current
/// invitation status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateProfile {
    #[serde(flatten)]
    pub profile: FreelancerProfile,
    #[serde(rename = "dehixTalentId")]
    pub dehix_talent_id: String,
    #[serde(rename = "invitedStatus", skip_serializing_if = "Option::is_none")]
    pub invited_status: Option<InvitedStatus>,
}

/// Directory of profiles used by the API binary and tests.
#[derive(Default, Clone)]
pub struct InMemoryFreelancerDirectory {
    profiles: Arc<Mutex<HashMap<String, FreelancerProfile>>>,
}

impl InMemoryFreelancerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, profile: FreelancerProfile) {
        let mut guard = self.profiles.lock().expect("directory mutex poisoned");
        guard.insert(profile.id.clone(), profile);
    }
}

impl FreelancerProfileLookup for InMemoryFreelancerDirectory {
    fn find(&self, freelancer_id: &str) -> Result<Option<FreelancerProfile>, ProfileLookupError> {
        let guard = self.profiles.lock().expect("directory mutex poisoned");
        Ok(guard.get(freelancer_id).cloned())
    }
}
