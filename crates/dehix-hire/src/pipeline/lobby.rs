use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use super::domain::{next_entry_id, HireRequest, HireRequestId, LobbyEntry};
use super::error::PipelineError;
use super::store::{HireRequestStore, StoreError};

/// Bulk seeding payload: one freelancer, one or more talents, across one or
/// more hire requests.
#[derive(Debug, Clone, Deserialize)]
pub struct LobbySeed {
    #[serde(rename = "hireDehixTalent_id")]
    pub hire_request_ids: Vec<String>,
    #[serde(rename = "freelancerId")]
    pub freelancer_id: String,
    #[serde(rename = "dehixTalentId")]
    pub dehix_talent_ids: Vec<String>,
}

/// Adds freelancer+talent pairs into the lobby list of hire requests.
pub struct LobbyManager<S> {
    store: Arc<S>,
}

impl<S> LobbyManager<S>
where
    S: HireRequestStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Best-effort across requests: an id that does not resolve is skipped
    /// with a warning rather than failing the batch. Appends are not
    /// deduplicated — seeding the same pair twice records two entries.
    pub fn add_to_lobby(&self, seed: &LobbySeed) -> Result<Vec<HireRequest>, PipelineError> {
        let mut updated = Vec::new();

        for raw_id in &seed.hire_request_ids {
            let id = HireRequestId(raw_id.clone());
            let entries: Vec<LobbyEntry> = seed
                .dehix_talent_ids
                .iter()
                .map(|talent_id| LobbyEntry {
                    id: next_entry_id(),
                    freelancer_id: seed.freelancer_id.clone(),
                    dehix_talent_id: talent_id.clone(),
                })
                .collect();

            match self.store.append_to_lobby(&id, entries) {
                Ok(request) => {
                    info!(
                        hire_request_id = %id.0,
                        freelancer_id = %seed.freelancer_id,
                        talents = seed.dehix_talent_ids.len(),
                        "seeded lobby"
                    );
                    updated.push(request);
                }
                Err(StoreError::NotFound) => {
                    warn!(hire_request_id = %id.0, "hire request not found, skipping lobby seed");
                }
                Err(other) => return Err(PipelineError::Store(other)),
            }
        }

        Ok(updated)
    }
}
