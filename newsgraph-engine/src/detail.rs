// Copyright 2025 Newsgraph Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Node detail controller
//!
//! Tracks which entity is selected and loads its enrichment panel.
//! Selection follows an exclusive latest-wins discipline: every select
//! call bumps a sequence number, and a response only commits if its
//! request is still the newest one. Clicking A then quickly B never
//! leaves A's payload on screen, no matter which response lands first.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use newsgraph_client::{NewsBackend, NodeDetail};
use newsgraph_core::ExtractionData;

use crate::error::{ExploreError, ExploreResult};

/// Load state of one entity's detail panel.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Request in flight.
    Loading,
    /// Detail available.
    Loaded(Arc<NodeDetail>),
    /// Request failed; the panel shows the reason and a retry.
    Failed(String),
}

struct DetailEntry {
    /// Sequence number of the request that owns this entry.
    ticket: u64,
    state: DetailState,
}

/// Per-article selection and detail loader.
///
/// Created fresh for every article; the extraction payload it echoes to
/// the backend is fixed at construction.
pub struct DetailController {
    backend: Arc<dyn NewsBackend>,
    extraction: Arc<ExtractionData>,
    entries: DashMap<String, DetailEntry>,
    selected: RwLock<Option<String>>,
    sequence: AtomicU64,
}

impl DetailController {
    /// New controller over the given backend and extraction payload.
    pub fn new(backend: Arc<dyn NewsBackend>, extraction: Arc<ExtractionData>) -> Self {
        Self {
            backend,
            extraction,
            entries: DashMap::new(),
            selected: RwLock::new(None),
            sequence: AtomicU64::new(0),
        }
    }

    /// Select an entity by display label and start loading its details.
    ///
    /// Always refetches, even when a previous result for the label is
    /// cached: enrichment is cheap to re-request and may have grown
    /// since. The entry is set to [`DetailState::Loading`] before the
    /// request leaves, so the panel never shows a stale payload under a
    /// new selection. The returned handle resolves to
    /// [`ExploreError::Stale`] if a newer selection supersedes this one.
    pub fn select(self: &Arc<Self>, label: &str) -> JoinHandle<ExploreResult<()>> {
        let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        *self.selected.write() = Some(label.to_string());
        self.entries.insert(
            label.to_string(),
            DetailEntry {
                ticket,
                state: DetailState::Loading,
            },
        );
        debug!(label, ticket, "loading node details");

        let this = Arc::clone(self);
        let label = label.to_string();
        tokio::spawn(async move { this.fetch_and_commit(ticket, label).await })
    }

    /// Clear the selection. Any in-flight request is invalidated and
    /// its response will be discarded.
    pub fn deselect(&self) {
        self.sequence.fetch_add(1, Ordering::SeqCst);
        *self.selected.write() = None;
    }

    /// Refetch the currently selected entity, if there is one.
    pub fn retry(self: &Arc<Self>) -> Option<JoinHandle<ExploreResult<()>>> {
        let label = self.selected.read().clone()?;
        Some(self.select(&label))
    }

    /// Label of the currently selected entity.
    pub fn selected(&self) -> Option<String> {
        self.selected.read().clone()
    }

    /// Load state recorded for a label, if it was ever selected.
    pub fn state_of(&self, label: &str) -> Option<DetailState> {
        self.entries.get(label).map(|entry| entry.state.clone())
    }

    /// Load state of the current selection.
    pub fn selected_state(&self) -> Option<DetailState> {
        let label = self.selected.read().clone()?;
        self.state_of(&label)
    }

    async fn fetch_and_commit(&self, ticket: u64, label: String) -> ExploreResult<()> {
        let result = self.backend.node_details(&label, &self.extraction).await;

        // Commit only while this is still the newest request anywhere
        // and nothing re-claimed the label's entry in the meantime.
        let mut committed = false;
        if self.sequence.load(Ordering::SeqCst) == ticket {
            if let Some(mut entry) = self.entries.get_mut(&label) {
                if entry.ticket == ticket {
                    entry.state = match result {
                        Ok(detail) => DetailState::Loaded(Arc::new(detail)),
                        Err(err) => {
                            warn!(label = %label, error = %err, "node detail fetch failed");
                            DetailState::Failed(err.to_string())
                        }
                    };
                    committed = true;
                }
            }
        }

        if !committed {
            debug!(label = %label, ticket, "discarding superseded node detail response");
            return Err(ExploreError::Stale);
        }
        Ok(())
    }
}
