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

//! Exploration surface states
//!
//! Each independent surface of the explorer (graph canvas, summary
//! panel, image-check badge) is a small state machine. States are cheap
//! to clone; heavyweight payloads sit behind `Arc` so accessors can hand
//! out snapshots without copying the graph.

use std::sync::Arc;

use newsgraph_client::{ArticleSummary, ImageAnalysis};
use newsgraph_core::GraphModel;

/// State of the graph canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphState {
    /// No article selected yet.
    Idle,
    /// Extraction request in flight.
    Loading,
    /// Extraction succeeded.
    Ready(Arc<GraphModel>),
    /// Extraction failed; a minimal single-node graph stands in so the
    /// canvas never goes blank.
    Degraded {
        /// The fallback graph to draw.
        model: Arc<GraphModel>,
        /// Human-readable cause of the failure.
        reason: String,
    },
}

impl GraphState {
    /// The model to draw, if any surface is showable.
    pub fn model(&self) -> Option<&Arc<GraphModel>> {
        match self {
            GraphState::Ready(model) | GraphState::Degraded { model, .. } => Some(model),
            _ => None,
        }
    }

    /// True while the extraction request is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, GraphState::Loading)
    }
}

/// State of the trusted-summary panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryState {
    /// No article selected yet.
    Idle,
    /// Summary request in flight.
    Loading,
    /// Summary available.
    Ready(ArticleSummary),
    /// Summary request failed; the panel shows the reason and a retry.
    Failed(String),
}

/// State of the image forensics check.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageCheckState {
    /// Not requested for this article.
    Idle,
    /// Forensics request in flight.
    Running,
    /// Verdict available.
    Done(ImageAnalysis),
    /// Check could not run or failed.
    Failed(String),
}
