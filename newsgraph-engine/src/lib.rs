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

//! Newsgraph Engine
//!
//! The concurrent state machine behind the newsgraph explorer. The
//! [`ArticleExplorer`] orchestrates what happens when an article is
//! selected: graph extraction and summary generation run concurrently,
//! node details follow an exclusive latest-wins selection discipline,
//! and the chat session appends one grounded answer per question. Every
//! asynchronous result is generation-checked before it commits, so
//! switching articles mid-flight can never mix surfaces.

pub mod chat;
pub mod detail;
pub mod error;
pub mod explorer;
pub mod state;

pub use chat::{ChatMessage, ChatRole, ChatSession, SendOutcome, FALLBACK_ANSWER};
pub use detail::{DetailController, DetailState};
pub use error::{ExploreError, ExploreResult};
pub use explorer::{ArticleExplorer, GRAPH_REQUIRED_MESSAGE, MISSING_IMAGE_MESSAGE};
pub use state::{GraphState, ImageCheckState, SummaryState};
