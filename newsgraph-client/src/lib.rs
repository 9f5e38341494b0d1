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

//! Newsgraph Client
//!
//! Typed HTTP client for the newsgraph extraction backend. Defines the
//! [`NewsBackend`] trait the engine programs against, the production
//! [`HttpBackend`] implementation, and the wire types shared by both.

pub mod backend;
pub mod config;
pub mod error;
pub mod types;

pub use backend::{HttpBackend, NewsBackend};
pub use config::BackendConfig;
pub use error::{BackendError, BackendResult};
pub use types::{
    ArticleSummary, ChatAnswer, Citation, GraphEdge, GraphNode, GraphResponse, ImageAnalysis,
    NodeDetail, NodeRelationship, RelatedArticle,
};
