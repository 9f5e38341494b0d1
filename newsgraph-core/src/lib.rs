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

//! Newsgraph Core
//!
//! Domain types for the newsgraph article explorer: the knowledge-graph
//! model extracted from a news article, the deterministic radial layout
//! that places it on a canvas, and the render planner that turns model
//! plus layout into drawing commands. Everything in this crate is pure
//! and synchronous; networking and state live in the sibling crates.

pub mod article;
pub mod entity;
pub mod extraction;
pub mod layout;
pub mod model;
pub mod render;

pub use article::ArticleRef;
pub use entity::{Entity, EntityKind, Relation};
pub use extraction::{ExtractedEntity, ExtractedRelation, ExtractionData};
pub use layout::{
    radial_layout, GraphLayout, LayoutOptions, NodePlacement, MAIN_HIT_RADIUS,
    SATELLITE_HIT_RADIUS,
};
pub use model::{GraphModel, MAIN_NODE_ID};
pub use render::{render, DrawCommand};
