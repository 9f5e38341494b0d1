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

//! Graph model
//!
//! An immutable snapshot of one article's knowledge graph. Entity order
//! is meaningful: it fixes both the angular placement of satellites and
//! the priority of overlapping nodes during hit testing.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind, Relation};
use crate::extraction::ExtractionData;

/// Id conventionally given to the central topic node.
pub const MAIN_NODE_ID: &str = "main";

/// One article's knowledge graph: entities, relations, and the raw
/// extraction payload they were distilled from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
    /// Graph nodes in presentation order.
    pub entities: Vec<Entity>,
    /// Directed edges; may reference ids absent from `entities`.
    pub relations: Vec<Relation>,
    /// Raw extraction payload, echoed back to the backend on follow-up
    /// requests.
    #[serde(default)]
    pub extraction: ExtractionData,
}

impl GraphModel {
    /// Build a model from its parts.
    pub fn new(entities: Vec<Entity>, relations: Vec<Relation>, extraction: ExtractionData) -> Self {
        Self {
            entities,
            relations,
            extraction,
        }
    }

    /// Minimal graph shown when extraction fails: a single main node
    /// carrying the article topic, no relations, empty extraction.
    pub fn fallback(topic: &str) -> Self {
        Self {
            entities: vec![Entity::new(MAIN_NODE_ID, topic, EntityKind::Main)],
            relations: Vec::new(),
            extraction: ExtractionData::default(),
        }
    }

    /// True when the graph has no entities at all.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The central topic entity, if the graph has one.
    pub fn main_entity(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.is_main())
    }

    /// Look up an entity by id.
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Look up an entity by display label.
    ///
    /// Labels are what node-detail requests are keyed on, so this is the
    /// bridge from a rendered node back to backend lookups.
    pub fn entity_by_label(&self, label: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.label == label)
    }
}
