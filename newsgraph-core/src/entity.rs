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

//! Entity and relation types
//!
//! The building blocks of an article's knowledge graph: named entities
//! extracted from the article text and directed relations between them.

use serde::{Deserialize, Serialize};

/// Classification of a graph entity.
///
/// The extraction service reports free-form type strings; anything it
/// produces that is not recognized here collapses to [`EntityKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// The article's own topic node, always placed at the canvas center.
    Main,
    /// A person mentioned in the article.
    Person,
    /// A company, agency, team, or other organization.
    Organization,
    /// Everything else: places, events, products, concepts.
    Other,
}

impl EntityKind {
    /// Parse a type string as reported on the wire.
    ///
    /// Matching is case-insensitive and unknown strings fall back to
    /// [`EntityKind::Other`] rather than failing.
    pub fn from_wire(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "main" => EntityKind::Main,
            "person" => EntityKind::Person,
            "organization" | "org" | "company" => EntityKind::Organization,
            _ => EntityKind::Other,
        }
    }

    /// Canonical lowercase name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Main => "main",
            EntityKind::Person => "person",
            EntityKind::Organization => "organization",
            EntityKind::Other => "other",
        }
    }

    /// Fill color used when drawing a node of this kind.
    pub fn color(&self) -> &'static str {
        match self {
            EntityKind::Main => "#3b82f6",
            EntityKind::Person => "#8b5cf6",
            EntityKind::Organization => "#f59e0b",
            EntityKind::Other => "#64748b",
        }
    }
}

impl Default for EntityKind {
    fn default() -> Self {
        EntityKind::Other
    }
}

/// A single node in the knowledge graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identifier, unique within one graph (e.g. `"main"`, `"node_3"`).
    pub id: String,
    /// Human-readable display label.
    pub label: String,
    /// Entity classification, drives node size and color.
    pub kind: EntityKind,
}

impl Entity {
    /// Create a new entity.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }

    /// Whether this is the central topic node.
    pub fn is_main(&self) -> bool {
        self.kind == EntityKind::Main
    }
}

/// A directed, labeled edge between two entities.
///
/// Endpoints are entity ids. A relation may reference an id that is not
/// present in the graph (the extraction service trims node lists harder
/// than edge lists); consumers must skip such dangling edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Id of the entity the relation points from.
    pub source: String,
    /// Id of the entity the relation points to.
    pub target: String,
    /// Short verb phrase describing the relation (may be empty).
    #[serde(rename = "label", default)]
    pub relationship: String,
}

impl Relation {
    /// Create a new relation.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relationship: relationship.into(),
        }
    }
}
