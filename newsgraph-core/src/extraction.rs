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

//! Extraction payload
//!
//! The backend's entity extraction returns more than the node/edge lists:
//! raw entity mentions with context, relation evidence, and enrichment
//! blobs (Wikipedia summaries, related RSS articles) whose shape this
//! crate does not interpret. Later requests (node details, chat, image
//! check) must echo the payload back byte-for-byte in meaning, so the
//! parts we do not model are preserved as opaque JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entity mention as reported by the extraction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    /// Entity surface name.
    pub name: String,
    /// Free-form type string (`"PERSON"`, `"ORG"`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Sentence fragment the entity was found in, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// One relation between two extracted entities, with optional evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRelation {
    /// Name of the source entity.
    pub source: String,
    /// Name of the target entity.
    pub target: String,
    /// Verb phrase connecting the two.
    #[serde(default)]
    pub relationship: String,
    /// Supporting sentence, when the extractor recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Complete extraction payload for one article.
///
/// `entities` and `relations` are modeled because the engine reads them;
/// everything else the service attaches (`rss_articles`,
/// `wikipedia_data`, future fields) is captured in `extra` and carried
/// through serialization unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionData {
    /// Entity mentions, in extraction order.
    #[serde(default)]
    pub entities: Vec<ExtractedEntity>,
    /// Relations between mentions.
    #[serde(default)]
    pub relations: Vec<ExtractedRelation>,
    /// Enrichment fields this crate passes through without interpreting.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ExtractionData {
    /// True when the extractor found nothing usable.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relations.is_empty()
    }
}
