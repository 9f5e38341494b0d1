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

//! Wire types
//!
//! Response shapes of the extraction backend. Parsing is deliberately
//! forgiving: optional sections default to empty rather than failing the
//! whole response, because the backend fills fields best-effort from
//! several enrichment sources.

use serde::{Deserialize, Serialize};

use newsgraph_core::{Entity, EntityKind, ExtractionData, GraphModel, Relation};

/// Response of the knowledge-graph endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphResponse {
    /// Topic label the backend derived from the article title.
    #[serde(default)]
    pub topic: String,
    /// Graph nodes, main node first.
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    /// Directed edges between node ids.
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
    /// Full extraction payload to echo on follow-up requests.
    #[serde(default)]
    pub extraction_data: ExtractionData,
}

impl GraphResponse {
    /// Convert the wire shape into the domain model.
    pub fn into_model(self) -> GraphModel {
        let entities = self
            .nodes
            .into_iter()
            .map(|node| Entity::new(node.id, node.label, EntityKind::from_wire(&node.kind)))
            .collect();
        let relations = self
            .edges
            .into_iter()
            .map(|edge| Relation::new(edge.source, edge.target, edge.label))
            .collect();
        GraphModel::new(entities, relations, self.extraction_data)
    }
}

/// One node as the backend reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Node id, `"main"` for the topic node.
    pub id: String,
    /// Display label, already trimmed by the backend.
    pub label: String,
    /// Free-form type string.
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// One edge as the backend reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Relation label; may be empty for plain mention edges.
    #[serde(default)]
    pub label: String,
}

/// Response of the node-details endpoint.
///
/// Unknown labels do not error: the backend answers with a stub carrying
/// empty strings and zero counts, and that stub renders fine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDetail {
    /// Entity name echoed back.
    #[serde(default)]
    pub name: String,
    /// Entity type string.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// One-line description, synthesized when nothing better exists.
    #[serde(default)]
    pub description: String,
    /// Wikipedia lead paragraph, empty when no page matched.
    #[serde(default)]
    pub wikipedia_summary: String,
    /// URL of the matched Wikipedia page, empty when none.
    #[serde(default)]
    pub wikipedia_url: String,
    /// Related articles pulled from news feeds.
    #[serde(default)]
    pub related_news: Vec<RelatedArticle>,
    /// Relations this entity participates in.
    #[serde(default)]
    pub relationships: Vec<NodeRelationship>,
    /// Backend's count of relationships, used for the panel header.
    #[serde(default)]
    pub relationship_count: usize,
}

impl NodeDetail {
    /// Whether a Wikipedia match was found.
    pub fn has_wikipedia(&self) -> bool {
        !self.wikipedia_summary.is_empty()
    }
}

/// A related news article attached to a node detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedArticle {
    /// Article headline.
    #[serde(default)]
    pub title: String,
    /// Teaser text.
    #[serde(default)]
    pub description: String,
    /// Link to the article.
    #[serde(default)]
    pub link: String,
}

/// One relationship row in a node detail, seen from the queried entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeRelationship {
    /// The queried entity is the source of the relation.
    Outgoing {
        /// Verb phrase of the relation.
        relationship: String,
        /// Name of the entity the relation points to.
        target: String,
        /// Supporting sentence, when recorded.
        #[serde(default)]
        context: String,
    },
    /// The queried entity is the target of the relation.
    Incoming {
        /// Verb phrase of the relation.
        relationship: String,
        /// Name of the entity the relation comes from.
        source: String,
        /// Supporting sentence, when recorded.
        #[serde(default)]
        context: String,
    },
}

impl NodeRelationship {
    /// Name of the entity on the other end of the relation.
    pub fn counterpart(&self) -> &str {
        match self {
            NodeRelationship::Outgoing { target, .. } => target,
            NodeRelationship::Incoming { source, .. } => source,
        }
    }
}

/// Response of the chat endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatAnswer {
    /// The assistant's reply.
    pub answer: String,
    /// Article title echoed back.
    #[serde(default)]
    pub article_title: String,
}

/// Response of the image forensics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    /// `"REAL"` or `"FAKE"`.
    pub prediction: String,
    /// Confidence in the prediction, `0.0..=1.0`.
    pub confidence: f64,
    /// Model probability the image is authentic.
    pub real_probability: f64,
    /// Model probability the image is manipulated.
    pub fake_probability: f64,
    /// Raw classifier score before calibration.
    pub raw_score: f64,
    /// Optional free-text analysis of the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

impl ImageAnalysis {
    /// True when the classifier judged the image authentic.
    pub fn is_real(&self) -> bool {
        self.prediction == "REAL"
    }
}

/// Response of the article-summary endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Topic the summary was generated for.
    #[serde(default)]
    pub topic: String,
    /// The trusted summary text.
    pub summary: String,
    /// Sources the summary cites.
    #[serde(default)]
    pub citations: Vec<Citation>,
}

/// One cited source in an article summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Publisher or feed name.
    #[serde(default)]
    pub source_name: String,
    /// Cited article title.
    #[serde(default)]
    pub title: String,
    /// Link to the cited source.
    #[serde(default)]
    pub url: String,
}
