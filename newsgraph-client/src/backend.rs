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

//! Backend access
//!
//! [`NewsBackend`] is the seam between the exploration engine and the
//! extraction service: everything the engine needs from the network goes
//! through this trait, so tests can substitute a scripted double and the
//! engine never sees a URL. [`HttpBackend`] is the production
//! implementation speaking JSON over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use newsgraph_core::{ArticleRef, ExtractedEntity, ExtractedRelation, ExtractionData};

use crate::config::BackendConfig;
use crate::error::{BackendError, BackendResult};
use crate::types::{ArticleSummary, ChatAnswer, GraphResponse, ImageAnalysis, NodeDetail};

/// Operations the extraction backend offers.
#[async_trait]
pub trait NewsBackend: Send + Sync {
    /// Extract the knowledge graph for an article.
    async fn knowledge_graph(&self, article: &ArticleRef) -> BackendResult<GraphResponse>;

    /// Fetch enriched details for one entity, keyed by display label.
    /// The extraction payload from the graph response must be echoed
    /// back so the backend can answer without re-extracting.
    async fn node_details(
        &self,
        label: &str,
        extraction: &ExtractionData,
    ) -> BackendResult<NodeDetail>;

    /// Ask the article-grounded assistant a question.
    async fn chat_answer(
        &self,
        question: &str,
        extraction: &ExtractionData,
        article_title: &str,
    ) -> BackendResult<String>;

    /// Run image forensics on the article's lead image.
    async fn image_check(
        &self,
        image_url: &str,
        extraction: &ExtractionData,
    ) -> BackendResult<ImageAnalysis>;

    /// Generate a trusted summary with citations.
    async fn article_summary(&self, article: &ArticleRef) -> BackendResult<ArticleSummary>;
}

#[derive(Serialize)]
struct GraphRequest<'a> {
    topic: &'a str,
    description: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
struct NodeDetailRequest<'a> {
    node_label: &'a str,
    extraction_data: &'a ExtractionData,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    extraction_data: &'a ExtractionData,
    question: &'a str,
    article_title: &'a str,
}

#[derive(Serialize)]
struct ImageCheckRequest<'a> {
    image_url: &'a str,
    entities: &'a [ExtractedEntity],
    relations: &'a [ExtractedRelation],
}

#[derive(Serialize)]
struct SummaryRequest<'a> {
    topic: &'a str,
    description: &'a str,
    content: &'a str,
}

/// HTTP implementation of [`NewsBackend`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// Build a backend client from a config. Fails only if the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: BackendConfig) -> BackendResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// Backend client for a locally running service.
    pub fn local() -> BackendResult<Self> {
        Self::new(BackendConfig::local())
    }

    /// POST `body` as JSON and parse the JSON response.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> BackendResult<T>
    where
        B: Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!(%url, "sending backend request");
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "backend request failed");
            return Err(BackendError::Status {
                code: status.as_u16(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl NewsBackend for HttpBackend {
    async fn knowledge_graph(&self, article: &ArticleRef) -> BackendResult<GraphResponse> {
        debug!(title = %article.title, "requesting knowledge graph");
        self.post_json(
            "/knowledge-graph",
            &GraphRequest {
                topic: &article.title,
                description: &article.description,
                url: &article.url,
            },
        )
        .await
    }

    async fn node_details(
        &self,
        label: &str,
        extraction: &ExtractionData,
    ) -> BackendResult<NodeDetail> {
        debug!(label, "requesting node details");
        self.post_json(
            "/node-details",
            &NodeDetailRequest {
                node_label: label,
                extraction_data: extraction,
            },
        )
        .await
    }

    async fn chat_answer(
        &self,
        question: &str,
        extraction: &ExtractionData,
        article_title: &str,
    ) -> BackendResult<String> {
        let reply: ChatAnswer = self
            .post_json(
                "/chat",
                &ChatRequest {
                    extraction_data: extraction,
                    question,
                    article_title,
                },
            )
            .await?;
        Ok(reply.answer)
    }

    async fn image_check(
        &self,
        image_url: &str,
        extraction: &ExtractionData,
    ) -> BackendResult<ImageAnalysis> {
        debug!(image_url, "requesting image forensics");
        self.post_json(
            "/detect-fake",
            &ImageCheckRequest {
                image_url,
                entities: &extraction.entities,
                relations: &extraction.relations,
            },
        )
        .await
    }

    async fn article_summary(&self, article: &ArticleRef) -> BackendResult<ArticleSummary> {
        debug!(title = %article.title, "requesting article summary");
        self.post_json(
            "/article-summary",
            &SummaryRequest {
                topic: &article.title,
                description: &article.description,
                content: &article.content,
            },
        )
        .await
    }
}
