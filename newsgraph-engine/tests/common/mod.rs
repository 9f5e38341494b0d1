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

//! Scripted backend double
//!
//! A [`NewsBackend`] whose responses are scripted per request key:
//! graphs and summaries by article title, details by label, chat by
//! question, image checks by URL. A response can also be gated behind a
//! oneshot channel, letting tests decide exactly when each request
//! lands; that is how the latest-wins races are driven.

#![allow(dead_code)]

use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;
use tokio::sync::oneshot;

use newsgraph_client::{
    ArticleSummary, BackendError, BackendResult, GraphResponse, ImageAnalysis, NewsBackend,
    NodeDetail,
};
use newsgraph_core::{ArticleRef, ExtractionData};

enum Scripted<T> {
    Ready(BackendResult<T>),
    Gated(oneshot::Receiver<BackendResult<T>>),
}

type ScriptMap<T> = Mutex<HashMap<String, VecDeque<Scripted<T>>>>;

pub struct StubBackend {
    graphs: ScriptMap<GraphResponse>,
    summaries: ScriptMap<ArticleSummary>,
    details: ScriptMap<NodeDetail>,
    chats: ScriptMap<String>,
    images: ScriptMap<ImageAnalysis>,
    pub graph_calls: AtomicUsize,
    pub summary_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub chat_calls: AtomicUsize,
    pub image_calls: AtomicUsize,
}

fn push<T>(map: &ScriptMap<T>, key: &str, scripted: Scripted<T>) {
    map.lock()
        .entry(key.to_string())
        .or_default()
        .push_back(scripted);
}

fn pop<T>(map: &ScriptMap<T>, key: &str) -> Option<Scripted<T>> {
    map.lock().get_mut(key).and_then(|queue| queue.pop_front())
}

async fn resolve<T>(scripted: Option<Scripted<T>>, fallback: impl FnOnce() -> T) -> BackendResult<T> {
    match scripted {
        Some(Scripted::Ready(result)) => result,
        Some(Scripted::Gated(rx)) => rx
            .await
            .unwrap_or_else(|_| Err(BackendError::Transport("gate dropped".into()))),
        None => Ok(fallback()),
    }
}

impl StubBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            graphs: Mutex::new(HashMap::new()),
            summaries: Mutex::new(HashMap::new()),
            details: Mutex::new(HashMap::new()),
            chats: Mutex::new(HashMap::new()),
            images: Mutex::new(HashMap::new()),
            graph_calls: AtomicUsize::new(0),
            summary_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            chat_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
        })
    }

    pub fn script_graph(&self, title: &str, result: BackendResult<GraphResponse>) {
        push(&self.graphs, title, Scripted::Ready(result));
    }

    pub fn gate_graph(&self, title: &str) -> oneshot::Sender<BackendResult<GraphResponse>> {
        let (tx, rx) = oneshot::channel();
        push(&self.graphs, title, Scripted::Gated(rx));
        tx
    }

    pub fn script_summary(&self, title: &str, result: BackendResult<ArticleSummary>) {
        push(&self.summaries, title, Scripted::Ready(result));
    }

    pub fn gate_summary(&self, title: &str) -> oneshot::Sender<BackendResult<ArticleSummary>> {
        let (tx, rx) = oneshot::channel();
        push(&self.summaries, title, Scripted::Gated(rx));
        tx
    }

    pub fn script_detail(&self, label: &str, result: BackendResult<NodeDetail>) {
        push(&self.details, label, Scripted::Ready(result));
    }

    pub fn gate_detail(&self, label: &str) -> oneshot::Sender<BackendResult<NodeDetail>> {
        let (tx, rx) = oneshot::channel();
        push(&self.details, label, Scripted::Gated(rx));
        tx
    }

    pub fn script_chat(&self, question: &str, result: BackendResult<String>) {
        push(&self.chats, question, Scripted::Ready(result));
    }

    pub fn gate_chat(&self, question: &str) -> oneshot::Sender<BackendResult<String>> {
        let (tx, rx) = oneshot::channel();
        push(&self.chats, question, Scripted::Gated(rx));
        tx
    }

    pub fn script_image(&self, url: &str, result: BackendResult<ImageAnalysis>) {
        push(&self.images, url, Scripted::Ready(result));
    }

    pub fn gate_image(&self, url: &str) -> oneshot::Sender<BackendResult<ImageAnalysis>> {
        let (tx, rx) = oneshot::channel();
        push(&self.images, url, Scripted::Gated(rx));
        tx
    }
}

#[async_trait]
impl NewsBackend for StubBackend {
    async fn knowledge_graph(&self, article: &ArticleRef) -> BackendResult<GraphResponse> {
        self.graph_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = pop(&self.graphs, &article.title);
        let title = article.title.clone();
        resolve(scripted, || graph_fixture(&title)).await
    }

    async fn node_details(
        &self,
        label: &str,
        _extraction: &ExtractionData,
    ) -> BackendResult<NodeDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = pop(&self.details, label);
        let label = label.to_string();
        resolve(scripted, || NodeDetail {
            name: label,
            kind: "ORG".into(),
            ..Default::default()
        })
        .await
    }

    async fn chat_answer(
        &self,
        question: &str,
        _extraction: &ExtractionData,
        _article_title: &str,
    ) -> BackendResult<String> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = pop(&self.chats, question);
        let question = question.to_string();
        resolve(scripted, || format!("Answer to: {question}")).await
    }

    async fn image_check(
        &self,
        image_url: &str,
        _extraction: &ExtractionData,
    ) -> BackendResult<ImageAnalysis> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = pop(&self.images, image_url);
        resolve(scripted, || ImageAnalysis {
            prediction: "REAL".into(),
            confidence: 0.9,
            real_probability: 0.9,
            fake_probability: 0.1,
            raw_score: 1.5,
            analysis: None,
        })
        .await
    }

    async fn article_summary(&self, article: &ArticleRef) -> BackendResult<ArticleSummary> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = pop(&self.summaries, &article.title);
        let title = article.title.clone();
        resolve(scripted, || ArticleSummary {
            topic: title.clone(),
            summary: format!("Trusted summary of {title}"),
            citations: Vec::new(),
        })
        .await
    }
}

/// Two-node graph response used as the default extraction result.
pub fn graph_fixture(topic: &str) -> GraphResponse {
    serde_json::from_value(json!({
        "topic": topic,
        "nodes": [
            {"id": "main", "label": topic, "type": "main"},
            {"id": "node_1", "label": "NASA", "type": "ORG"},
        ],
        "edges": [
            {"source": "main", "target": "node_1", "label": "mentions"},
        ],
        "extraction_data": {
            "entities": [{"name": "NASA", "type": "ORG"}],
            "relations": [],
        },
    }))
    .unwrap()
}

/// Graph response with no nodes at all.
pub fn empty_graph_fixture(topic: &str) -> GraphResponse {
    serde_json::from_value(json!({
        "topic": topic,
        "nodes": [],
        "edges": [],
        "extraction_data": {"entities": [], "relations": []},
    }))
    .unwrap()
}

/// The Mars/NASA two-node graph with a labeled relation edge.
pub fn mars_graph() -> GraphResponse {
    serde_json::from_value(json!({
        "topic": "Mars mission update",
        "nodes": [
            {"id": "main", "label": "Mars mission update", "type": "main"},
            {"id": "node_1", "label": "NASA", "type": "ORG"},
        ],
        "edges": [
            {"source": "main", "target": "node_1", "label": "studied_by"},
        ],
        "extraction_data": {
            "entities": [
                {"name": "Mars", "type": "LOC"},
                {"name": "NASA", "type": "ORG"},
            ],
            "relations": [
                {"source": "Mars", "target": "NASA", "relationship": "studied_by"},
            ],
        },
    }))
    .unwrap()
}

/// Fully enriched NASA detail panel.
pub fn nasa_detail() -> NodeDetail {
    serde_json::from_value(json!({
        "name": "NASA",
        "type": "ORG",
        "description": "NASA leads the mission",
        "wikipedia_summary": "NASA is an American space agency.",
        "wikipedia_url": "https://en.wikipedia.org/wiki/NASA",
        "related_news": [
            {"title": "Budget vote", "description": "", "link": "https://example.com/vote"},
        ],
        "relationships": [
            {"type": "incoming", "relationship": "studied_by", "source": "Mars"},
        ],
        "relationship_count": 1,
    }))
    .unwrap()
}

/// Image verdict scripted for release through a gate.
pub fn real_verdict() -> ImageAnalysis {
    ImageAnalysis {
        prediction: "REAL".into(),
        confidence: 0.9,
        real_probability: 0.9,
        fake_probability: 0.1,
        raw_score: 1.5,
        analysis: None,
    }
}
