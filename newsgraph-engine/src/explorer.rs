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

//! Exploration orchestrator
//!
//! Owns everything the explorer shows for the currently selected
//! article: graph canvas, trusted summary, image-check verdict, node
//! detail panel, and chat session. Selecting an article starts the graph
//! and summary requests concurrently and stamps them with a generation
//! number; a response only commits if its article is still the selected
//! one, so flipping quickly through a feed can never interleave surfaces
//! from different articles.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use newsgraph_client::NewsBackend;
use newsgraph_core::{ArticleRef, ExtractionData, GraphModel};

use crate::chat::ChatSession;
use crate::detail::DetailController;
use crate::error::ExploreError;
use crate::state::{GraphState, ImageCheckState, SummaryState};

/// Image-check refusal when the article has no lead image.
pub const MISSING_IMAGE_MESSAGE: &str = "No image available for this article";
/// Image-check refusal when extraction has not completed.
pub const GRAPH_REQUIRED_MESSAGE: &str = "Please generate the knowledge graph first";

/// Everything tied to one selected article. Replaced wholesale on every
/// selection, under a single lock, so readers never observe surfaces
/// from two different articles.
struct ExplorationSession {
    article: Option<ArticleRef>,
    graph: GraphState,
    summary: SummaryState,
    image_check: ImageCheckState,
    detail: Option<Arc<DetailController>>,
    chat: Option<Arc<ChatSession>>,
}

impl ExplorationSession {
    fn idle() -> Self {
        Self {
            article: None,
            graph: GraphState::Idle,
            summary: SummaryState::Idle,
            image_check: ImageCheckState::Idle,
            detail: None,
            chat: None,
        }
    }

    fn loading(article: ArticleRef) -> Self {
        Self {
            article: Some(article),
            graph: GraphState::Loading,
            summary: SummaryState::Loading,
            image_check: ImageCheckState::Idle,
            detail: None,
            chat: None,
        }
    }
}

/// Top-level controller for exploring one article at a time.
pub struct ArticleExplorer {
    backend: Arc<dyn NewsBackend>,
    generation: AtomicU64,
    session: RwLock<ExplorationSession>,
}

impl ArticleExplorer {
    /// New explorer with nothing selected.
    pub fn new(backend: Arc<dyn NewsBackend>) -> Self {
        Self {
            backend,
            generation: AtomicU64::new(0),
            session: RwLock::new(ExplorationSession::idle()),
        }
    }

    /// Switch the explorer to `article`.
    ///
    /// Synchronously resets every surface (graph and summary to loading,
    /// the rest cleared) and bumps the generation, invalidating all
    /// in-flight work for the previous article. The graph and summary
    /// requests then run concurrently; the returned handle completes
    /// when both have settled.
    pub fn select_article(self: &Arc<Self>, article: ArticleRef) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(title = %article.title, generation, "selecting article");
        *self.session.write() = ExplorationSession::loading(article.clone());

        let this = Arc::clone(self);
        tokio::spawn(async move {
            tokio::join!(
                this.load_graph(generation, &article),
                this.load_summary(generation, &article),
            );
        })
    }

    /// Re-run graph extraction for the current article, keeping the
    /// current generation. No-op when nothing is selected.
    pub fn retry_graph(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let generation = self.generation.load(Ordering::SeqCst);
        let article = {
            let mut session = self.session.write();
            let article = session.article.clone()?;
            session.graph = GraphState::Loading;
            article
        };
        let this = Arc::clone(self);
        Some(tokio::spawn(async move {
            this.load_graph(generation, &article).await;
        }))
    }

    /// Re-run the trusted summary for the current article.
    pub fn retry_summary(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let generation = self.generation.load(Ordering::SeqCst);
        let article = {
            let mut session = self.session.write();
            let article = session.article.clone()?;
            session.summary = SummaryState::Loading;
            article
        };
        let this = Arc::clone(self);
        Some(tokio::spawn(async move {
            this.load_summary(generation, &article).await;
        }))
    }

    /// Run image forensics on the current article's lead image.
    ///
    /// Refused synchronously (with the reason recorded in the
    /// image-check state) when the article has no image or the graph is
    /// not ready yet; the verdict would be meaningless without the
    /// extracted entities to cross-check.
    pub fn run_image_check(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let generation = self.generation.load(Ordering::SeqCst);
        let (image_url, model) = {
            let mut session = self.session.write();
            let article = session.article.clone()?;
            let Some(image_url) = article.image else {
                session.image_check = ImageCheckState::Failed(MISSING_IMAGE_MESSAGE.to_string());
                return None;
            };
            let model = match &session.graph {
                GraphState::Ready(model) => Arc::clone(model),
                _ => {
                    session.image_check =
                        ImageCheckState::Failed(GRAPH_REQUIRED_MESSAGE.to_string());
                    return None;
                }
            };
            session.image_check = ImageCheckState::Running;
            (image_url, model)
        };

        let this = Arc::clone(self);
        Some(tokio::spawn(async move {
            let result = this.backend.image_check(&image_url, &model.extraction).await;
            let mut session = this.session.write();
            if this.generation.load(Ordering::SeqCst) != generation {
                debug!("discarding image verdict for a superseded article");
                return;
            }
            session.image_check = match result {
                Ok(analysis) => {
                    info!(prediction = %analysis.prediction, "image check complete");
                    ImageCheckState::Done(analysis)
                }
                Err(err) => {
                    warn!(error = %err, "image check failed");
                    ImageCheckState::Failed(err.to_string())
                }
            };
        }))
    }

    /// The currently selected article.
    pub fn article(&self) -> Option<ArticleRef> {
        self.session.read().article.clone()
    }

    /// Current graph canvas state.
    pub fn graph_state(&self) -> GraphState {
        self.session.read().graph.clone()
    }

    /// Current summary panel state.
    pub fn summary_state(&self) -> SummaryState {
        self.session.read().summary.clone()
    }

    /// Current image-check state.
    pub fn image_check_state(&self) -> ImageCheckState {
        self.session.read().image_check.clone()
    }

    /// Detail controller for the current article, once the graph has
    /// settled.
    pub fn detail(&self) -> Option<Arc<DetailController>> {
        self.session.read().detail.clone()
    }

    /// Chat session for the current article, once the graph has settled.
    pub fn chat(&self) -> Option<Arc<ChatSession>> {
        self.session.read().chat.clone()
    }

    async fn load_graph(&self, generation: u64, article: &ArticleRef) {
        let outcome = match self.backend.knowledge_graph(article).await {
            Ok(response) => {
                let model = response.into_model();
                if model.is_empty() {
                    Err(ExploreError::EmptyGraph)
                } else {
                    Ok(model)
                }
            }
            Err(err) => Err(ExploreError::Backend(err)),
        };

        let mut session = self.session.write();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(title = %article.title, "discarding graph for a superseded article");
            return;
        }
        match outcome {
            Ok(model) => {
                info!(
                    title = %article.title,
                    entities = model.entities.len(),
                    relations = model.relations.len(),
                    "knowledge graph ready"
                );
                let model = Arc::new(model);
                let extraction = Arc::new(model.extraction.clone());
                session.detail = Some(Arc::new(DetailController::new(
                    Arc::clone(&self.backend),
                    Arc::clone(&extraction),
                )));
                session.chat = Some(Arc::new(ChatSession::new(
                    Arc::clone(&self.backend),
                    extraction,
                    &article.title,
                )));
                session.graph = GraphState::Ready(model);
            }
            Err(err) => {
                warn!(title = %article.title, error = %err, "knowledge graph failed, using fallback");
                // Keep existing panels on a failed retry; a degraded
                // session the user already typed into survives.
                if session.detail.is_none() {
                    let extraction = Arc::new(ExtractionData::default());
                    session.detail = Some(Arc::new(DetailController::new(
                        Arc::clone(&self.backend),
                        Arc::clone(&extraction),
                    )));
                    session.chat = Some(Arc::new(ChatSession::new(
                        Arc::clone(&self.backend),
                        extraction,
                        &article.title,
                    )));
                }
                session.graph = GraphState::Degraded {
                    model: Arc::new(GraphModel::fallback(&article.title)),
                    reason: err.to_string(),
                };
            }
        }
    }

    async fn load_summary(&self, generation: u64, article: &ArticleRef) {
        let result = self.backend.article_summary(article).await;

        let mut session = self.session.write();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(title = %article.title, "discarding summary for a superseded article");
            return;
        }
        session.summary = match result {
            Ok(summary) => SummaryState::Ready(summary),
            Err(err) => {
                warn!(title = %article.title, error = %err, "article summary failed");
                SummaryState::Failed(err.to_string())
            }
        };
    }
}
