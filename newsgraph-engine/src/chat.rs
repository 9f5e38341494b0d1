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

//! Article chat session
//!
//! Append-only transcript of a conversation grounded in one article's
//! extraction payload. A session answers one question at a time: while a
//! reply is pending, further sends are rejected rather than queued, and
//! a failed request appends an apology instead of losing the turn.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, warn};

use newsgraph_client::NewsBackend;
use newsgraph_core::ExtractionData;

/// Reply appended when the backend cannot answer.
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't process your question. Please try again.";

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The person exploring the article.
    User,
    /// The article-grounded assistant.
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    /// Message author.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// A message from the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// A message from the assistant.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// What happened to a [`ChatSession::send`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The question was sent and a reply (or fallback) appended.
    Sent,
    /// The question was blank after trimming; nothing changed.
    EmptyInput,
    /// A previous question is still awaiting its reply; nothing changed.
    Busy,
}

/// Chat session for one article.
pub struct ChatSession {
    backend: Arc<dyn NewsBackend>,
    extraction: Arc<ExtractionData>,
    article_title: String,
    messages: RwLock<Vec<ChatMessage>>,
    awaiting_reply: AtomicBool,
}

impl ChatSession {
    /// Open a session seeded with the assistant's greeting.
    pub fn new(
        backend: Arc<dyn NewsBackend>,
        extraction: Arc<ExtractionData>,
        article_title: impl Into<String>,
    ) -> Self {
        let article_title = article_title.into();
        let greeting = format!(
            "Hi! I'm your AI assistant for this article. I can answer questions about \
             the entities, relationships, and enriched context from Wikipedia and \
             related news. What would you like to know about \"{article_title}\"?"
        );
        Self {
            backend,
            extraction,
            article_title,
            messages: RwLock::new(vec![ChatMessage::assistant(greeting)]),
            awaiting_reply: AtomicBool::new(false),
        }
    }

    /// Ask the assistant a question.
    ///
    /// Whitespace-only input and sends made while a reply is pending are
    /// rejected without touching the transcript. Otherwise the question
    /// is appended immediately and exactly one assistant message follows
    /// it, [`FALLBACK_ANSWER`] when the backend fails. The pending flag
    /// is cleared on every exit path.
    pub async fn send(&self, question: &str) -> SendOutcome {
        let question = question.trim();
        if question.is_empty() {
            return SendOutcome::EmptyInput;
        }
        if self.awaiting_reply.swap(true, Ordering::SeqCst) {
            debug!("rejecting chat send while a reply is pending");
            return SendOutcome::Busy;
        }

        self.messages.write().push(ChatMessage::user(question));

        let reply = match self
            .backend
            .chat_answer(question, &self.extraction, &self.article_title)
            .await
        {
            Ok(answer) => answer,
            Err(err) => {
                warn!(error = %err, "chat request failed");
                FALLBACK_ANSWER.to_string()
            }
        };

        self.messages.write().push(ChatMessage::assistant(reply));
        self.awaiting_reply.store(false, Ordering::SeqCst);
        SendOutcome::Sent
    }

    /// True while a reply is pending.
    pub fn is_typing(&self) -> bool {
        self.awaiting_reply.load(Ordering::SeqCst)
    }

    /// Snapshot of the transcript, greeting first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.read().clone()
    }

    /// Title of the article this session is grounded in.
    pub fn article_title(&self) -> &str {
        &self.article_title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use newsgraph_client::{
        ArticleSummary, BackendError, BackendResult, GraphResponse, ImageAnalysis, NodeDetail,
    };
    use newsgraph_core::ArticleRef;

    /// Chat stub: answers echo the question, optionally failing or
    /// blocking until released.
    struct StubChat {
        fail: bool,
        gate: Option<Notify>,
    }

    impl StubChat {
        fn answering() -> Arc<Self> {
            Arc::new(Self {
                fail: false,
                gate: None,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                fail: true,
                gate: None,
            })
        }

        fn gated() -> Arc<Self> {
            Arc::new(Self {
                fail: false,
                gate: Some(Notify::new()),
            })
        }
    }

    #[async_trait]
    impl NewsBackend for StubChat {
        async fn knowledge_graph(&self, _: &ArticleRef) -> BackendResult<GraphResponse> {
            unimplemented!("not used by chat tests")
        }

        async fn node_details(&self, _: &str, _: &ExtractionData) -> BackendResult<NodeDetail> {
            unimplemented!("not used by chat tests")
        }

        async fn chat_answer(
            &self,
            question: &str,
            _: &ExtractionData,
            _: &str,
        ) -> BackendResult<String> {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail {
                Err(BackendError::Status { code: 500 })
            } else {
                Ok(format!("You asked: {question}"))
            }
        }

        async fn image_check(&self, _: &str, _: &ExtractionData) -> BackendResult<ImageAnalysis> {
            unimplemented!("not used by chat tests")
        }

        async fn article_summary(&self, _: &ArticleRef) -> BackendResult<ArticleSummary> {
            unimplemented!("not used by chat tests")
        }
    }

    fn session(backend: Arc<StubChat>) -> ChatSession {
        ChatSession::new(backend, Arc::new(ExtractionData::default()), "Mars rover finds ice")
    }

    #[tokio::test]
    async fn test_greeting_names_the_article() {
        let session = session(StubChat::answering());
        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, ChatRole::Assistant);
        assert!(messages[0].content.contains("\"Mars rover finds ice\""));
    }

    #[tokio::test]
    async fn test_send_appends_question_then_answer() {
        let session = session(StubChat::answering());
        let outcome = session.send("Who studies Mars?").await;
        assert_eq!(outcome, SendOutcome::Sent);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1], ChatMessage::user("Who studies Mars?"));
        assert_eq!(
            messages[2],
            ChatMessage::assistant("You asked: Who studies Mars?"),
        );
        assert!(!session.is_typing());
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected() {
        let session = session(StubChat::answering());
        assert_eq!(session.send("   ").await, SendOutcome::EmptyInput);
        assert_eq!(session.send("").await, SendOutcome::EmptyInput);
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_input_is_trimmed_before_sending() {
        let session = session(StubChat::answering());
        session.send("  Who studies Mars?  ").await;
        assert_eq!(session.messages()[1].content, "Who studies Mars?");
    }

    #[tokio::test]
    async fn test_backend_failure_appends_fallback() {
        let session = session(StubChat::failing());
        let outcome = session.send("Who studies Mars?").await;
        assert_eq!(outcome, SendOutcome::Sent);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].content, FALLBACK_ANSWER);
        // The session accepts new questions after a failure.
        assert!(!session.is_typing());
        assert_eq!(session.send("Again?").await, SendOutcome::Sent);
    }

    #[tokio::test]
    async fn test_send_while_pending_is_rejected() {
        let backend = StubChat::gated();
        let session = Arc::new(session(Arc::clone(&backend)));

        let pending = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.send("First question").await })
        };
        // Let the first send reach the gated backend call.
        tokio::task::yield_now().await;
        assert!(session.is_typing());

        assert_eq!(session.send("Second question").await, SendOutcome::Busy);

        backend.gate.as_ref().unwrap().notify_one();
        assert_eq!(pending.await.unwrap(), SendOutcome::Sent);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content, "First question");
        assert!(!messages.iter().any(|m| m.content == "Second question"));
    }
}
