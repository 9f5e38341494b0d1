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

//! Article reference
//!
//! The slice of a news article the exploration engine actually needs:
//! enough text to seed extraction and summarization, plus the lead image
//! for the forensics check.

use serde::{Deserialize, Serialize};

/// Reference to one news article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRef {
    /// Caller-assigned identifier.
    pub id: String,
    /// Headline; doubles as the graph topic.
    pub title: String,
    /// Short description or teaser paragraph.
    #[serde(default)]
    pub description: String,
    /// Full article body, when available.
    #[serde(default)]
    pub content: String,
    /// Canonical URL of the article.
    #[serde(default)]
    pub url: String,
    /// Lead image URL, if the article has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Publisher or feed name.
    #[serde(default)]
    pub source: String,
}

impl ArticleRef {
    /// Create a reference with just an id and title; fill the rest with
    /// the `with_*` builders.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the article body.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the canonical URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the lead image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the publisher name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}
