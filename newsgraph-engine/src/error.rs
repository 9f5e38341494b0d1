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

//! Engine error types

use thiserror::Error;

use newsgraph_client::BackendError;

/// Result alias for exploration operations.
pub type ExploreResult<T> = Result<T, ExploreError>;

/// Why an exploration step did not produce a result.
#[derive(Debug, Error)]
pub enum ExploreError {
    /// The backend request behind the step failed.
    #[error("backend request failed: {0}")]
    Backend(#[from] BackendError),

    /// Extraction succeeded but returned a graph with no entities.
    #[error("extraction returned no entities")]
    EmptyGraph,

    /// The step was superseded by a newer selection before its result
    /// arrived; the result was discarded.
    #[error("superseded by a newer selection")]
    Stale,
}
