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

//! Error types for backend requests

use thiserror::Error;

/// Result alias for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Why a backend request failed.
///
/// Callers generally do not branch on the variant; every failure funnels
/// into the same degraded-state handling. The split exists so logs and
/// user-facing messages can say what actually went wrong.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Could not reach the backend at all.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request ran past the configured deadline.
    #[error("request timed out")]
    Timeout,

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned HTTP {code}")]
    Status {
        /// HTTP status code of the response.
        code: u16,
    },

    /// The response body did not parse as the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout
        } else if err.is_decode() {
            BackendError::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            BackendError::Status {
                code: status.as_u16(),
            }
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(BackendError::Timeout.to_string(), "request timed out");
        assert_eq!(
            BackendError::Status { code: 502 }.to_string(),
            "backend returned HTTP 502",
        );
        assert!(BackendError::Malformed("missing field".into())
            .to_string()
            .contains("missing field"));
    }

    #[test]
    fn test_serde_error_maps_to_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        assert!(matches!(BackendError::from(err), BackendError::Malformed(_)));
    }
}
