//! Response envelope shared by every endpoint.
//!
//! Each HTTP and WebSocket reply is wrapped in the same structure so the
//! portal UI can branch on `status` alone. Successful replies carry the
//! payload in `data`; failed replies carry `data: null` plus a
//! human-readable `message`.

use serde::{Deserialize, Serialize};

/// Outcome marker on every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Fail,
}

/// The uniform reply wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: ApiStatus,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Wrap a payload in a success envelope. No `message` key is emitted.
    pub fn success(data: T) -> Self {
        Self {
            status: ApiStatus::Success,
            data: Some(data),
            message: None,
        }
    }

    /// Build a failure envelope with `data: null` and the given message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Fail,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }
}
