//! Public directory endpoints.
//!
//! These describe what the mock offers and require no credentials.

use axum::Json;
use serde_json::{json, Value};

use crate::envelope::Envelope;

/// `GET /` - top-level directory of the API.
pub async fn root() -> Json<Envelope<Value>> {
    Json(Envelope::success(json!({
        "/demo": "demonstration endpoint",
    })))
}

/// `GET /demo` - directory of the demo API families.
pub async fn demo() -> Json<Envelope<Value>> {
    Json(Envelope::success(json!({
        "/patients": "Patient information and interaction API",
        "/users": "User management and control API",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_lists_demo_endpoint() {
        let Json(envelope) = root().await;

        assert!(envelope.is_success());
        let data = envelope.data.unwrap();
        assert_eq!(data["/demo"], "demonstration endpoint");
    }

    #[tokio::test]
    async fn test_demo_lists_api_families() {
        let Json(envelope) = demo().await;

        assert!(envelope.is_success());
        let data = envelope.data.unwrap();
        assert_eq!(data["/patients"], "Patient information and interaction API");
        assert_eq!(data["/users"], "User management and control API");
    }
}
