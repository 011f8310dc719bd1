//! Credential guard and access policy.
//!
//! The mock does not validate tokens. A protected route only requires that
//! *some* non-empty `authorization` header is present; whatever value it
//! carries becomes the subject handed to the [`AccessPolicy`]. The policy
//! decides per resource whether that subject may proceed, which lets tests
//! exercise denial paths without real token plumbing.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use crate::error::ApiError;

/// Extract the caller's credential from the `authorization` header.
///
/// Missing, empty, and non-UTF-8 header values are all treated as absent.
pub fn require_credential(headers: &HeaderMap) -> Result<String, ApiError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .ok_or(ApiError::MissingAuthorization)
}

/// Decides whether a credentialed subject may access a resource.
pub trait AccessPolicy: Send + Sync {
    fn allows(&self, subject: &str, resource: &str) -> bool;
}

/// Policy that admits every credentialed caller. The mock's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn allows(&self, _subject: &str, _resource: &str) -> bool {
        true
    }
}

/// Adapter so a closure can serve as a policy, mainly in tests.
pub struct PolicyFn<F>(pub F);

impl<F> AccessPolicy for PolicyFn<F>
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn allows(&self, subject: &str, resource: &str) -> bool {
        (self.0)(subject, resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_missing_header_is_rejected() {
        let headers = HeaderMap::new();
        assert_eq!(
            require_credential(&headers),
            Err(ApiError::MissingAuthorization)
        );
    }

    #[test]
    fn test_empty_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(""));
        assert_eq!(
            require_credential(&headers),
            Err(ApiError::MissingAuthorization)
        );
    }

    #[test]
    fn test_any_non_empty_value_is_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer whatever"));
        assert_eq!(
            require_credential(&headers),
            Ok("Bearer whatever".to_string())
        );
    }

    #[test]
    fn test_non_utf8_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_bytes(b"\xfe\xff").unwrap());
        assert_eq!(
            require_credential(&headers),
            Err(ApiError::MissingAuthorization)
        );
    }

    #[test]
    fn test_allow_all_admits_everyone() {
        assert!(AllowAll.allows("anyone", "anything"));
    }

    #[test]
    fn test_policy_fn_wraps_closure() {
        let policy = PolicyFn(|subject: &str, _resource: &str| subject == "admin");
        assert!(policy.allows("admin", "messages"));
        assert!(!policy.allows("guest", "messages"));
    }
}
