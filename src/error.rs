//! API error taxonomy.
//!
//! Every guard failure maps to one variant here; the `IntoResponse` impl
//! turns a variant into the matching status code plus a fail envelope,
//! so handlers can bail out with `?` and never build error bodies inline.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::envelope::Envelope;

/// Errors surfaced to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No usable `authorization` header on a protected route.
    #[error("authorization header is required to access a protected endpoint, provide a valid token and reattempt your request")]
    MissingAuthorization,

    /// The access policy rejected the caller.
    #[error("user is not authorized to access {resource}")]
    AccessDenied { resource: String },

    /// The requested patient is not part of the fixture data.
    #[error("patientId {0} is not available in the mock")]
    UnknownPatient(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingAuthorization => StatusCode::UNAUTHORIZED,
            Self::AccessDenied { .. } => StatusCode::FORBIDDEN,
            Self::UnknownPatient(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body: Envelope<()> = Envelope::fail(self.to_string());
        (status, Json(body)).into_response()
    }
}

/// Handler result alias; errors render through [`ApiError::into_response`].
pub type ApiResult<T> = Result<T, ApiError>;
