//! User endpoints: authorization grants.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::auth::require_credential;
use crate::envelope::Envelope;
use crate::error::{ApiError, ApiResult};
use crate::models::AuthorizationRecord;
use crate::server::MockState;

/// `GET /demo/users/:user_id/authorizations`
///
/// Returns the whole grant record regardless of the id in the path; the
/// mock carries one shared record.
pub async fn authorizations(
    State(state): State<MockState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Json<Envelope<AuthorizationRecord>>> {
    let subject = require_credential(&headers)?;
    let resource = format!("authorizations for user {}", user_id);
    if !state.policy.allows(&subject, &resource) {
        return Err(ApiError::AccessDenied { resource });
    }

    Ok(Json(Envelope::success(state.fixtures.authorizations())))
}
