//! Patient endpoints: identity lookup and the message inbox.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::auth::require_credential;
use crate::envelope::Envelope;
use crate::error::{ApiError, ApiResult};
use crate::models::{BasicIdentity, MessageBox};
use crate::server::MockState;

/// `GET /demo/patients/:patient_id/basicId`
///
/// Guards run in order: credential, policy, lookup. The id match is exact,
/// so a differently-cased id is unknown.
pub async fn basic_identity(
    State(state): State<MockState>,
    Path(patient_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Json<Envelope<BasicIdentity>>> {
    let subject = require_credential(&headers)?;
    let resource = format!("basic identity for patient {}", patient_id);
    if !state.policy.allows(&subject, &resource) {
        return Err(ApiError::AccessDenied { resource });
    }

    let identity = state
        .fixtures
        .basic_identity(&patient_id)
        .ok_or_else(|| ApiError::UnknownPatient(patient_id.clone()))?;

    Ok(Json(Envelope::success(identity)))
}

/// `GET /demo/patients/:patient_id/messages`
///
/// Returns the whole inbox regardless of the id in the path; the mock
/// carries one shared message box.
pub async fn messages(
    State(state): State<MockState>,
    Path(patient_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Json<Envelope<MessageBox>>> {
    let subject = require_credential(&headers)?;
    let resource = format!("messages for patient {}", patient_id);
    if !state.policy.allows(&subject, &resource) {
        return Err(ApiError::AccessDenied { resource });
    }

    Ok(Json(Envelope::success(state.fixtures.message_box())))
}
