//! Wire-format data models.
//!
//! Field names serialize in camelCase to match what the portal UI reads.
//! Optional fields stay in the output as explicit `null` rather than being
//! dropped, so client code can rely on a stable shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal identity card for a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicIdentity {
    pub picture: Option<String>,
    pub given_name: String,
    pub family_name: String,
    pub preferred_username: Option<String>,
}

/// One secure message in a patient's inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub conversation_id: String,
    pub subject: String,
    pub from: String,
    pub at: DateTime<Utc>,
    pub body: String,
    pub is_read: bool,
}

/// The full inbox payload returned by the messages endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBox {
    pub messages: Vec<Message>,
}

/// Which providers a user may act for, per patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRecord {
    pub provider: Option<String>,
    pub patients: Vec<PatientGrant>,
}

/// Providers granted access to one patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientGrant {
    pub patient_id: String,
    pub providers: Vec<ProviderRef>,
}

/// Reference to a provider by its composite id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRef {
    pub provider_id: String,
}
