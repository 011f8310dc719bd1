//! Fixture data served by the mock.
//!
//! [`FixtureStore`] is the seam between handlers and data: routes only ever
//! ask the store, so swapping the canned demo records for another data set
//! never touches handler code. [`DemoFixtures`] is the built-in set the
//! portal UI develops against.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    AuthorizationRecord, BasicIdentity, Message, MessageBox, PatientGrant, ProviderRef,
};

/// Patient id for the John Doe demo record.
pub const DEMO_PATIENT_JOHN: &str = "39817aa2-505f-4e78-bd67-279f7efc7125";

/// Patient id for the Jane Doe demo record.
pub const DEMO_PATIENT_JANE: &str = "0da9da80-8538-4139-a208-c03d319dbc05";

/// Source of the records the mock serves.
pub trait FixtureStore: Send + Sync {
    /// Look up the identity card for a patient id, if the id is known.
    fn basic_identity(&self, patient_id: &str) -> Option<BasicIdentity>;

    /// The full message inbox. The mock does not filter per patient.
    fn message_box(&self) -> MessageBox;

    /// The full authorization record. The mock does not filter per user.
    fn authorizations(&self) -> AuthorizationRecord;
}

/// The canned demo data set.
#[derive(Debug, Clone)]
pub struct DemoFixtures {
    identities: HashMap<String, BasicIdentity>,
    message_box: MessageBox,
    authorizations: AuthorizationRecord,
}

impl DemoFixtures {
    pub fn new() -> Self {
        let mut identities = HashMap::new();
        identities.insert(
            DEMO_PATIENT_JOHN.to_string(),
            BasicIdentity {
                picture: None,
                given_name: "John".to_string(),
                family_name: "Doe".to_string(),
                preferred_username: None,
            },
        );
        identities.insert(
            DEMO_PATIENT_JANE.to_string(),
            BasicIdentity {
                picture: Some("https://bulma.io/images/placeholders/128x128.png".to_string()),
                given_name: "Jane".to_string(),
                family_name: "Doe".to_string(),
                preferred_username: None,
            },
        );

        let message_box = MessageBox {
            messages: vec![
                Message {
                    conversation_id: format!("{DEMO_PATIENT_JOHN}:d3c0c15f9cb5:aed672:cf8536:1"),
                    subject: "Side Effect?".to_string(),
                    from: "John Doe".to_string(),
                    at: at(2022, 4, 21, 8, 12, 49),
                    body: String::new(),
                    is_read: true,
                },
                Message {
                    conversation_id: format!("{DEMO_PATIENT_JOHN}:d3c0c15f9cb5:aed672:1c357c:2"),
                    subject: "Secure Message".to_string(),
                    from: "Revvit, PhD".to_string(),
                    at: at(2022, 3, 21, 17, 13, 51),
                    body: "Lab results are in everything looks great, let me know if there \
                           any issues, otherwise I will see you at your next appointment."
                        .to_string(),
                    is_read: false,
                },
                Message {
                    conversation_id: format!("{DEMO_PATIENT_JOHN}:d3c0c15f9cb5:aed672:1c357c:1"),
                    subject: "Test results?".to_string(),
                    from: "John Doe".to_string(),
                    at: at(2022, 3, 16, 9, 32, 13),
                    body: "I know these test can take a while but please let me know when \
                           you get the results"
                        .to_string(),
                    is_read: true,
                },
            ],
        };

        let authorizations = AuthorizationRecord {
            provider: None,
            patients: vec![
                PatientGrant {
                    patient_id: DEMO_PATIENT_JOHN.to_string(),
                    providers: vec![ProviderRef {
                        provider_id: "d3c0c15f9cb5:aed672".to_string(),
                    }],
                },
                PatientGrant {
                    patient_id: DEMO_PATIENT_JANE.to_string(),
                    providers: vec![
                        ProviderRef {
                            provider_id: "d3c0c15f9cb5:aed672".to_string(),
                        },
                        ProviderRef {
                            provider_id: "8cf27dad6e5b:405a9c".to_string(),
                        },
                    ],
                },
            ],
        };

        Self {
            identities,
            message_box,
            authorizations,
        }
    }
}

impl Default for DemoFixtures {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureStore for DemoFixtures {
    fn basic_identity(&self, patient_id: &str) -> Option<BasicIdentity> {
        self.identities.get(patient_id).cloned()
    }

    fn message_box(&self) -> MessageBox {
        self.message_box.clone()
    }

    fn authorizations(&self) -> AuthorizationRecord {
        self.authorizations.clone()
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .unwrap()
}
