use serde::{Deserialize, Serialize};

/// A stored client record.
///
/// Field values are trusted: every record reaches the store through
/// [`crate::services::client::save_client`], which validates shape and
/// uniqueness first.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Candidate client supplied by the caller of `save`.
///
/// The id is taken as given, never derived from content. Fields are raw and
/// unvalidated; the service layer applies the shape rules before persisting.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl NewClient {
    #[must_use]
    pub fn new(id: i64, first_name: String, last_name: String, email: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
        }
    }
}
