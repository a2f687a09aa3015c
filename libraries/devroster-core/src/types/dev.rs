/// Developer record
use super::Gender;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Developer key; 0 marks a record that has not been stored yet
pub type DevId = i64;

/// A developer as submitted through the forms and kept by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dev {
    /// Key assigned by the store (0 until persisted)
    pub id: DevId,

    /// Display name
    pub name: String,

    /// Years of experience
    pub career: u32,

    /// Contact address
    pub email: String,

    /// Optional gender
    pub gender: Option<Gender>,

    /// Languages in submission order
    pub languages: Vec<String>,

    /// Construction instant
    pub created_at: DateTime<Utc>,
}

impl Dev {
    /// Create an unsaved record stamped with the current instant
    pub fn new(
        name: impl Into<String>,
        career: u32,
        email: impl Into<String>,
        gender: Option<Gender>,
        languages: Vec<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            career,
            email: email.into(),
            gender,
            languages,
            created_at: Utc::now(),
        }
    }

    /// True until the store has assigned a key
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

impl Default for Dev {
    fn default() -> Self {
        Self::new(String::new(), 0, String::new(), None, Vec::new())
    }
}
