//! Roster data models.

use serde::{Deserialize, Serialize};

/// Player ID type
pub type PlayerId = i64;

/// A registered chess player.
///
/// Only `id` participates in pairing and scoring. Everything else is
/// display data carried for reports; format checks (date shape,
/// federation ID pattern) belong to the input layer, not this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable unique identifier, allocated by the store
    pub id: PlayerId,
    /// Player's last name
    pub last_name: String,
    /// Player's first name
    pub first_name: String,
    /// Birth date, YYYY-MM-DD
    pub date_of_birth: String,
    /// National chess federation ID (e.g. "AB12345")
    pub national_id: String,
}

impl Player {
    /// Create a new player record
    pub fn new(
        id: PlayerId,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        date_of_birth: impl Into<String>,
        national_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            date_of_birth: date_of_birth.into(),
            national_id: national_id.into(),
        }
    }

    /// "First Last" display form
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
