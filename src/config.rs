//! Store configuration.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::error::MockError;

/// What to do when a membership row is added for a user who already has one
/// on the same group or project.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DuplicateMembers {
    /// Append a second row. Direct listings then show the user twice;
    /// inherited resolution still collapses them to one row.
    #[default]
    Append,
    /// Leave the existing row untouched and drop the new one.
    KeepExisting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub duplicate_members: DuplicateMembers,
}

impl StoreConfig {
    pub fn from_json(text: &str) -> Result<Self, MockError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_duplicate_members(mut self, policy: DuplicateMembers) -> Self {
        self.duplicate_members = policy;
        self
    }
}
