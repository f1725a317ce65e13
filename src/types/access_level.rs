//! The platform's ordinal permission scale.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::MockError;

/// Access level of a membership row. Higher is more privileged.
///
/// Serialized as the platform's integer value (`"access_level": 30`), displayed
/// and parsed by snake_case name (`developer`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(into = "u8", try_from = "u8")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum AccessLevel {
    NoPermissions = 0,
    MinimalAccess = 5,
    Guest = 10,
    Reporter = 20,
    Developer = 30,
    Maintainer = 40,
    Owner = 50,
}

impl AccessLevel {
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl From<AccessLevel> for u8 {
    fn from(level: AccessLevel) -> Self {
        level.value()
    }
}

impl TryFrom<u8> for AccessLevel {
    type Error = MockError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NoPermissions),
            5 => Ok(Self::MinimalAccess),
            10 => Ok(Self::Guest),
            20 => Ok(Self::Reporter),
            30 => Ok(Self::Developer),
            40 => Ok(Self::Maintainer),
            50 => Ok(Self::Owner),
            other => Err(MockError::InvalidAccessLevel(other.to_string())),
        }
    }
}
