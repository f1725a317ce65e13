//! Typed numeric identifiers for users, groups and projects.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// Marker type for Users
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UserMarker {}

/// Marker type for Groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupMarker {}

/// Marker type for Projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProjectMarker {}

/// A numeric entity id, with zero runtime cost over a bare `u64`.
///
/// On the wire this is just the integer. Zero is never assigned by a store and
/// is read as "no parent" wherever a parent id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    value: u64,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub const fn new(value: u64) -> Self {
        Id {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the raw integer.
    pub const fn get(&self) -> u64 {
        self.value
    }

    /// True for the zero id, which stands for "absent".
    pub const fn is_unset(&self) -> bool {
        self.value == 0
    }
}

impl<T> From<u64> for Id<T> {
    fn from(value: u64) -> Self {
        Id::new(value)
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.value)
    }
}

/// A User's id.
pub type UserId = Id<UserMarker>;

/// A Group's id.
pub type GroupId = Id<GroupMarker>;

/// A Project's id.
pub type ProjectId = Id<ProjectMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id: UserId = Id::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_serializes_as_integer() {
        let id: GroupId = Id::new(7);
        assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(7));

        let back: GroupId = serde_json::from_value(serde_json::json!(7)).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_zero_is_unset() {
        assert!(GroupId::new(0).is_unset());
        assert!(!GroupId::new(1).is_unset());
    }

    #[test]
    fn test_ids_order_by_value() {
        let mut ids: Vec<ProjectId> = vec![3.into(), 1.into(), 2.into()];
        ids.sort();
        assert_eq!(ids.iter().map(Id::get).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
