//! Membership rows for groups and projects.
//!
//! Both kinds carry the member's user identity flattened next to the access
//! level, which is the shape the platform returns from its members endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::access_level::AccessLevel;
use super::id::UserId;
use super::user::User;

/// A direct membership row on a group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct GroupMember {
    #[serde(flatten)]
    pub user: User,
    #[schema(value_type = u8)]
    pub access_level: AccessLevel,
}

impl GroupMember {
    pub fn new(user: &User, access_level: AccessLevel) -> Self {
        GroupMember {
            user: user.clone(),
            access_level,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user.id
    }

    /// Raise the access level to `candidate` if it is higher. Never lowers.
    pub fn raise_to(&mut self, candidate: AccessLevel) {
        self.access_level = self.access_level.max(candidate);
    }
}

/// A membership row on a project, either direct or synthesized by resolution.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct ProjectMember {
    #[serde(flatten)]
    pub user: User,
    #[schema(value_type = u8)]
    pub access_level: AccessLevel,
}

impl ProjectMember {
    pub fn new(user: &User, access_level: AccessLevel) -> Self {
        ProjectMember {
            user: user.clone(),
            access_level,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user.id
    }

    /// Raise the access level to `candidate` if it is higher. Never lowers.
    pub fn raise_to(&mut self, candidate: AccessLevel) {
        self.access_level = self.access_level.max(candidate);
    }
}

impl From<&GroupMember> for ProjectMember {
    fn from(member: &GroupMember) -> Self {
        ProjectMember {
            user: member.user.clone(),
            access_level: member.access_level,
        }
    }
}
