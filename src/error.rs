use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};
use thiserror::Error;

use crate::types::{GroupId, ProjectId, UserId};

/// Which unique user attribute collided on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    Username,
    Email,
}

/// Coarse classification for the boundary adapter's status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// 404
    NotFound,
    /// 409
    Conflict,
    /// 400
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MockError {
    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("group {0} not found")]
    GroupNotFound(GroupId),

    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error("user {user_id} is not a member of project {project_id}")]
    MemberNotFound {
        project_id: ProjectId,
        user_id: UserId,
    },

    #[error("user with that {field} already exists: {value}")]
    DuplicateUser { field: UserField, value: String },

    #[error("invalid access level: {0}")]
    InvalidAccessLevel(String),

    #[error("invalid store configuration: {0}")]
    InvalidConfig(String),
}

impl MockError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MockError::ProjectNotFound(_)
            | MockError::GroupNotFound(_)
            | MockError::UserNotFound(_)
            | MockError::MemberNotFound { .. } => ErrorKind::NotFound,
            MockError::DuplicateUser { .. } => ErrorKind::Conflict,
            MockError::InvalidAccessLevel(_) | MockError::InvalidConfig(_) => ErrorKind::Invalid,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl From<serde_json::Error> for MockError {
    fn from(err: serde_json::Error) -> Self {
        MockError::InvalidConfig(err.to_string())
    }
}
