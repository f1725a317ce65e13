//! Groups and the projects they own.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::id::GroupId;
use super::project::Project;

/// A group in the group forest. `parent_id` of `None` marks a root group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Group {
    #[schema(value_type = u64)]
    pub id: GroupId,
    pub name: String,
    pub full_name: String,
    pub path: String,
    #[schema(value_type = Option<u64>)]
    pub parent_id: Option<GroupId>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Group {
    /// Create a group. A zero parent id is the same as no parent.
    pub fn new<S: AsRef<str>>(id: GroupId, name: S, parent_id: Option<GroupId>) -> Self {
        let name = name.as_ref();
        Group {
            id,
            name: name.to_string(),
            full_name: name.to_string(),
            path: name.to_string(),
            parent_id: parent_id.filter(|parent| !parent.is_unset()),
            projects: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Group {} ({})", self.id, self.full_name)
    }
}
