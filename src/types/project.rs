//! Projects.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::id::{GroupId, ProjectId};

/// A project. `namespace_id` is the owning group, `None` for a personal project.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Project {
    #[schema(value_type = u64)]
    pub id: ProjectId,
    pub name: String,
    pub path: String,
    #[schema(value_type = Option<u64>)]
    pub namespace_id: Option<GroupId>,
}

impl Project {
    pub fn new<S: AsRef<str>>(id: ProjectId, name: S, namespace_id: Option<GroupId>) -> Self {
        let name = name.as_ref();
        Project {
            id,
            name: name.to_string(),
            path: name.to_string(),
            namespace_id,
        }
    }

    pub fn is_personal(&self) -> bool {
        self.namespace_id.is_none()
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Project {} ({})", self.id, self.path)
    }
}
