//! Wire-ready data model: users, groups, projects and membership rows.
//!
//! Every record serializes to the platform's snake_case JSON shape. Ids and
//! access levels go on the wire as integers, and member rows carry the user
//! identity flattened next to `access_level`.

mod access_level;
mod group;
mod id;
mod member;
mod project;
mod user;

pub use access_level::AccessLevel;
pub use group::Group;
pub use id::{GroupId, GroupMarker, Id, ProjectId, ProjectMarker, UserId, UserMarker};
pub use member::{GroupMember, ProjectMember};
pub use project::Project;
pub use user::{User, UserQuery};
