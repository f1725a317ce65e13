//! In-memory core of a GitLab API mock.
//!
//! [`MockStore`] holds users, groups, projects and membership rows, and answers
//! "who can access this project, and at what level" by merging direct members
//! with those inherited from every ancestor group.
//!
//! ```rust
//! use gitlab_mock_core::{AccessLevel, MockStore, ProjectMember};
//!
//! let store = MockStore::new();
//! let parent = store.add_group("parent");
//! let child = store.add_group_with_parent("child", parent.id);
//! let project = store.add_project("project", &child);
//!
//! let alice = store.add_user("Alice", "alice", "alice@example.com").unwrap();
//! store.add_project_member(ProjectMember::new(&alice, AccessLevel::Reporter), &project);
//! store.add_group_member(
//!     gitlab_mock_core::GroupMember::new(&alice, AccessLevel::Maintainer),
//!     &parent,
//! );
//!
//! let members = store.resolve_project_members(project.id).unwrap();
//! assert_eq!(members.len(), 1);
//! assert_eq!(members[0].access_level, AccessLevel::Maintainer);
//! ```
pub use config::{DuplicateMembers, StoreConfig};
pub use error::{ErrorKind, MockError, UserField};
pub use hierarchy::{Ancestors, HierarchyIndex};
pub use resolver::InheritanceResolver;
pub use sequence::{IdSequence, IdSequences};
pub use store::MockStore;
pub use traits::{Membership, MembershipSource};
pub use types::*;

mod config;
mod error;
mod hierarchy;
mod resolver;
mod sequence;
mod store;
mod traits;
pub mod types;
