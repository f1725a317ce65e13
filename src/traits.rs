use crate::hierarchy::HierarchyIndex;
use crate::types::{AccessLevel, GroupId, GroupMember, ProjectId, ProjectMember, UserId};

/// A membership row that can take part in a max-merge keyed by user id.
pub trait Membership: Clone {
    fn user_id(&self) -> UserId;

    fn access_level(&self) -> AccessLevel;

    /// Raise to `candidate` if higher, never lower.
    fn raise_to(&mut self, candidate: AccessLevel);
}

impl Membership for ProjectMember {
    fn user_id(&self) -> UserId {
        self.user.id
    }

    fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    fn raise_to(&mut self, candidate: AccessLevel) {
        ProjectMember::raise_to(self, candidate)
    }
}

impl Membership for GroupMember {
    fn user_id(&self) -> UserId {
        self.user.id
    }

    fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    fn raise_to(&mut self, candidate: AccessLevel) {
        GroupMember::raise_to(self, candidate)
    }
}

/// Read-only view of the state the inheritance resolver needs.
///
/// The store's locked state implements this; the resolver never sees anything
/// it could mutate.
pub trait MembershipSource {
    fn hierarchy(&self) -> &HierarchyIndex;

    fn has_project(&self, project: ProjectId) -> bool;

    fn has_group(&self, group: GroupId) -> bool;

    /// Direct rows on a project in insertion order, empty if none.
    fn direct_project_members(&self, project: ProjectId) -> &[ProjectMember];

    /// Direct rows on a group in insertion order, empty if none.
    fn direct_group_members(&self, group: GroupId) -> &[GroupMember];
}
