use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::config::{DuplicateMembers, StoreConfig};
use crate::error::{MockError, UserField};
use crate::hierarchy::HierarchyIndex;
use crate::resolver::InheritanceResolver;
use crate::sequence::IdSequences;
use crate::traits::{Membership, MembershipSource};
use crate::types::{
    AccessLevel, Group, GroupId, GroupMember, Project, ProjectId, ProjectMember, User, UserId,
    UserQuery,
};

/// Everything behind the store lock.
#[derive(Debug, Default)]
struct StoreState {
    users: Vec<User>,
    groups: BTreeMap<GroupId, Group>,
    projects: BTreeMap<ProjectId, Project>,
    hierarchy: HierarchyIndex,
    project_members: HashMap<ProjectId, Vec<ProjectMember>>,
    group_members: HashMap<GroupId, Vec<GroupMember>>,
}

impl StoreState {
    fn duplicate_user(&self, username: &str, email: &str) -> Option<MockError> {
        self.users.iter().find_map(|user| {
            if user.username == username {
                Some(MockError::DuplicateUser {
                    field: UserField::Username,
                    value: username.to_string(),
                })
            } else if user.email == email {
                Some(MockError::DuplicateUser {
                    field: UserField::Email,
                    value: email.to_string(),
                })
            } else {
                None
            }
        })
    }

    fn require_project(&self, project_id: ProjectId) -> Result<(), MockError> {
        if self.projects.contains_key(&project_id) {
            Ok(())
        } else {
            Err(MockError::ProjectNotFound(project_id))
        }
    }
}

impl MembershipSource for StoreState {
    fn hierarchy(&self) -> &HierarchyIndex {
        &self.hierarchy
    }

    fn has_project(&self, project: ProjectId) -> bool {
        self.projects.contains_key(&project)
    }

    fn has_group(&self, group: GroupId) -> bool {
        self.groups.contains_key(&group)
    }

    fn direct_project_members(&self, project: ProjectId) -> &[ProjectMember] {
        self.project_members
            .get(&project)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn direct_group_members(&self, group: GroupId) -> &[GroupMember] {
        self.group_members
            .get(&group)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Append `member` to `rows`, honoring the duplicate policy. Returns whether it was added.
fn push_member<M: Membership>(rows: &mut Vec<M>, member: M, policy: DuplicateMembers) -> bool {
    let exists = rows.iter().any(|row| row.user_id() == member.user_id());
    if exists && policy == DuplicateMembers::KeepExisting {
        return false;
    }
    rows.push(member);
    true
}

/// The in-memory mock state. Cloneable and thread-safe.
///
/// Clones share the same state. Separate calls to [`MockStore::new`] produce
/// fully independent stores, each with its own id numbering starting at 1.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    inner: Arc<RwLock<StoreState>>,
    ids: Arc<IdSequences>,
    config: StoreConfig,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        MockStore {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // Mutations complete under a single guard, so poisoned state is still whole.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // Users

    /// Create a user. Username and email must both be unused.
    pub fn add_user(&self, name: &str, username: &str, email: &str) -> Result<User, MockError> {
        let mut state = self.write();
        if let Some(err) = state.duplicate_user(username, email) {
            debug!(event = "AddUser", phase = "Rejected", error = %err);
            return Err(err);
        }

        let user = User {
            id: self.ids.users.next(),
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
        };
        debug!(event = "AddUser", phase = "Created", user = %user);
        state.users.push(user.clone());
        Ok(user)
    }

    pub fn users(&self) -> Vec<User> {
        self.read().users.clone()
    }

    pub fn find_users(&self, query: &UserQuery) -> Vec<User> {
        self.read()
            .users
            .iter()
            .filter(|user| query.matches(user))
            .cloned()
            .collect()
    }

    pub fn user(&self, id: UserId) -> Option<User> {
        self.read().users.iter().find(|user| user.id == id).cloned()
    }

    // Groups

    /// Create a root group.
    pub fn add_group(&self, name: &str) -> Group {
        self.insert_group(name, None)
    }

    /// Create a group under `parent`. The parent is not checked for existence;
    /// an id that never resolves simply ends the ancestor chain there.
    pub fn add_group_with_parent(&self, name: &str, parent: GroupId) -> Group {
        self.insert_group(name, Some(parent))
    }

    fn insert_group(&self, name: &str, parent: Option<GroupId>) -> Group {
        let mut state = self.write();
        let group = Group::new(self.ids.groups.next(), name, parent);
        state.hierarchy.insert_group(group.id, group.parent_id);
        state.groups.insert(group.id, group.clone());
        debug!(
            event = "AddGroup",
            phase = "Created",
            group = %group,
            parent = ?group.parent_id.map(|p| p.get())
        );
        group
    }

    pub fn groups(&self) -> Vec<Group> {
        self.read().groups.values().cloned().collect()
    }

    pub fn group(&self, id: GroupId) -> Option<Group> {
        self.read().groups.get(&id).cloned()
    }

    /// Projects owned directly by a group, in creation order.
    pub fn group_projects(&self, id: GroupId) -> Result<Vec<Project>, MockError> {
        self.read()
            .groups
            .get(&id)
            .map(|group| group.projects.clone())
            .ok_or(MockError::GroupNotFound(id))
    }

    // Projects

    /// Create a project owned by `group`.
    pub fn add_project(&self, name: &str, group: &Group) -> Project {
        self.insert_project(name, Some(group.id))
    }

    /// Create a project outside any group namespace.
    pub fn add_personal_project(&self, name: &str) -> Project {
        self.insert_project(name, None)
    }

    fn insert_project(&self, name: &str, owner: Option<GroupId>) -> Project {
        let mut state = self.write();
        let project = Project::new(self.ids.projects.next(), name, owner);
        state.hierarchy.insert_project(project.id, owner);
        if let Some(group) = owner.and_then(|owner| state.groups.get_mut(&owner)) {
            group.projects.push(project.clone());
        }
        state.projects.insert(project.id, project.clone());
        debug!(event = "AddProject", phase = "Created", project = %project);
        project
    }

    pub fn projects(&self) -> Vec<Project> {
        self.read().projects.values().cloned().collect()
    }

    pub fn project(&self, id: ProjectId) -> Option<Project> {
        self.read().projects.get(&id).cloned()
    }

    // Members

    /// Attach a direct member row to a group.
    ///
    /// A group this store never created is left alone and returned as given.
    pub fn add_group_member(&self, member: GroupMember, group: &Group) -> Group {
        let mut state = self.write();
        let user_id = member.user_id();
        if !state.has_group(group.id) {
            warn!(event = "AddGroupMember", phase = "Rejected", group = %group.id, user = %user_id, "unknown group");
            return group.clone();
        }
        let rows = state.group_members.entry(group.id).or_default();
        let added = push_member(rows, member, self.config.duplicate_members);
        debug!(
            event = "AddGroupMember",
            phase = if added { "Added" } else { "Kept" },
            group = %group.id,
            user = %user_id
        );
        state
            .groups
            .get(&group.id)
            .cloned()
            .unwrap_or_else(|| group.clone())
    }

    pub fn group_members(&self, id: GroupId) -> Result<Vec<GroupMember>, MockError> {
        let state = self.read();
        if !state.has_group(id) {
            return Err(MockError::GroupNotFound(id));
        }
        Ok(state.direct_group_members(id).to_vec())
    }

    /// Attach a direct member row to a project.
    ///
    /// A project this store never created is left alone and returned as given.
    pub fn add_project_member(&self, member: ProjectMember, project: &Project) -> Project {
        let mut state = self.write();
        let user_id = member.user_id();
        if !state.has_project(project.id) {
            warn!(event = "AddProjectMember", phase = "Rejected", project = %project.id, user = %user_id, "unknown project");
            return project.clone();
        }
        let rows = state.project_members.entry(project.id).or_default();
        let added = push_member(rows, member, self.config.duplicate_members);
        debug!(
            event = "AddProjectMember",
            phase = if added { "Added" } else { "Kept" },
            project = %project.id,
            user = %user_id
        );
        project.clone()
    }

    /// Add a known user to a project by id, the way the members endpoint does.
    ///
    /// Under [`DuplicateMembers::KeepExisting`] an existing row is returned
    /// unchanged instead.
    pub fn add_project_member_for_user(
        &self,
        project_id: ProjectId,
        user_id: UserId,
        access_level: AccessLevel,
    ) -> Result<ProjectMember, MockError> {
        let mut state = self.write();
        state.require_project(project_id)?;
        let user = state
            .users
            .iter()
            .find(|user| user.id == user_id)
            .cloned()
            .ok_or(MockError::UserNotFound(user_id))?;

        let member = ProjectMember::new(&user, access_level);
        let rows = state.project_members.entry(project_id).or_default();
        if push_member(rows, member.clone(), self.config.duplicate_members) {
            debug!(event = "AddProjectMember", phase = "Added", project = %project_id, user = %user_id);
            return Ok(member);
        }

        debug!(event = "AddProjectMember", phase = "Kept", project = %project_id, user = %user_id);
        Ok(rows
            .iter()
            .find(|row| row.user_id() == user_id)
            .cloned()
            .unwrap_or(member))
    }

    /// Direct member rows of a project, in insertion order.
    pub fn project_members(&self, id: ProjectId) -> Result<Vec<ProjectMember>, MockError> {
        let state = self.read();
        state.require_project(id)?;
        Ok(state.direct_project_members(id).to_vec())
    }

    /// Change the access level of the first row for `user_id` on the project.
    pub fn edit_project_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
        access_level: AccessLevel,
    ) -> Result<ProjectMember, MockError> {
        let mut state = self.write();
        state.require_project(project_id)?;
        let row = state
            .project_members
            .get_mut(&project_id)
            .and_then(|rows| rows.iter_mut().find(|row| row.user_id() == user_id))
            .ok_or(MockError::MemberNotFound {
                project_id,
                user_id,
            })?;

        debug!(
            event = "EditProjectMember",
            phase = "Updated",
            project = %project_id,
            user = %user_id,
            old_access_level = %row.access_level,
            new_access_level = %access_level
        );
        row.access_level = access_level;
        Ok(row.clone())
    }

    /// Remove the first row for `user_id`, keeping the order of the rest.
    pub fn delete_project_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> Result<(), MockError> {
        let mut state = self.write();
        state.require_project(project_id)?;
        let not_found = MockError::MemberNotFound {
            project_id,
            user_id,
        };
        let rows = state
            .project_members
            .get_mut(&project_id)
            .ok_or_else(|| not_found.clone())?;
        let idx = rows
            .iter()
            .position(|row| row.user_id() == user_id)
            .ok_or(not_found)?;

        rows.remove(idx);
        debug!(event = "DeleteProjectMember", phase = "Removed", project = %project_id, user = %user_id);
        Ok(())
    }

    // Resolution

    /// Effective members of a project, including those inherited from every
    /// ancestor group. Order is not guaranteed unless the project is personal.
    pub fn resolve_project_members(&self, id: ProjectId) -> Result<Vec<ProjectMember>, MockError> {
        let state = self.read();
        InheritanceResolver::new(&*state).resolve_project(id)
    }

    /// Effective members of a group, including those inherited from its ancestors.
    pub fn resolve_group_members(&self, id: GroupId) -> Result<Vec<GroupMember>, MockError> {
        let state = self.read();
        InheritanceResolver::new(&*state).resolve_group(id)
    }
}

#[cfg(test)]
mod tests;
