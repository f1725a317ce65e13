//! Containment relations between projects and groups.
//!
//! The index is derived data. The store writes it in the same critical section
//! that creates the owning entity, and nothing else mutates it.

use std::collections::HashMap;

use tracing::warn;

use crate::types::{GroupId, ProjectId};

/// Project→owning group and group→parent group, both O(1).
#[derive(Debug, Default, Clone)]
pub struct HierarchyIndex {
    project_owner: HashMap<ProjectId, GroupId>,
    /// Key presence marks a known group; the value is its parent, if any.
    group_parent: HashMap<GroupId, Option<GroupId>>,
}

impl HierarchyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_group(&mut self, group: GroupId, parent: Option<GroupId>) {
        self.group_parent
            .insert(group, parent.filter(|parent| !parent.is_unset()));
    }

    pub(crate) fn insert_project(&mut self, project: ProjectId, owner: Option<GroupId>) {
        if let Some(owner) = owner.filter(|owner| !owner.is_unset()) {
            self.project_owner.insert(project, owner);
        }
    }

    /// The group a project lives in, `None` for personal projects.
    pub fn project_owner(&self, project: ProjectId) -> Option<GroupId> {
        self.project_owner.get(&project).copied()
    }

    /// The parent of a known group. `None` for roots and unknown groups.
    pub fn group_parent(&self, group: GroupId) -> Option<GroupId> {
        self.group_parent.get(&group).copied().flatten()
    }

    pub fn contains_group(&self, group: GroupId) -> bool {
        self.group_parent.contains_key(&group)
    }

    pub fn group_count(&self) -> usize {
        self.group_parent.len()
    }

    /// Walk from `start` up to its root, yielding `start` first.
    ///
    /// The walk ends at a root, or at the first id that is not a known group.
    pub fn ancestors(&self, start: GroupId) -> Ancestors<'_> {
        Ancestors {
            index: self,
            next: Some(start),
            remaining: self.group_count(),
        }
    }
}

/// Iterator over a group and its ancestors. See [`HierarchyIndex::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    index: &'a HierarchyIndex,
    next: Option<GroupId>,
    /// A walk never visits more groups than exist. Parent ids are not
    /// validated on insert, so a dangling id that is later assigned could
    /// close a loop.
    remaining: usize,
}

impl Iterator for Ancestors<'_> {
    type Item = GroupId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if current.is_unset() {
            return None;
        }

        let Some(parent) = self.index.group_parent.get(&current) else {
            warn!(
                event = "Hierarchy",
                phase = "Walk",
                group = %current,
                "ancestor group not found, treating as top of chain"
            );
            return None;
        };

        if self.remaining == 0 {
            warn!(
                event = "Hierarchy",
                phase = "Walk",
                group = %current,
                "ancestor chain longer than the number of groups, stopping"
            );
            return None;
        }
        self.remaining -= 1;

        self.next = *parent;
        Some(current)
    }
}
