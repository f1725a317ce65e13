//! Effective membership: direct rows merged with every ancestor group's rows.
//!
//! The merge is a max over access levels per user id. Direct rows seed the
//! result and can only be raised. Distance in the hierarchy does not matter:
//! a grant three levels up counts as much as one on the owning group.

use std::collections::HashMap;

use itertools::Itertools;
use tracing::debug;

use crate::error::MockError;
use crate::traits::{Membership, MembershipSource};
use crate::types::{GroupId, GroupMember, ProjectId, ProjectMember, UserId};

/// Rows keyed by user id, kept in first-seen order.
#[derive(Debug)]
struct EffectiveMembers<M> {
    rows: Vec<M>,
    by_user: HashMap<UserId, usize>,
}

impl<M: Membership> EffectiveMembers<M> {
    fn seeded(direct: &[M]) -> Self {
        let mut members = EffectiveMembers {
            rows: Vec::with_capacity(direct.len()),
            by_user: HashMap::with_capacity(direct.len()),
        };
        for row in direct {
            members.merge(row.clone());
        }
        members
    }

    fn merge(&mut self, candidate: M) {
        match self.by_user.get(&candidate.user_id()) {
            Some(&idx) => self.rows[idx].raise_to(candidate.access_level()),
            None => {
                self.by_user.insert(candidate.user_id(), self.rows.len());
                self.rows.push(candidate);
            }
        }
    }

    fn into_rows(self) -> Vec<M> {
        self.rows
    }
}

/// Computes effective member lists from a [`MembershipSource`].
pub struct InheritanceResolver<'a, S: MembershipSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: MembershipSource + ?Sized> InheritanceResolver<'a, S> {
    pub fn new(source: &'a S) -> Self {
        InheritanceResolver { source }
    }

    /// Effective members of a project.
    ///
    /// A project without an owning group resolves to exactly its direct rows,
    /// in insertion order. Otherwise the order is not part of the contract.
    pub fn resolve_project(&self, project_id: ProjectId) -> Result<Vec<ProjectMember>, MockError> {
        if !self.source.has_project(project_id) {
            return Err(MockError::ProjectNotFound(project_id));
        }

        let direct = self.source.direct_project_members(project_id);
        let Some(owner) = self.source.hierarchy().project_owner(project_id) else {
            debug!(
                event = "Resolve",
                phase = "Direct",
                project = %project_id,
                members = direct.len()
            );
            return Ok(direct.to_vec());
        };

        let mut members = EffectiveMembers::seeded(direct);
        debug!(
            event = "Resolve",
            phase = "Seed",
            project = %project_id,
            direct = direct.len(),
            unique = members.rows.len()
        );

        let chain = self.merge_ancestors(owner, &mut members, |row| ProjectMember::from(row));

        debug!(
            event = "Resolve",
            phase = "Result",
            project = %project_id,
            chain = chain.iter().join(" -> "),
            members = members.rows.len()
        );
        Ok(members.into_rows())
    }

    /// Effective members of a group: its own rows merged with all its ancestors'.
    pub fn resolve_group(&self, group_id: GroupId) -> Result<Vec<GroupMember>, MockError> {
        if !self.source.has_group(group_id) {
            return Err(MockError::GroupNotFound(group_id));
        }

        let mut members = EffectiveMembers::seeded(self.source.direct_group_members(group_id));
        let chain = match self.source.hierarchy().group_parent(group_id) {
            Some(parent) => self.merge_ancestors(parent, &mut members, GroupMember::clone),
            None => Vec::new(),
        };

        debug!(
            event = "Resolve",
            phase = "Result",
            group = %group_id,
            chain = chain.iter().join(" -> "),
            members = members.rows.len()
        );
        Ok(members.into_rows())
    }

    /// Fold every group from `start` upward into `members`. Returns the groups visited.
    fn merge_ancestors<M, F>(
        &self,
        start: GroupId,
        members: &mut EffectiveMembers<M>,
        synthesize: F,
    ) -> Vec<GroupId>
    where
        M: Membership,
        F: Fn(&GroupMember) -> M,
    {
        let mut visited = Vec::new();
        for group in self.source.hierarchy().ancestors(start) {
            let rows = self.source.direct_group_members(group);
            debug!(
                event = "Resolve",
                phase = "Inherit",
                group = %group,
                rows = rows.len()
            );
            for row in rows {
                members.merge(synthesize(row));
            }
            visited.push(group);
        }
        visited
    }
}
