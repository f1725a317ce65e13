use std::collections::HashMap;

use super::*;
use crate::error::ErrorKind;
use crate::snapshot_members;
use crate::types::AccessLevel::{Developer, Guest, Maintainer, Owner, Reporter};
use yare::parameterized;

mod users;

/// user id -> access level, the only part of a resolution tests may assert on.
fn levels(members: &[ProjectMember]) -> HashMap<UserId, AccessLevel> {
    members
        .iter()
        .map(|member| (member.user_id(), member.access_level))
        .collect()
}

fn add_user(store: &MockStore, username: &str) -> User {
    store
        .add_user(username, username, &format!("{username}@example.com"))
        .unwrap()
}

/// group1 -> group2 -> group3 -> project1, with:
/// - alice: owner on project1, reporter via group2
/// - bob: maintainer on group1 only
/// - carol: reporter on project1 only
struct NestedFixture {
    store: MockStore,
    groups: [Group; 3],
    project: Project,
    alice: User,
    bob: User,
    carol: User,
}

fn nested_fixture() -> NestedFixture {
    let store = MockStore::new();
    let group1 = store.add_group("group1");
    let group2 = store.add_group_with_parent("group2", group1.id);
    let group3 = store.add_group_with_parent("group3", group2.id);
    let project = store.add_project("project1", &group3);

    let alice = add_user(&store, "alice");
    let bob = add_user(&store, "bob");
    let carol = add_user(&store, "carol");

    store.add_project_member(ProjectMember::new(&alice, Owner), &project);
    store.add_project_member(ProjectMember::new(&carol, Reporter), &project);
    store.add_group_member(GroupMember::new(&alice, Reporter), &group2);
    store.add_group_member(GroupMember::new(&bob, Maintainer), &group1);

    NestedFixture {
        store,
        groups: [group1, group2, group3],
        project,
        alice,
        bob,
        carol,
    }
}

#[test]
fn test_new_store_is_empty() {
    let store = MockStore::new();
    assert!(store.users().is_empty());
    assert!(store.groups().is_empty());
    assert!(store.projects().is_empty());
    assert_eq!(store.config(), &StoreConfig::default());
}

#[test]
fn test_clones_share_state() {
    let store = MockStore::new();
    let clone = store.clone();
    clone.add_group("shared");
    assert_eq!(store.groups().len(), 1);
}

#[test]
fn test_independent_stores_number_from_one() {
    let first = MockStore::new();
    let second = MockStore::new();
    first.add_group("a");
    first.add_group("b");
    assert_eq!(second.add_group("c").id.get(), 1);
    assert_eq!(first.add_user("A", "a", "a@example.com").unwrap().id.get(), 1);
}

#[parameterized(
    project = { 99, 0 },
    group = { 0, 99 },
)]
fn test_lookups_for_unknown_ids(project: u64, group: u64) {
    let store = MockStore::new();
    if project != 0 {
        assert!(store.project(project.into()).is_none());
        assert_eq!(
            store.project_members(project.into()),
            Err(MockError::ProjectNotFound(project.into()))
        );
        assert_eq!(
            store.resolve_project_members(project.into()),
            Err(MockError::ProjectNotFound(project.into()))
        );
    }
    if group != 0 {
        assert!(store.group(group.into()).is_none());
        assert_eq!(
            store.group_members(group.into()),
            Err(MockError::GroupNotFound(group.into()))
        );
        assert_eq!(
            store.group_projects(group.into()),
            Err(MockError::GroupNotFound(group.into()))
        );
        assert_eq!(
            store.resolve_group_members(group.into()),
            Err(MockError::GroupNotFound(group.into()))
        );
    }
}
