use super::*;

#[test]
fn test_add_user_assigns_sequential_ids() {
    let store = MockStore::new();
    let peter = store
        .add_user("Peter Pan", "peter.pan", "peter.pan@example.com")
        .unwrap();
    let petra = store
        .add_user("Petra Pan", "petra.pan", "petra.pan@example.com")
        .unwrap();

    assert_eq!(peter.id.get(), 1);
    assert_eq!(petra.id.get(), 2);
    assert_eq!(store.users(), vec![peter.clone(), petra]);
    assert_eq!(store.user(peter.id), Some(peter));
}

#[parameterized(
    same_username = { "peter.pan", "other@example.com", UserField::Username, "peter.pan" },
    same_email = { "other", "peter.pan@example.com", UserField::Email, "peter.pan@example.com" },
    both_reports_username = { "peter.pan", "peter.pan@example.com", UserField::Username, "peter.pan" },
)]
fn test_duplicate_user_is_rejected(username: &str, email: &str, field: UserField, value: &str) {
    let store = MockStore::new();
    store
        .add_user("Peter Pan", "peter.pan", "peter.pan@example.com")
        .unwrap();

    let err = store.add_user("Someone", username, email).unwrap_err();
    assert_eq!(
        err,
        MockError::DuplicateUser {
            field,
            value: value.to_string()
        }
    );
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(store.users().len(), 1);
}

#[test]
fn test_rejected_user_does_not_consume_an_id() {
    let store = MockStore::new();
    store.add_user("A", "a", "a@example.com").unwrap();
    assert!(store.add_user("A again", "a", "a2@example.com").is_err());
    let b = store.add_user("B", "b", "b@example.com").unwrap();
    assert_eq!(b.id.get(), 2);
}

#[parameterized(
    all_users = { UserQuery::default(), &["peter.pan", "petra.pan", "fred.feuerstein"] },
    by_username = { UserQuery::by_username("petra.pan"), &["petra.pan"] },
    by_unknown_username = { UserQuery::by_username("nobody"), &[] },
    search_by_email = { UserQuery::search("fred.feuerstein@example.com"), &["fred.feuerstein"] },
    search_by_username = { UserQuery::search("peter.pan"), &["peter.pan"] },
)]
fn test_find_users(query: UserQuery, expected: &[&str]) {
    let store = MockStore::new();
    store
        .add_user("Peter Pan", "peter.pan", "peter.pan@example.com")
        .unwrap();
    store
        .add_user("Petra Pan", "petra.pan", "petra.pan@example.com")
        .unwrap();
    store
        .add_user("Fred Feuerstein", "fred.feuerstein", "fred.feuerstein@example.com")
        .unwrap();

    let found: Vec<String> = store
        .find_users(&query)
        .into_iter()
        .map(|user| user.username)
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn test_unknown_user_lookup() {
    let store = MockStore::new();
    assert_eq!(store.user(1.into()), None);
}
