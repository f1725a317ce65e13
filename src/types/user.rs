//! Users and the list-users filter.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::id::UserId;

/// A platform user. Username and email are unique within one store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct User {
    #[schema(value_type = u64)]
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} (@{})", self.id, self.username)
    }
}

/// Filter for listing users, decoded by the adapter from `?username=` / `?search=`.
///
/// `username` takes precedence. `search` matches a user whose username or email
/// equals the term exactly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserQuery {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl UserQuery {
    pub fn by_username(username: impl Into<String>) -> Self {
        UserQuery {
            username: Some(username.into()),
            search: None,
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        UserQuery {
            username: None,
            search: Some(term.into()),
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        match (&self.username, &self.search) {
            (Some(username), _) => user.username == *username,
            (None, Some(term)) => user.username == *term || user.email == *term,
            (None, None) => true,
        }
    }
}
