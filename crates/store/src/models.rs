use serde::Deserialize;
use todoql_common_types::{TodoId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: i32,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    /// Refers to [`User::id`]. Nothing guarantees that such a user exists.
    pub user_id: UserId,
}

impl User {
    pub fn new(id: &str, name: &str, age: i32, email: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            age,
            email: email.to_string(),
        }
    }
}

impl Todo {
    pub fn new(id: &str, title: &str, completed: bool, user_id: &str) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            completed,
            user_id: user_id.into(),
        }
    }
}
