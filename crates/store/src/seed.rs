//! The data a [`Store`](crate::Store) is populated with at startup: either
//! the built-in users and todos, or a YAML fixture file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use todoql_common_types::{TodoId, UserId};

use crate::models::{Todo, User};

#[derive(Debug, thiserror::Error)]
pub enum SeedDataError {
    #[error("failed to read seed data from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("user id {0} appears more than once")]
    DuplicateUserId(UserId),
    #[error("todo id {0} appears more than once")]
    DuplicateTodoId(TodoId),
}

/// Users and todos, in the order they are served.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl SeedData {
    /// The data the server ships with.
    pub fn builtin() -> Self {
        Self {
            users: vec![
                User::new("1", "Alice", 30, "alice@example.com"),
                User::new("2", "Bob", 25, "bob@example.com"),
            ],
            todos: vec![
                Todo::new("1", "Buy groceries", false, "1"),
                Todo::new("2", "Walk the dog", true, "2"),
                Todo::new("3", "Read a book", false, "2"),
            ],
        }
    }

    /// Reads a YAML fixture file with `users` and `todos` lists.
    pub fn read(path: &Path) -> Result<Self, SeedDataError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SeedDataError::Io {
            path: path.to_owned(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| SeedDataError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Rejects duplicate ids within each collection. Todos pointing at
    /// unknown users are fine.
    pub fn validate(&self) -> Result<(), SeedDataError> {
        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(&user.id) {
                return Err(SeedDataError::DuplicateUserId(user.id.clone()));
            }
        }

        let mut todo_ids = HashSet::new();
        for todo in &self.todos {
            if !todo_ids.insert(&todo.id) {
                return Err(SeedDataError::DuplicateTodoId(todo.id.clone()));
            }
        }

        Ok(())
    }
}
