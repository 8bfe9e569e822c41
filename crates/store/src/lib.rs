//! In-memory, read-only storage of users and todos.
//!
//! All lookups are linear scans. The collections are tiny and fixed for the
//! lifetime of the process; if they ever grow, an id index built in
//! [`Store::new`] is the way to go.

pub mod models;
mod seed;

use std::path::Path;
use std::sync::Arc;

use todoql_common_types::{GetTodoArgs, GetUserArgs};
use tracing::{debug, info};

pub use self::seed::{SeedData, SeedDataError};
use crate::models::{Todo, User};

/// Immutable users and todos. It uses [`Arc`] internally, so it's cheaply
/// cloneable.
#[derive(Debug, Clone)]
pub struct Store {
    users: Arc<[User]>,
    todos: Arc<[Todo]>,
}

impl Store {
    /// Builds a store out of validated seed data.
    pub fn new(seed: SeedData) -> Result<Self, SeedDataError> {
        seed.validate()?;
        info!(
            users = seed.users.len(),
            todos = seed.todos.len(),
            "Loaded seed data"
        );

        Ok(Self {
            users: seed.users.into(),
            todos: seed.todos.into(),
        })
    }

    /// A store with the built-in users and todos.
    pub fn with_builtin_data() -> Self {
        let seed = SeedData::builtin();
        Self {
            users: seed.users.into(),
            todos: seed.todos.into(),
        }
    }

    /// Reads a YAML fixture file and builds a store out of it.
    pub fn from_file(path: &Path) -> Result<Self, SeedDataError> {
        info!(path = %path.display(), "Reading seed data file");
        Self::new(SeedData::read(path)?)
    }

    /// The first user with the requested id, if any.
    pub fn user(&self, args: &GetUserArgs) -> Option<&User> {
        debug!(id = %args.id, "Looking up user");
        self.users.iter().find(|user| user.id == args.id)
    }

    /// All users, in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The first todo with the requested id, if any.
    pub fn todo(&self, args: &GetTodoArgs) -> Option<&Todo> {
        debug!(id = %args.id, "Looking up todo");
        self.todos.iter().find(|todo| todo.id == args.id)
    }

    /// All todos, in insertion order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Todos that belong to `user`, in insertion order.
    pub fn todos_of_user<'a>(&'a self, user: &'a User) -> impl Iterator<Item = &'a Todo> + 'a {
        self.todos
            .iter()
            .filter(move |todo| todo.user_id == user.id)
    }

    /// The owner of `todo`, or [`None`] if `todo.user_id` is dangling.
    pub fn user_of_todo(&self, todo: &Todo) -> Option<&User> {
        self.users.iter().find(|user| user.id == todo.user_id)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn builtin_store_lookups() {
        let store = Store::with_builtin_data();

        let alice = store.user(&GetUserArgs::new("1")).unwrap();
        assert_eq!(alice, &User::new("1", "Alice", 30, "alice@example.com"));

        let todos: Vec<_> = store.todos_of_user(alice).collect();
        assert_eq!(todos, vec![&Todo::new("1", "Buy groceries", false, "1")]);

        let walk_the_dog = store.todo(&GetTodoArgs::new("2")).unwrap();
        assert_eq!(walk_the_dog.title, "Walk the dog");
        assert!(walk_the_dog.completed);
        assert_eq!(store.user_of_todo(walk_the_dog).unwrap().name, "Bob");
    }

    #[test]
    fn unknown_ids_are_none() {
        let store = Store::with_builtin_data();
        assert!(store.user(&GetUserArgs::new("99")).is_none());
        assert!(store.todo(&GetTodoArgs::new("99")).is_none());
    }

    #[test]
    fn clones_share_data() {
        let store = Store::with_builtin_data();
        let clone = store.clone();
        assert!(Arc::ptr_eq(&store.users, &clone.users));
        assert!(Arc::ptr_eq(&store.todos, &clone.todos));
    }

    #[test]
    #[traced_test]
    fn from_file_logs_collection_sizes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "users:\n  - {{ id: \"a\", name: Ann, age: 3, email: ann@example.com }}\ntodos: []"
        )
        .unwrap();

        let store = Store::from_file(file.path()).unwrap();
        assert_eq!(store.users().len(), 1);
        assert!(store.todos().is_empty());
        assert!(logs_contain("Loaded seed data"));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = Store::from_file(Path::new("/nonexistent/seed.yaml")).unwrap_err();
        assert!(matches!(err, SeedDataError::Io { .. }));
    }
}
