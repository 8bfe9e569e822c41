//! Typed arguments of the GraphQL root queries. Resolvers convert the raw
//! GraphQL arguments into these before asking the store for anything.

use async_graphql::ID;

use crate::{TodoId, UserId};

/// Arguments of the `getUser` root query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserArgs {
    /// The id of the requested user.
    pub id: UserId,
}

/// Arguments of the `getTodo` root query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTodoArgs {
    /// The id of the requested todo.
    pub id: TodoId,
}

impl GetUserArgs {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self { id: id.into() }
    }
}

impl GetTodoArgs {
    pub fn new(id: impl Into<TodoId>) -> Self {
        Self { id: id.into() }
    }
}

impl From<ID> for GetUserArgs {
    fn from(id: ID) -> Self {
        Self::new(id)
    }
}

impl From<ID> for GetTodoArgs {
    fn from(id: ID) -> Self {
        Self::new(id)
    }
}
