//! Identifier and input types shared by the store and the GraphQL API.

mod ids;
pub mod inputs;

pub use ids::{TodoId, UserId};
pub use inputs::{GetTodoArgs, GetUserArgs};
