use async_graphql::{Context, Object, ID};
use todoql_common_types::inputs::{GetTodoArgs, GetUserArgs};

use super::{api_types, ctx_data};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetches a single user by ID. Returns `null` if there's no such user.
    async fn get_user(&self, ctx: &Context<'_>, id: ID) -> Option<api_types::User> {
        let args = GetUserArgs::from(id);
        ctx_data(ctx).store.user(&args).cloned().map(Into::into)
    }

    /// Fetches all users, in the order they were loaded.
    async fn get_users(&self, ctx: &Context<'_>) -> Vec<api_types::User> {
        ctx_data(ctx)
            .store
            .users()
            .iter()
            .cloned()
            .map(Into::into)
            .collect()
    }

    /// Fetches a single todo by ID. Returns `null` if there's no such todo.
    async fn get_todo(&self, ctx: &Context<'_>, id: ID) -> Option<api_types::Todo> {
        let args = GetTodoArgs::from(id);
        ctx_data(ctx).store.todo(&args).cloned().map(Into::into)
    }

    /// Fetches all todos, in the order they were loaded.
    async fn get_todos(&self, ctx: &Context<'_>) -> Vec<api_types::Todo> {
        ctx_data(ctx)
            .store
            .todos()
            .iter()
            .cloned()
            .map(Into::into)
            .collect()
    }
}
