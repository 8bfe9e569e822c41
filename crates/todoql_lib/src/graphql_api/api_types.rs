use async_graphql::{Context, Object, ID};
use todoql_store::models;

use super::{ctx_data, ApiSchemaContext};

/// A person who owns todos.
#[derive(Clone, derive_more::From)]
pub struct User {
    model: models::User,
}

impl User {
    pub fn todos(&self, ctx: &ApiSchemaContext) -> Vec<Todo> {
        ctx.store
            .todos_of_user(&self.model)
            .cloned()
            .map(Into::into)
            .collect()
    }
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        self.model.id.clone().into()
    }

    async fn name(&self) -> &str {
        &self.model.name
    }

    async fn age(&self) -> i32 {
        self.model.age
    }

    async fn email(&self) -> &str {
        &self.model.email
    }

    /// All todos that belong to this user. Possibly empty.
    #[graphql(name = "todos")]
    async fn graphql_todos(&self, ctx: &Context<'_>) -> Vec<Todo> {
        self.todos(ctx_data(ctx))
    }
}

/// Something a user has to do.
#[derive(Clone, derive_more::From)]
pub struct Todo {
    model: models::Todo,
}

impl Todo {
    pub fn user(&self, ctx: &ApiSchemaContext) -> Option<User> {
        ctx.store.user_of_todo(&self.model).cloned().map(Into::into)
    }
}

#[Object]
impl Todo {
    async fn id(&self) -> ID {
        self.model.id.clone().into()
    }

    async fn title(&self) -> &str {
        &self.model.title
    }

    async fn completed(&self) -> bool {
        self.model.completed
    }

    /// ID of the user this todo belongs to.
    async fn user_id(&self) -> ID {
        self.model.user_id.clone().into()
    }

    /// The user this todo belongs to, or `null` if `userId` doesn't match
    /// any user.
    #[graphql(name = "user")]
    async fn graphql_user(&self, ctx: &Context<'_>) -> Option<User> {
        self.user(ctx_data(ctx))
    }
}
