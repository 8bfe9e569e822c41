pub mod api_types;
mod server;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Schema, SchemaBuilder};
use todoql_store::Store;

pub use self::server::QueryRoot;

pub type ApiSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Data shared by all resolvers of a schema.
pub struct ApiSchemaContext {
    pub store: Store,
}

impl ApiSchemaContext {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

pub fn api_schema_builder() -> SchemaBuilder<QueryRoot, EmptyMutation, EmptySubscription> {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
}

pub fn api_schema(ctx: ApiSchemaContext) -> ApiSchema {
    api_schema_builder().data(ctx).finish()
}

pub fn ctx_data<'a>(ctx: &'a Context) -> &'a ApiSchemaContext {
    ctx.data::<ApiSchemaContext>()
        .expect("Failed to get API context")
}
