//! Writes the GraphQL SDL of the todoql API to `schema.graphql` at build time.
