use std::fmt;

use async_graphql::ID;
use quickcheck::Arbitrary;
use serde::{Deserialize, Serialize};

/// Generated ids are drawn from `0..ARBITRARY_ID_POOL`, so generated todos
/// often point at generated users.
const ARBITRARY_ID_POOL: u8 = 5;

/// The unique identifier of a user, which todos refer to via their `userId`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::From,
)]
#[serde(transparent)]
pub struct UserId(String);

/// The unique identifier of a todo.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::From,
)]
#[serde(transparent)]
pub struct TodoId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<ID> for UserId {
    fn from(id: ID) -> Self {
        Self(id.0)
    }
}

impl From<ID> for TodoId {
    fn from(id: ID) -> Self {
        Self(id.0)
    }
}

impl Arbitrary for UserId {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self((u8::arbitrary(g) % ARBITRARY_ID_POOL).to_string())
    }
}

impl Arbitrary for TodoId {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self((u8::arbitrary(g) % ARBITRARY_ID_POOL).to_string())
    }
}
