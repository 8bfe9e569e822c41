use quickcheck::{Arbitrary, Gen};
use todoql_common_types::{TodoId, UserId};
use todoql_store::models::{Todo, User};
use todoql_store::SeedData;

/// Randomly generated, valid seed data: ids are unique per collection, but
/// todos may refer to users that don't exist.
#[derive(Debug, Clone)]
pub struct ArbitrarySeed(pub SeedData);

impl Arbitrary for ArbitrarySeed {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut user_ids = Vec::<UserId>::arbitrary(g);
        dedup_in_order(&mut user_ids);
        let mut todo_ids = Vec::<TodoId>::arbitrary(g);
        dedup_in_order(&mut todo_ids);

        let users = user_ids
            .into_iter()
            .map(|id| User {
                name: format!("user {id}"),
                email: format!("{id}@example.com"),
                age: i32::arbitrary(g),
                id,
            })
            .collect();
        let todos = todo_ids
            .into_iter()
            .map(|id| Todo {
                title: format!("todo {id}"),
                completed: bool::arbitrary(g),
                user_id: UserId::arbitrary(g),
                id,
            })
            .collect();

        Self(SeedData { users, todos })
    }
}

fn dedup_in_order<T: PartialEq + Clone>(items: &mut Vec<T>) {
    let mut seen = Vec::with_capacity(items.len());
    items.retain(|item| {
        if seen.contains(item) {
            false
        } else {
            seen.push(item.clone());
            true
        }
    });
}
