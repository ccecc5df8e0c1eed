#![allow(dead_code)]

use movie_catalog::catalog::Catalog;
use movie_catalog::model::Actor;

pub const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/movies.json");

/// 21 actors, 15 films, 28 roles.
pub fn fixture_catalog() -> Catalog {
    Catalog::from_json_file(FIXTURE).expect("fixture catalog must load")
}

pub fn names(actors: &[Actor]) -> Vec<&str> {
    actors.iter().map(|actor| actor.identity.as_str()).collect()
}
