use serde::{Deserialize, Serialize};

use super::{ActorId, FilmId};

super::row_id!(
    /// Primary key of a [`Role`].
    RoleId
);

/// A character played by one actor in one film.
///
/// This is the join row between [`Actor`](super::Actor) and [`Film`](super::Film).
/// One actor may have several roles, including several in the same film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    /// Character name.
    pub name: String,
    pub actor_id: ActorId,
    pub film_id: FilmId,
}

impl Role {
    pub fn new(id: RoleId, name: impl Into<String>, actor_id: ActorId, film_id: FilmId) -> Self {
        Self {
            id,
            name: name.into(),
            actor_id,
            film_id,
        }
    }
}
