use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

super::row_id!(
    /// Primary key of an [`Actor`].
    ActorId
);

/// A performer.
///
/// This is the row every catalog query returns. Roles and films are reached through
/// the catalog's join tables, not through this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    /// Full stage name. Not unique across the catalog.
    pub identity: String,
    /// Unknown for some actors; those never match a birth-year lookup.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl Actor {
    /// Creates a new Actor row.
    ///
    /// # Arguments
    /// * `id` - Primary key
    /// * `identity` - Full stage name
    /// * `birth_date` - Date of birth, if known
    pub fn new(id: ActorId, identity: impl Into<String>, birth_date: Option<NaiveDate>) -> Self {
        Self {
            id,
            identity: identity.into(),
            birth_date,
        }
    }

    /// Calendar year of birth.
    pub fn birth_year(&self) -> Option<i32> {
        self.birth_date.map(|date| date.year())
    }
}
