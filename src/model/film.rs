use serde::{Deserialize, Serialize};

super::row_id!(
    /// Primary key of a [`Film`].
    FilmId
);
super::row_id!(
    /// Primary key of a [`Country`].
    CountryId
);
super::row_id!(
    /// Primary key of a [`Director`].
    DirectorId
);

/// A movie.
///
/// Countries of origin and directors are many-to-many and live in the catalog's
/// join tables ([`FilmCountry`], [`FilmDirector`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub id: FilmId,
    pub title: String,
    /// Release year, always four digits.
    pub year: i32,
}

impl Film {
    pub fn new(id: FilmId, title: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            year,
        }
    }
}

/// A country of production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
}

/// A film director.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    pub id: DirectorId,
    pub identity: String,
}

/// Film ↔ Country link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilmCountry {
    pub film_id: FilmId,
    pub country_id: CountryId,
}

/// Film ↔ Director link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilmDirector {
    pub film_id: FilmId,
    pub director_id: DirectorId,
}
