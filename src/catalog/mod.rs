//! # Movie Catalog Store
//!
//! An immutable, in-memory relational store for the movie schema and the eight queries
//! the service answers.
//!
//! ## Tables
//!
//! | Table | Row | Key |
//! |-------|-----|-----|
//! | actors | [`Actor`] | [`ActorId`] |
//! | films | [`Film`] | [`FilmId`] |
//! | countries | [`Country`](crate::model::Country) | [`CountryId`] |
//! | directors | [`Director`](crate::model::Director) | [`DirectorId`] |
//! | roles | [`Role`](crate::model::Role) | actor × film join |
//! | film_countries | film × country join | |
//! | film_directors | film × director join | |
//!
//! Rows keep their insertion order. Queries that walk the roles table return actors in
//! role order; distinct queries keep the first occurrence of each [`ActorId`].
//!
//! ## Structure
//!
//! - [`builder`] - [`CatalogBuilder`], which enforces foreign keys and year ranges
//! - [`joins`] - The query implementations
//! - [`loader`] - JSON snapshot loading
//! - [`query`] - [`CatalogQuery`] and parameter validation
//! - [`error`] - [`CatalogError`]

pub mod builder;
pub mod error;
pub mod joins;
pub mod loader;
pub mod query;

pub use builder::CatalogBuilder;
pub use error::CatalogError;
pub use loader::CatalogSnapshot;
pub use query::{CatalogQuery, PLAUSIBLE_YEARS};

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::framework::QueryHandler;
use crate::model::{Actor, ActorId, Country, CountryId, Director, DirectorId, Film, FilmId, Role};

/// The loaded catalog. Built once, then only read.
#[derive(Debug, Default)]
pub struct Catalog {
    actors: Vec<Actor>,
    films: Vec<Film>,
    countries: Vec<Country>,
    directors: Vec<Director>,
    roles: Vec<Role>,
    actor_index: HashMap<ActorId, usize>,
    film_index: HashMap<FilmId, usize>,
    film_countries: HashMap<FilmId, Vec<CountryId>>,
    film_directors: HashMap<FilmId, Vec<DirectorId>>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actor_index.get(&id).map(|&i| &self.actors[i])
    }

    pub fn film(&self, id: FilmId) -> Option<&Film> {
        self.film_index.get(&id).map(|&i| &self.films[i])
    }

    /// Runs `query` without validating it.
    pub fn execute(&self, query: &CatalogQuery) -> Vec<Actor> {
        match query {
            CatalogQuery::ActorsSortedByIdentity => self.actors_sorted_by_identity(),
            CatalogQuery::ActorsByIdentity { identity } => self.actors_by_identity(identity),
            CatalogQuery::ActorsByBirthYear { year } => self.actors_by_birth_year(*year),
            CatalogQuery::ActorsByRoleName { role } => self.actors_by_role_name(role),
            CatalogQuery::ActorsByFilmYear { year } => self.actors_by_film_year(*year),
            CatalogQuery::ActorsByCountry { country } => self.actors_by_country(country),
            CatalogQuery::ActorsByCountryAndYear { country, year } => {
                self.actors_by_country_and_year(country, *year)
            }
            CatalogQuery::ActorsByDirectorAndYearRange {
                director_pattern,
                start_year,
                end_year,
            } => self.actors_by_director_and_year_range(director_pattern, *start_year, *end_year),
        }
    }
}

#[async_trait]
impl QueryHandler for Catalog {
    type Query = CatalogQuery;
    type Output = Vec<Actor>;
    type Error = CatalogError;

    async fn handle(&self, query: CatalogQuery) -> Result<Vec<Actor>, CatalogError> {
        query.validate()?;
        let actors = self.execute(&query);
        debug!(query = query.name(), rows = actors.len(), "Executed");
        Ok(actors)
    }
}
