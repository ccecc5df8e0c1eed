//! # Catalog Client
//!
//! Provides a high‑level API for the movie catalog.
//! It wraps a `QueryClient<Catalog>` and exposes one method per catalog operation.
//! Parameters are validated here, before anything is sent to the actor.
use std::time::Duration;

use tracing::{debug, instrument};

use crate::catalog::{Catalog, CatalogError, CatalogQuery};
use crate::framework::QueryClient;
use crate::model::Actor;

/// Client for querying the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: QueryClient<Catalog>,
}

impl CatalogClient {
    pub fn new(inner: QueryClient<Catalog>) -> Self {
        Self { inner }
    }

    /// Returns a client whose calls fail with [`CatalogError::Timeout`] after `timeout`.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            inner: self.inner.with_timeout(timeout),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout()
    }

    /// Every actor, ascending by identity.
    #[instrument(skip(self))]
    pub async fn list_actors_sorted_by_identity(&self) -> Result<Vec<Actor>, CatalogError> {
        self.run(CatalogQuery::sorted_by_identity()).await
    }

    /// Actors whose identity is exactly `identity`.
    #[instrument(skip(self))]
    pub async fn find_actors_by_identity(
        &self,
        identity: &str,
    ) -> Result<Vec<Actor>, CatalogError> {
        self.run(CatalogQuery::by_identity(identity)).await
    }

    #[instrument(skip(self))]
    pub async fn find_actors_by_birth_year(&self, year: i32) -> Result<Vec<Actor>, CatalogError> {
        self.run(CatalogQuery::by_birth_year(year)?).await
    }

    /// One entry per role named `role`; the same actor may appear several times.
    #[instrument(skip(self))]
    pub async fn find_actors_by_role_name(&self, role: &str) -> Result<Vec<Actor>, CatalogError> {
        self.run(CatalogQuery::by_role_name(role)).await
    }

    /// One entry per role in a film released in `year`.
    #[instrument(skip(self))]
    pub async fn find_actors_by_film_year(&self, year: i32) -> Result<Vec<Actor>, CatalogError> {
        self.run(CatalogQuery::by_film_year(year)?).await
    }

    #[instrument(skip(self))]
    pub async fn find_actors_by_country(&self, country: &str) -> Result<Vec<Actor>, CatalogError> {
        self.run(CatalogQuery::by_country(country)).await
    }

    #[instrument(skip(self))]
    pub async fn find_actors_by_country_and_year(
        &self,
        country: &str,
        year: i32,
    ) -> Result<Vec<Actor>, CatalogError> {
        self.run(CatalogQuery::by_country_and_year(country, year)?)
            .await
    }

    /// Distinct actors from films released in `start_year..=end_year` with a director
    /// whose identity contains `director_pattern`.
    #[instrument(skip(self))]
    pub async fn find_actors_by_director_and_year_range(
        &self,
        director_pattern: &str,
        start_year: i32,
        end_year: i32,
    ) -> Result<Vec<Actor>, CatalogError> {
        self.run(CatalogQuery::by_director_and_year_range(
            director_pattern,
            start_year,
            end_year,
        )?)
        .await
    }

    async fn run(&self, query: CatalogQuery) -> Result<Vec<Actor>, CatalogError> {
        debug!(query = query.name(), "Sending request");
        self.inner.query(query).await
    }
}
