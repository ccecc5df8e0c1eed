//! Assembles a [`Catalog`] and checks its integrity.
//!
//! The builder is the only way rows enter a catalog, whether they come from code
//! (tests, demos) or from a [`CatalogSnapshot`](super::CatalogSnapshot).

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use chrono::NaiveDate;
use tracing::info;

use super::{Catalog, CatalogError, CatalogSnapshot};
use crate::model::{
    Actor, ActorId, Country, CountryId, Director, DirectorId, Film, FilmCountry, FilmDirector,
    FilmId, Role, RoleId,
};

/// Release years a film may carry.
const FILM_YEARS: std::ops::RangeInclusive<i32> = 1000..=9999;

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    actors: Vec<Actor>,
    films: Vec<Film>,
    countries: Vec<Country>,
    directors: Vec<Director>,
    roles: Vec<Role>,
    film_countries: Vec<FilmCountry>,
    film_directors: Vec<FilmDirector>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actor(
        mut self,
        id: u32,
        identity: impl Into<String>,
        birth_date: Option<NaiveDate>,
    ) -> Self {
        self.actors.push(Actor::new(ActorId(id), identity, birth_date));
        self
    }

    pub fn film(mut self, id: u32, title: impl Into<String>, year: i32) -> Self {
        self.films.push(Film::new(FilmId(id), title, year));
        self
    }

    pub fn country(mut self, id: u32, name: impl Into<String>) -> Self {
        self.countries.push(Country {
            id: CountryId(id),
            name: name.into(),
        });
        self
    }

    pub fn director(mut self, id: u32, identity: impl Into<String>) -> Self {
        self.directors.push(Director {
            id: DirectorId(id),
            identity: identity.into(),
        });
        self
    }

    pub fn role(mut self, id: u32, name: impl Into<String>, actor: u32, film: u32) -> Self {
        self.roles
            .push(Role::new(RoleId(id), name, ActorId(actor), FilmId(film)));
        self
    }

    pub fn film_country(mut self, film: u32, country: u32) -> Self {
        self.film_countries.push(FilmCountry {
            film_id: FilmId(film),
            country_id: CountryId(country),
        });
        self
    }

    pub fn film_director(mut self, film: u32, director: u32) -> Self {
        self.film_directors.push(FilmDirector {
            film_id: FilmId(film),
            director_id: DirectorId(director),
        });
        self
    }

    /// Seeds a builder with every table of a snapshot.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            actors: snapshot.actors,
            films: snapshot.films,
            countries: snapshot.countries,
            directors: snapshot.directors,
            roles: snapshot.roles,
            film_countries: snapshot.film_countries,
            film_directors: snapshot.film_directors,
        }
    }

    /// Validates every row and link, then indexes the tables.
    ///
    /// # Errors
    /// - [`CatalogError::InvalidArgument`] for a film year outside `1000..=9999`.
    /// - [`CatalogError::DataAccess`] for duplicate primary keys or a link that points
    ///   at a missing row.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        if let Some(film) = self.films.iter().find(|film| !FILM_YEARS.contains(&film.year)) {
            return Err(CatalogError::InvalidArgument(format!(
                "film {} has release year {}, expected four digits",
                film.id, film.year
            )));
        }

        let actor_index = index_by("actor", &self.actors, |actor| actor.id)?;
        let film_index = index_by("film", &self.films, |film| film.id)?;
        let country_ids = index_by("country", &self.countries, |country| country.id)?;
        let director_ids = index_by("director", &self.directors, |director| director.id)?;
        index_by("role", &self.roles, |role| role.id)?;

        for role in &self.roles {
            ensure_exists("role", role.id, "actor", role.actor_id, &actor_index)?;
            ensure_exists("role", role.id, "film", role.film_id, &film_index)?;
        }

        let mut film_countries: HashMap<FilmId, Vec<CountryId>> = HashMap::new();
        for link in dedup_links(&self.film_countries) {
            ensure_exists("film_country", link.film_id, "film", link.film_id, &film_index)?;
            ensure_exists("film_country", link.film_id, "country", link.country_id, &country_ids)?;
            film_countries.entry(link.film_id).or_default().push(link.country_id);
        }

        let mut film_directors: HashMap<FilmId, Vec<DirectorId>> = HashMap::new();
        for link in dedup_links(&self.film_directors) {
            ensure_exists("film_director", link.film_id, "film", link.film_id, &film_index)?;
            ensure_exists(
                "film_director",
                link.film_id,
                "director",
                link.director_id,
                &director_ids,
            )?;
            film_directors.entry(link.film_id).or_default().push(link.director_id);
        }

        info!(
            actors = self.actors.len(),
            films = self.films.len(),
            roles = self.roles.len(),
            countries = self.countries.len(),
            directors = self.directors.len(),
            "Catalog built"
        );

        Ok(Catalog {
            actors: self.actors,
            films: self.films,
            countries: self.countries,
            directors: self.directors,
            roles: self.roles,
            actor_index,
            film_index,
            film_countries,
            film_directors,
        })
    }
}

/// Maps each primary key to its row position, rejecting duplicates.
fn index_by<T, K>(
    table: &str,
    rows: &[T],
    key: impl Fn(&T) -> K,
) -> Result<HashMap<K, usize>, CatalogError>
where
    K: Eq + Hash + std::fmt::Display,
{
    let mut index = HashMap::with_capacity(rows.len());
    for (position, row) in rows.iter().enumerate() {
        let id = key(row);
        if index.contains_key(&id) {
            return Err(CatalogError::DataAccess(format!(
                "duplicate {table} id {id}"
            )));
        }
        index.insert(id, position);
    }
    Ok(index)
}

fn ensure_exists<K, V>(
    from: &str,
    from_id: impl std::fmt::Display,
    to: &str,
    key: K,
    index: &HashMap<K, V>,
) -> Result<(), CatalogError>
where
    K: Eq + Hash + std::fmt::Display,
{
    if index.contains_key(&key) {
        Ok(())
    } else {
        Err(CatalogError::DataAccess(format!(
            "dangling foreign key: {from} {from_id} references missing {to} {key}"
        )))
    }
}

/// A link listed twice would double every join through it.
fn dedup_links<T: Copy + Eq + Hash>(links: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(links.len());
    links.iter().copied().filter(|link| seen.insert(*link)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> CatalogBuilder {
        CatalogBuilder::new()
            .actor(1, "Marion Cotillard", NaiveDate::from_ymd_opt(1975, 9, 30))
            .film(1, "La Vie en Rose", 2007)
            .country(1, "France")
            .film_country(1, 1)
    }

    #[test]
    fn test_build_indexes_rows() {
        let catalog = minimal().role(1, "Édith Piaf", 1, 1).build().unwrap();
        assert_eq!(catalog.actors().len(), 1);
        assert_eq!(catalog.film(FilmId(1)).unwrap().year, 2007);
        assert_eq!(catalog.actors_by_role_name("Édith Piaf")[0].id, ActorId(1));
    }

    #[test]
    fn test_role_with_unknown_actor_is_rejected() {
        let err = minimal().role(1, "Ghost", 99, 1).build().unwrap_err();
        assert!(matches!(err, CatalogError::DataAccess(msg) if msg.contains("actor 99")));
    }

    #[test]
    fn test_link_to_unknown_country_is_rejected() {
        let err = minimal().film_country(1, 42).build().unwrap_err();
        assert!(matches!(err, CatalogError::DataAccess(msg) if msg.contains("country 42")));
    }

    #[test]
    fn test_duplicate_primary_key_is_rejected() {
        let err = minimal()
            .actor(1, "Someone Else", None)
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::DataAccess("duplicate actor id 1".into()));
    }

    #[test]
    fn test_film_year_must_have_four_digits() {
        let err = minimal().film(2, "Too Early", 999).build().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
    }

    #[test]
    fn test_repeated_link_does_not_duplicate_rows() {
        let catalog = minimal()
            .film_country(1, 1)
            .role(1, "Édith Piaf", 1, 1)
            .build()
            .unwrap();
        assert_eq!(catalog.actors_by_country_and_year("France", 2007).len(), 1);
        assert_eq!(catalog.film_countries[&FilmId(1)].len(), 1);
    }
}
