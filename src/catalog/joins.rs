//! Query implementations.
//!
//! Each role-based query is a scan of the roles table joined to films (and from there
//! to countries or directors) followed by a lookup of the role's actor. "Distinct"
//! queries deduplicate on [`ActorId`] after the join, never on the identity string.

use std::collections::HashSet;

use super::Catalog;
use crate::model::{Actor, ActorId, CountryId, DirectorId, Film, Role};

impl Catalog {
    /// Every actor, ascending by identity. Equal identities keep insertion order.
    pub fn actors_sorted_by_identity(&self) -> Vec<Actor> {
        let mut actors = self.actors.clone();
        actors.sort_by(|a, b| a.identity.cmp(&b.identity));
        actors
    }

    pub fn actors_by_identity(&self, identity: &str) -> Vec<Actor> {
        self.actors
            .iter()
            .filter(|actor| actor.identity == identity)
            .cloned()
            .collect()
    }

    pub fn actors_by_birth_year(&self, year: i32) -> Vec<Actor> {
        self.actors
            .iter()
            .filter(|actor| actor.birth_year() == Some(year))
            .cloned()
            .collect()
    }

    /// One entry per matching role.
    pub fn actors_by_role_name(&self, role_name: &str) -> Vec<Actor> {
        self.actors_for_roles(self.roles.iter().filter(|role| role.name == role_name))
    }

    /// One entry per role in a film released in `year`.
    pub fn actors_by_film_year(&self, year: i32) -> Vec<Actor> {
        self.actors_for_roles(self.roles_where_film(|film| film.year == year))
    }

    pub fn actors_by_country(&self, country: &str) -> Vec<Actor> {
        let countries = self.country_ids_named(country);
        if countries.is_empty() {
            return Vec::new();
        }
        distinct(self.actors_for_roles(
            self.roles_where_film(|film| self.film_has_country(film, &countries)),
        ))
    }

    pub fn actors_by_country_and_year(&self, country: &str, year: i32) -> Vec<Actor> {
        let countries = self.country_ids_named(country);
        if countries.is_empty() {
            return Vec::new();
        }
        distinct(self.actors_for_roles(self.roles_where_film(|film| {
            film.year == year && self.film_has_country(film, &countries)
        })))
    }

    /// Case-sensitive substring match on director identity; both bounds inclusive.
    pub fn actors_by_director_and_year_range(
        &self,
        director_pattern: &str,
        start_year: i32,
        end_year: i32,
    ) -> Vec<Actor> {
        let directors: HashSet<DirectorId> = self
            .directors
            .iter()
            .filter(|director| director.identity.contains(director_pattern))
            .map(|director| director.id)
            .collect();
        if directors.is_empty() || start_year > end_year {
            return Vec::new();
        }
        let years = start_year..=end_year;
        distinct(self.actors_for_roles(self.roles_where_film(|film| {
            years.contains(&film.year)
                && self
                    .film_directors
                    .get(&film.id)
                    .is_some_and(|ids| ids.iter().any(|id| directors.contains(id)))
        })))
    }

    fn roles_where_film<'a>(
        &'a self,
        predicate: impl Fn(&Film) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Role> + 'a {
        self.roles.iter().filter(move |role| {
            self.film(role.film_id).is_some_and(|film| predicate(film))
        })
    }

    fn actors_for_roles<'a>(&'a self, roles: impl Iterator<Item = &'a Role>) -> Vec<Actor> {
        roles
            .filter_map(|role| self.actor(role.actor_id))
            .cloned()
            .collect()
    }

    fn country_ids_named(&self, name: &str) -> HashSet<CountryId> {
        self.countries
            .iter()
            .filter(|country| country.name == name)
            .map(|country| country.id)
            .collect()
    }

    fn film_has_country(&self, film: &Film, countries: &HashSet<CountryId>) -> bool {
        self.film_countries
            .get(&film.id)
            .is_some_and(|ids| ids.iter().any(|id| countries.contains(id)))
    }
}

/// Keeps the first occurrence of each actor.
fn distinct(actors: Vec<Actor>) -> Vec<Actor> {
    let mut seen: HashSet<ActorId> = HashSet::with_capacity(actors.len());
    actors
        .into_iter()
        .filter(|actor| seen.insert(actor.id))
        .collect()
}
