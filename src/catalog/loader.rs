//! JSON catalog snapshots.
//!
//! A snapshot is a plain dump of every table:
//!
//! ```json
//! {
//!   "actors":    [{ "id": 1, "identity": "Margot Robbie", "birth_date": "1990-07-02" }],
//!   "films":     [{ "id": 1, "title": "Suicide Squad", "year": 2016 }],
//!   "countries": [{ "id": 1, "name": "USA" }],
//!   "directors": [{ "id": 1, "identity": "David Ayer" }],
//!   "roles":     [{ "id": 1, "name": "Harley Quinn", "actor_id": 1, "film_id": 1 }],
//!   "film_countries": [{ "film_id": 1, "country_id": 1 }],
//!   "film_directors": [{ "film_id": 1, "director_id": 1 }]
//! }
//! ```
//!
//! Missing tables default to empty. Loading goes through [`CatalogBuilder`], so a
//! snapshot is held to the same integrity rules as rows added in code.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{Catalog, CatalogBuilder, CatalogError};
use crate::model::{Actor, Country, Director, Film, FilmCountry, FilmDirector, Role};

/// Every table of a catalog, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub actors: Vec<Actor>,
    pub films: Vec<Film>,
    pub countries: Vec<Country>,
    pub directors: Vec<Director>,
    pub roles: Vec<Role>,
    pub film_countries: Vec<FilmCountry>,
    pub film_directors: Vec<FilmDirector>,
}

impl Catalog {
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self, CatalogError> {
        CatalogBuilder::from_snapshot(snapshot).build()
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json)
            .map_err(|e| CatalogError::DataAccess(format!("malformed catalog snapshot: {e}")))?;
        Self::from_snapshot(snapshot)
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!("Reading catalog snapshot");
        let json = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::DataAccess(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }
}
