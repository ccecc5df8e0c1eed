//! # Movie Catalog Demo
//!
//! Loads a catalog snapshot and runs every catalog operation against it.
//!
//! ```bash
//! RUST_LOG=info cargo run -- tests/fixtures/movies.json
//! ```

use movie_catalog::catalog::Catalog;
use movie_catalog::lifecycle::{setup_tracing, CatalogConfig, CatalogSystem};
use movie_catalog::model::Actor;
use tracing::{info, Instrument};

fn names(actors: &[Actor]) -> Vec<&str> {
    actors.iter().map(|actor| actor.identity.as_str()).collect()
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| "usage: movie-catalog <snapshot.json>".to_string())?;
    let catalog = Catalog::from_json_file(&path).map_err(|e| e.to_string())?;

    let system = CatalogSystem::with_config(catalog, CatalogConfig::from_env());
    let client = &system.catalog_client;

    let span = tracing::info_span!("catalog_tour");
    async {
        let sorted = client.list_actors_sorted_by_identity().await?;
        let first = sorted.first().map(|a| &a.identity);
        info!(count = sorted.len(), ?first, "Actors by identity");

        let found = client.find_actors_by_identity("Marion Cotillard").await?;
        info!(actors = ?names(&found), "Identity = Marion Cotillard");

        let found = client.find_actors_by_birth_year(1985).await?;
        info!(actors = ?names(&found), "Born in 1985");

        let found = client.find_actors_by_role_name("Harley Quinn").await?;
        info!(actors = ?names(&found), "Played Harley Quinn");

        let found = client.find_actors_by_film_year(2015).await?;
        info!(count = found.len(), "Roles in films from 2015");

        let found = client.find_actors_by_country("France").await?;
        info!(count = found.len(), actors = ?names(&found), "French films");

        let found = client.find_actors_by_country_and_year("France", 2017).await?;
        info!(actors = ?names(&found), "French films from 2017");

        let found = client
            .find_actors_by_director_and_year_range("Ridley Scott", 2010, 2020)
            .await?;
        info!(actors = ?names(&found), "Directed by Ridley Scott, 2010-2020");

        Ok::<(), movie_catalog::catalog::CatalogError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
