mod common;

use std::collections::HashSet;
use std::time::Duration;

use common::{fixture_catalog, names};
use movie_catalog::catalog::CatalogError;
use movie_catalog::lifecycle::{CatalogConfig, CatalogSystem};
use movie_catalog::model::ActorId;

#[tokio::test]
async fn test_list_actors_sorted_by_identity() {
    let system = CatalogSystem::new(fixture_catalog());

    let actors = system
        .catalog_client
        .list_actors_sorted_by_identity()
        .await
        .expect("Failed to list actors");

    assert_eq!(actors.len(), 21);
    assert_eq!(actors[0].identity, "Adam Driver");
    assert_eq!(actors[20].identity, "Will Smith");
    assert!(actors.windows(2).all(|pair| pair[0].identity <= pair[1].identity));

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_find_actors_by_identity() {
    let system = CatalogSystem::new(fixture_catalog());
    let client = &system.catalog_client;

    let actors = client.find_actors_by_identity("Marion Cotillard").await.unwrap();
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].identity, "Marion Cotillard");

    // exact match only
    assert!(client.find_actors_by_identity("Marion").await.unwrap().is_empty());
    assert!(client.find_actors_by_identity("Nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_actors_by_birth_year() {
    let system = CatalogSystem::new(fixture_catalog());

    let actors = system.catalog_client.find_actors_by_birth_year(1985).await.unwrap();

    assert_eq!(names(&actors), vec!["Keira Knightley", "Rooney Mara"]);
    assert!(actors.iter().all(|actor| actor.birth_year() == Some(1985)));
}

#[tokio::test]
async fn test_find_actors_by_role_name_keeps_one_entry_per_role() {
    let system = CatalogSystem::new(fixture_catalog());

    let actors = system
        .catalog_client
        .find_actors_by_role_name("Harley Quinn")
        .await
        .unwrap();

    assert_eq!(names(&actors), vec!["Margot Robbie", "Margot Robbie"]);
}

#[tokio::test]
async fn test_find_actors_by_film_year() {
    let system = CatalogSystem::new(fixture_catalog());
    let client = &system.catalog_client;

    let actors = client.find_actors_by_film_year(2015).await.unwrap();
    assert_eq!(names(&actors), vec!["Matt Damon", "Jessica Chastain"]);

    // Fassbender plays two roles in Alien: Covenant
    let actors = client.find_actors_by_film_year(2017).await.unwrap();
    assert_eq!(actors.len(), 7);
    assert_eq!(
        actors.iter().filter(|a| a.identity == "Michael Fassbender").count(),
        2
    );
}

#[tokio::test]
async fn test_find_actors_by_country_is_distinct() {
    let system = CatalogSystem::new(fixture_catalog());
    let client = &system.catalog_client;

    let actors = client.find_actors_by_country("France").await.unwrap();
    assert_eq!(
        names(&actors),
        vec![
            "Cara Delevingne",
            "Dane DeHaan",
            "Rihanna",
            "Scarlett Johansson",
            "Marion Cotillard",
            "Guillaume Canet",
        ]
    );

    let ids: HashSet<ActorId> = actors.iter().map(|actor| actor.id).collect();
    assert_eq!(ids.len(), actors.len());

    assert_eq!(client.find_actors_by_country("USA").await.unwrap().len(), 15);
    assert!(client.find_actors_by_country("Narnia").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_country_and_year_is_an_intersection() {
    let system = CatalogSystem::new(fixture_catalog());
    let client = &system.catalog_client;

    let both = client
        .find_actors_by_country_and_year("France", 2017)
        .await
        .unwrap();
    let by_country = client.find_actors_by_country("France").await.unwrap();
    let by_year = client.find_actors_by_film_year(2017).await.unwrap();

    assert_eq!(both.len(), 5);
    assert!(both.iter().all(|actor| by_country.contains(actor)));
    assert!(both.iter().all(|actor| by_year.contains(actor)));
    // Scarlett Johansson's French film is from 2014
    assert!(!names(&both).contains(&"Scarlett Johansson"));
}

#[tokio::test]
async fn test_find_actors_by_director_and_year_range() {
    let system = CatalogSystem::new(fixture_catalog());
    let client = &system.catalog_client;

    let actors = client
        .find_actors_by_director_and_year_range("Ridley Scott", 2010, 2020)
        .await
        .unwrap();

    // Robin Hood (2010) is on the lower bound; Gladiator (2000) and The Last Duel
    // (2021) are outside; Fassbender is in two Scott films but listed once
    assert_eq!(
        names(&actors),
        vec![
            "Matt Damon",
            "Jessica Chastain",
            "Russell Crowe",
            "Michael Fassbender",
        ]
    );

    // "Scott" also matches Tony Scott
    let actors = client
        .find_actors_by_director_and_year_range("Scott", 1980, 2020)
        .await
        .unwrap();
    assert!(names(&actors).contains(&"Tom Cruise"));

    let actors = client
        .find_actors_by_director_and_year_range("Ridley Scott", 2021, 2021)
        .await
        .unwrap();
    assert_eq!(
        names(&actors),
        vec!["Adam Driver", "Matt Damon", "Jodie Comer"]
    );
}

#[tokio::test]
async fn test_queries_are_idempotent() {
    let system = CatalogSystem::new(fixture_catalog());
    let client = &system.catalog_client;

    for _ in 0..3 {
        assert_eq!(
            client.find_actors_by_country("France").await.unwrap(),
            client.find_actors_by_country("France").await.unwrap()
        );
        assert_eq!(
            client.list_actors_sorted_by_identity().await.unwrap(),
            client.list_actors_sorted_by_identity().await.unwrap()
        );
    }
}

#[tokio::test]
async fn test_invalid_years_are_rejected() {
    let system = CatalogSystem::new(fixture_catalog());
    let client = &system.catalog_client;

    assert!(matches!(
        client.find_actors_by_birth_year(-1).await,
        Err(CatalogError::InvalidArgument(_))
    ));
    assert!(matches!(
        client.find_actors_by_country_and_year("France", 0).await,
        Err(CatalogError::InvalidArgument(_))
    ));
    assert!(matches!(
        client
            .find_actors_by_director_and_year_range("Ridley Scott", -2010, 2020)
            .await,
        Err(CatalogError::InvalidArgument(_))
    ));
    // a plausible year with no films is just empty
    assert!(client.find_actors_by_film_year(1900).await.unwrap().is_empty());
}

/// Many concurrent callers sharing one service.
#[tokio::test]
async fn test_concurrent_queries() {
    let system = CatalogSystem::new(fixture_catalog());

    let mut handles = vec![];
    for i in 0..20 {
        let client = system.catalog_client.clone();
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                client.find_actors_by_country("France").await.map(|a| a.len())
            } else {
                client.find_actors_by_role_name("Harley Quinn").await.map(|a| a.len())
            }
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let count = handle.await.unwrap().unwrap();
        assert_eq!(count, if i % 2 == 0 { 6 } else { 2 });
    }

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_configured_deadline_reaches_the_client() {
    let config = CatalogConfig {
        query_timeout: Duration::from_millis(750),
        ..CatalogConfig::default()
    };
    let system = CatalogSystem::with_config(fixture_catalog(), config);
    assert_eq!(system.catalog_client.timeout(), Duration::from_millis(750));

    let default = CatalogSystem::new(fixture_catalog());
    assert_eq!(
        default.catalog_client.timeout(),
        movie_catalog::framework::DEFAULT_QUERY_TIMEOUT
    );

    system.shutdown().await.expect("Failed to shutdown system");
    default.shutdown().await.expect("Failed to shutdown system");
}
