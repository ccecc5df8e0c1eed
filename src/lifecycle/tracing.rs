//! # Observability & Tracing
//!
//! Structured logging for the catalog service, built on the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (with pool size), shutdown (with queries served)
//! - **Queries**: every request at `debug` with the full query, failures at `warn`
//! - **Client Calls**: one span per client method, carrying its arguments
//! - **Catalog Loading**: row counts once the catalog is built
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle only
//! RUST_LOG=info cargo run -- tests/fixtures/movies.json
//!
//! # Every query with its parameters
//! RUST_LOG=debug cargo run -- tests/fixtures/movies.json
//!
//! # Filter to the runtime
//! RUST_LOG=movie_catalog::framework=debug cargo run -- tests/fixtures/movies.json
//! ```
//!
//! With `RUST_LOG=debug` a single lookup reads:
//!
//! ```text
//! DEBUG find_actors_by_country{country="France"}: Sending request query="actors_by_country"
//! DEBUG Query handler_type="Catalog" query=ActorsByCountry { country: "France" }
//! DEBUG Executed query="actors_by_country" rows=6
//! DEBUG Query ok handler_type="Catalog"
//! ```

/// Initializes the tracing subscriber.
///
/// Filtering comes from `RUST_LOG`; output is compact and omits module paths.
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
