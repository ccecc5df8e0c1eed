//! # Movie Catalog
//!
//! > **Read-only queries over a movie database, served by a Tokio actor.**
//!
//! The catalog holds five kinds of rows (actors, roles, films, countries, directors)
//! and answers a fixed set of eight questions about actors: sorted listing, lookup by
//! name, by birth year, by role, by film year, by country, by country and year, and by
//! director over a range of years.
//!
//! ## 🏗️ Design
//!
//! ### Store + Actor
//! The [`Catalog`](catalog::Catalog) is an immutable relational store. It is shared
//! behind an `Arc` by a [`QueryActor`](framework::QueryActor), which receives requests
//! over a channel and runs each one on a pooled [`Session`](framework::Session). No
//! query mutates anything, so queries run concurrently and need no locks.
//!
//! ### Type-Safe Queries
//! Each operation is a [`CatalogQuery`](catalog::CatalogQuery) variant. Callers never
//! send query text; the eight variants are the entire surface.
//!
//! ### Errors
//! Every operation returns [`CatalogError`](catalog::CatalogError):
//! - `InvalidArgument` for an implausible year,
//! - `DataAccess` when the service or the store cannot be reached,
//! - `Timeout` when the caller's deadline passes.
//!
//! An empty result is never an error.
//!
//! ### Distinct Results
//! Queries joining through roles to countries or directors deduplicate on
//! [`ActorId`](model::ActorId). Names are not unique, so two actors sharing a stage
//! name both appear.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic query actor, client, session pool and mocks.
//! - **Key items**: [`QueryHandler`](framework::QueryHandler), [`QueryActor`](framework::QueryActor), [`QueryClient`](framework::QueryClient).
//!
//! ### 2. The Store ([`catalog`], [`model`])
//! Rows, tables, joins, snapshot loading.
//! - **Key items**: [`Catalog`](catalog::Catalog), [`CatalogBuilder`](catalog::CatalogBuilder), [`Actor`](model::Actor).
//!
//! ### 3. The Interface ([`clients`])
//! One async method per operation, with validation and deadlines.
//! - **Key items**: [`CatalogClient`](clients::CatalogClient).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Startup, configuration, shutdown, logging.
//! - **Key items**: [`CatalogSystem`](lifecycle::CatalogSystem), [`CatalogConfig`](lifecycle::CatalogConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run every query against the bundled fixture
//! RUST_LOG=info cargo run -- tests/fixtures/movies.json
//!
//! # Run the tests
//! cargo test
//! ```

pub mod catalog;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
