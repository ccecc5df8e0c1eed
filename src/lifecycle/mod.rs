//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the catalog service: creating the query
//! actor, sizing it from configuration, and shutting it down cleanly.
//!
//! ## Startup
//!
//! ```rust,ignore
//! let catalog = Catalog::from_json_file("movies.json")?;
//! let system = CatalogSystem::with_config(catalog, CatalogConfig::from_env());
//! ```
//!
//! [`CatalogSystem::with_config`] wraps the catalog in an `Arc`, creates the
//! [`QueryActor`](crate::framework::QueryActor) and its client, spawns the actor, and
//! applies the configured deadline to the client.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor cleans up** - Closes the session pool, logs how many queries it served
//! 4. **Await completion** - [`CatalogSystem::shutdown`] waits for the actor task
//!
//! Queries already running keep their sessions until they finish.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging; see the [`tracing`] module.

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use self::catalog_system::*;
pub use self::config::*;
pub use self::tracing::setup_tracing;
