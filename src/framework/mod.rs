//! Generic query runtime.
//!
//! This module provides the building blocks for serving read-only queries from a shared
//! store over Tokio channels.
//!
//! # Main Components
//!
//! - [`QueryHandler`] - Trait a store implements to be served by the runtime
//! - [`QueryActor`] - Task that receives requests and runs them on pooled sessions
//! - [`QueryClient`] - Cloneable, deadline-aware handle for sending queries
//! - [`SessionPool`] / [`Session`] - Scoped leases bounding concurrent queries
//! - [`FrameworkError`] - Transport and runtime failures
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning the actor.

pub mod core;
pub mod mock;
pub mod pool;

pub use self::core::*;
pub use self::pool::{Session, SessionPool};
