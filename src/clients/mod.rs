//! Type-safe wrappers around [`QueryClient`](crate::framework::QueryClient).

pub mod catalog_client;

pub use catalog_client::*;
