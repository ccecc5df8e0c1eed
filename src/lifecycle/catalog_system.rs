use std::sync::Arc;

use tracing::{error, info};

use super::CatalogConfig;
use crate::catalog::{Catalog, CatalogError};
use crate::clients::CatalogClient;
use crate::framework::QueryActor;

/// The runtime orchestrator for the catalog service.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the query actor
/// - **Resource Coordination**: Sizing the request channel and the session pool
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(catalog);
///
/// let french = system.catalog_client.find_actors_by_country("France").await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for querying the catalog actor
    pub catalog_client: CatalogClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Starts the service with [`CatalogConfig::default`]. Must be called inside a Tokio runtime.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, CatalogConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: CatalogConfig) -> Self {
        info!(?config, "Starting catalog service");
        let (actor, client) =
            QueryActor::new(Arc::new(catalog), config.channel_capacity, config.pool_size);
        let handle = tokio::spawn(actor.run());

        Self {
            catalog_client: CatalogClient::new(client).with_timeout(config.query_timeout),
            handle,
        }
    }

    /// Stops the actor and waits for it to finish.
    ///
    /// The actor only stops once every clone of `catalog_client` has been dropped,
    /// so callers must release their clones first.
    pub async fn shutdown(self) -> Result<(), CatalogError> {
        info!("Shutting down catalog service...");

        // Dropping the last sender makes the actor's `recv()` return `None`.
        drop(self.catalog_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(CatalogError::DataAccess(format!("actor task failed: {e}")));
        }

        info!("Catalog service shutdown complete.");
        Ok(())
    }
}
