//! Core building blocks of the query runtime.
//!
//! A [`QueryActor`] owns the receiving end of a channel and a [`SessionPool`] over a
//! shared [`QueryHandler`]. A [`QueryClient`] is the cheap, cloneable sending end.
//! Every request carries a oneshot sender for its reply.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use super::pool::SessionPool;

/// Deadline applied by a [`QueryClient`] until the caller picks another one.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// A read-only store that answers typed queries.
///
/// # Architecture Note
/// The runtime is written once against this trait. The store decides what a query
/// is (`Query`), what it yields (`Output`) and how it fails (`Error`); the actor
/// only moves requests and replies around.
///
/// `Error` must absorb [`FrameworkError`] so that transport failures (closed actor,
/// elapsed deadline) reach the caller through the same type as store failures.
#[async_trait]
pub trait QueryHandler: Send + Sync + 'static {
    /// The request payload, usually an enum with one variant per operation.
    type Query: Send + Sync + Debug + 'static;

    /// The result of a successful query.
    type Output: Send + Debug + 'static;

    /// The error type for this store.
    type Error: std::error::Error + From<FrameworkError> + Send + Sync + 'static;

    /// Execute one query. Must not mutate shared state.
    async fn handle(&self, query: Self::Query) -> Result<Self::Output, Self::Error>;
}

// =============================================================================
// 2. THE MESSAGES & ERRORS
// =============================================================================

/// Errors raised by the runtime itself rather than by the store.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Session pool closed")]
    PoolClosed,
    #[error("Query timed out after {0:?}")]
    Timeout(Duration),
}

/// One-shot reply channel for a single query.
pub type Response<H> =
    oneshot::Sender<Result<<H as QueryHandler>::Output, <H as QueryHandler>::Error>>;

/// Message sent from a [`QueryClient`] to its [`QueryActor`].
#[derive(Debug)]
pub struct QueryRequest<H: QueryHandler> {
    pub query: H::Query,
    pub respond_to: Response<H>,
}

// =============================================================================
// 3. THE ACTOR SERVER
// =============================================================================

/// Serves queries for one [`QueryHandler`].
///
/// Requests are received sequentially, but each one runs in its own task holding a
/// pooled [`Session`](super::pool::Session), so up to `pool_size` queries execute
/// concurrently. A session is released when its task ends, whatever the outcome.
pub struct QueryActor<H: QueryHandler> {
    receiver: mpsc::Receiver<QueryRequest<H>>,
    pool: SessionPool<H>,
}

impl<H: QueryHandler> QueryActor<H> {
    /// Creates the actor and its client.
    ///
    /// # Arguments
    ///
    /// * `handler` - The store every session borrows.
    /// * `buffer_size` - Capacity of the request channel. When full, clients wait.
    /// * `pool_size` - Number of queries allowed to run at once.
    pub fn new(handler: Arc<H>, buffer_size: usize, pool_size: usize) -> (Self, QueryClient<H>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            pool: SessionPool::new(handler, pool_size),
        };
        (actor, QueryClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Catalog" instead of "movie_catalog::catalog::Catalog")
        let handler_type = std::any::type_name::<H>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(handler_type, sessions = self.pool.capacity(), "Actor started");

        let mut served: u64 = 0;
        while let Some(QueryRequest { query, mut respond_to }) = self.receiver.recv().await {
            if respond_to.is_closed() {
                debug!(handler_type, ?query, "Caller gone, skipping");
                continue;
            }
            debug!(handler_type, ?query, "Query");

            let acquired = tokio::select! {
                acquired = self.pool.acquire() => acquired,
                _ = respond_to.closed() => {
                    debug!(handler_type, "Caller gone while waiting for a session");
                    continue;
                }
            };
            let session = match acquired {
                Ok(session) => session,
                Err(e) => {
                    warn!(handler_type, error = %e, "No session available");
                    let _ = respond_to.send(Err(e.into()));
                    continue;
                }
            };
            served += 1;

            // The session lives as long as this task, so a caller that gives up
            // hands it back immediately.
            tokio::spawn(async move {
                let result = tokio::select! {
                    result = session.handler().handle(query) => result,
                    _ = respond_to.closed() => {
                        debug!(handler_type, "Caller gone, cancelling");
                        return;
                    }
                };
                match &result {
                    Ok(_) => debug!(handler_type, "Query ok"),
                    Err(e) => warn!(handler_type, error = %e, "Query failed"),
                }
                let _ = respond_to.send(result);
            });
        }

        self.pool.close();
        info!(handler_type, served, "Shutdown");
    }
}

// =============================================================================
// 4. THE CLIENT
// =============================================================================

/// A type-safe handle for sending queries to a [`QueryActor`].
///
/// Cloning is cheap: a clone shares the channel and keeps the deadline of the
/// original.
pub struct QueryClient<H: QueryHandler> {
    sender: mpsc::Sender<QueryRequest<H>>,
    timeout: Duration,
}

impl<H: QueryHandler> Clone for QueryClient<H> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            timeout: self.timeout,
        }
    }
}

impl<H: QueryHandler> QueryClient<H> {
    pub fn new(sender: mpsc::Sender<QueryRequest<H>>) -> Self {
        Self {
            sender,
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Returns a client whose calls give up after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends `query` and waits for the reply, bounded by the client's deadline.
    ///
    /// The deadline covers both queueing and execution. On expiry the query is
    /// cancelled on the actor side, its session goes back to the pool, and
    /// [`FrameworkError::Timeout`] is returned through `H::Error`.
    pub async fn query(&self, query: H::Query) -> Result<H::Output, H::Error> {
        let deadline = self.timeout;
        match tokio::time::timeout(deadline, self.send(query)).await {
            Ok(result) => result,
            Err(_) => Err(FrameworkError::Timeout(deadline).into()),
        }
    }

    async fn send(&self, query: H::Query) -> Result<H::Output, H::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(QueryRequest { query, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
