//! Pooled sessions over a shared store.
//!
//! A [`Session`] is a scoped lease: it pairs a semaphore permit with a handle to the
//! store and gives the permit back when dropped. Sessions therefore cannot leak on
//! early returns, errors or panics inside a query task.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use super::core::{FrameworkError, QueryHandler};

/// Fixed-size pool of sessions for one store.
pub struct SessionPool<H> {
    handler: Arc<H>,
    permits: Arc<Semaphore>,
    capacity: usize,
}

impl<H: QueryHandler> SessionPool<H> {
    /// A pool of `capacity` sessions. A capacity of zero is raised to one.
    pub fn new(handler: Arc<H>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            handler,
            permits: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Waits for a free session.
    ///
    /// Fails with [`FrameworkError::PoolClosed`] once [`close`](Self::close) has been
    /// called, including for callers already waiting.
    pub async fn acquire(&self) -> Result<Session<H>, FrameworkError> {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_| FrameworkError::PoolClosed)?;
        Ok(Session {
            handler: Arc::clone(&self.handler),
            _permit: permit,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sessions not currently leased.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Refuses new leases. Sessions already out stay valid until dropped.
    pub fn close(&self) {
        self.permits.close();
    }
}

/// A leased connection to the store.
pub struct Session<H> {
    handler: Arc<H>,
    _permit: OwnedSemaphorePermit,
}

impl<H> Session<H> {
    pub fn handler(&self) -> &H {
        &self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Noop;

    #[async_trait]
    impl QueryHandler for Noop {
        type Query = ();
        type Output = ();
        type Error = FrameworkError;

        async fn handle(&self, _query: ()) -> Result<(), FrameworkError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_session_released_on_drop() {
        let pool = SessionPool::new(Arc::new(Noop), 2);
        assert_eq!(pool.available(), 2);

        let first = pool.acquire().await.unwrap();
        let second = pool.acquire().await.unwrap();
        assert_eq!(pool.available(), 0);

        drop(first);
        assert_eq!(pool.available(), 1);
        drop(second);
        assert_eq!(pool.available(), 2);
    }

    #[tokio::test]
    async fn test_session_released_when_task_panics() {
        let pool = SessionPool::new(Arc::new(Noop), 1);
        let session = pool.acquire().await.unwrap();

        let task = tokio::spawn(async move {
            let _session = session;
            panic!("query blew up");
        });
        assert!(task.await.is_err());
        assert_eq!(pool.available(), 1);
    }

    #[tokio::test]
    async fn test_closed_pool_refuses_sessions() {
        let pool = SessionPool::new(Arc::new(Noop), 1);
        pool.close();
        assert!(matches!(
            pool.acquire().await,
            Err(FrameworkError::PoolClosed)
        ));
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let pool = SessionPool::new(Arc::new(Noop), 0);
        assert_eq!(pool.capacity(), 1);
    }
}
