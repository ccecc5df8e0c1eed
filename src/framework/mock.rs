//! # Mock Framework & Testing Guide
//!
//! Utilities for testing code that sits *in front of* a [`QueryClient`] without
//! spawning a [`QueryActor`](crate::framework::QueryActor) or building a store.
//!
//! ## When to use Mocks vs the Real Actor
//!
//! | Feature | Mock | Real Actor |
//! |---------|------|------------|
//! | **Speed** | Instant | Fast (spawns tasks) |
//! | **Determinism** | Fully scripted | Subject to scheduler |
//! | **Use Case** | Client wrappers: validation, error mapping, deadlines | Query semantics, end-to-end |
//! | **Error Injection** | Trivial (`return_err`) | Needs a failing store |
//!
//! ## Pattern 0: Inspect the request
//!
//! [`create_mock_client`] hands back the receiving end of the channel. The test pulls
//! requests with [`expect_query`], asserts on them, and answers (or deliberately does
//! not answer, to exercise a timeout).
//!
//! ```rust
//! use movie_catalog::catalog::{Catalog, CatalogQuery};
//! use movie_catalog::clients::CatalogClient;
//! use movie_catalog::framework::mock::{create_mock_client, expect_query};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client::<Catalog>(4);
//!     let catalog_client = CatalogClient::new(client);
//!
//!     let task = tokio::spawn(async move { catalog_client.find_actors_by_film_year(2015).await });
//!
//!     let (query, responder) = expect_query(&mut receiver).await.unwrap();
//!     assert_eq!(query, CatalogQuery::ActorsByFilmYear { year: 2015 });
//!     responder.send(Ok(Vec::new())).unwrap();
//!
//!     assert!(task.await.unwrap().unwrap().is_empty());
//! }
//! ```
//!
//! ## Pattern 1: Scripted replies
//!
//! [`MockClient`] answers requests in order from a queue of expectations.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use super::core::{QueryClient, QueryHandler, QueryRequest, Response};

/// Creates a client and the receiver its requests land on.
pub fn create_mock_client<H: QueryHandler>(
    buffer_size: usize,
) -> (QueryClient<H>, mpsc::Receiver<QueryRequest<H>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (QueryClient::new(sender), receiver)
}

/// Waits for the next request and splits it into query and responder.
pub async fn expect_query<H: QueryHandler>(
    receiver: &mut mpsc::Receiver<QueryRequest<H>>,
) -> Option<(H::Query, Response<H>)> {
    receiver
        .recv()
        .await
        .map(|QueryRequest { query, respond_to }| (query, respond_to))
}

type Expectations<H> =
    Arc<Mutex<VecDeque<Result<<H as QueryHandler>::Output, <H as QueryHandler>::Error>>>>;

/// A mock client that replies from a queue of scripted results.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Catalog>::new();
/// mock.expect_query().return_ok(vec![actor]);
/// mock.expect_query().return_err(CatalogError::DataAccess("offline".into()));
///
/// let client = CatalogClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<H: QueryHandler> {
    client: QueryClient<H>,
    expectations: Expectations<H>,
    received: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<H: QueryHandler> Default for MockClient<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: QueryHandler> MockClient<H> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<QueryRequest<H>>(100);
        let expectations: Expectations<H> = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = Arc::clone(&expectations);
        let received_clone = Arc::clone(&received);

        let handle = tokio::spawn(async move {
            while let Some(QueryRequest { query, respond_to }) = receiver.recv().await {
                received_clone.lock().unwrap().push(format!("{query:?}"));
                let next = expectations_clone.lock().unwrap().pop_front();
                match next {
                    Some(response) => {
                        let _ = respond_to.send(response);
                    }
                    None => panic!("Unexpected query: {query:?}"),
                }
            }
        });

        Self {
            client: QueryClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> QueryClient<H> {
        self.client.clone()
    }

    /// Queues the reply for the next query.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<H> {
        QueryExpectationBuilder {
            expectations: Arc::clone(&self.expectations),
        }
    }

    /// Debug renderings of every query received so far.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    /// Panics if scripted replies remain unused.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for a single scripted reply.
pub struct QueryExpectationBuilder<H: QueryHandler> {
    expectations: Expectations<H>,
}

impl<H: QueryHandler> QueryExpectationBuilder<H> {
    pub fn return_ok(self, output: H::Output) {
        self.expectations.lock().unwrap().push_back(Ok(output));
    }

    pub fn return_err(self, error: H::Error) {
        self.expectations.lock().unwrap().push_back(Err(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogError, CatalogQuery};
    use crate::model::{Actor, ActorId};

    #[tokio::test]
    async fn test_mock_client_inspects_request() {
        let (client, mut receiver) = create_mock_client::<Catalog>(4);

        let task =
            tokio::spawn(async move { client.query(CatalogQuery::ActorsSortedByIdentity).await });

        let (query, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected a query");
        assert_eq!(query, CatalogQuery::ActorsSortedByIdentity);
        responder
            .send(Ok(vec![Actor::new(ActorId(1), "A.J. Danna", None)]))
            .unwrap();

        let actors = task.await.unwrap().unwrap();
        assert_eq!(actors[0].identity, "A.J. Danna");
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Catalog>::new();
        mock.expect_query().return_ok(Vec::new());
        mock.expect_query()
            .return_err(CatalogError::DataAccess("offline".into()));

        let client = mock.client();
        assert!(client
            .query(CatalogQuery::ActorsByFilmYear { year: 1999 })
            .await
            .unwrap()
            .is_empty());
        let err = client
            .query(CatalogQuery::ActorsByFilmYear { year: 2000 })
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::DataAccess("offline".into()));

        assert_eq!(mock.received().len(), 2);
        mock.verify();
    }
}
