//! # Catalog Client
//!
//! Provides a high‑level API for interacting with the Catalog actor.
//! It wraps a `StateClient<CatalogState>` and unwraps the replies into plain values.
use crate::catalog_actor::{CatalogError, CatalogReply, CatalogRequest, CatalogState, CatalogStatus};
use crate::model::{Product, ProductId};
use async_trait::async_trait;
use storefront_actor::{ActorClient, FrameworkError, StateClient};
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: StateClient<CatalogState>,
}

impl CatalogClient {
    pub fn new(inner: StateClient<CatalogState>) -> Self {
        Self { inner }
    }

    /// Current load state, without waiting.
    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<CatalogStatus, CatalogError> {
        match self.call(CatalogRequest::Status).await? {
            CatalogReply::Status(status) => Ok(status),
            other => Err(unexpected(other)),
        }
    }

    /// Waits until the catalog is `Ready` or `Failed`.
    #[instrument(skip(self))]
    pub async fn settled(&self) -> Result<CatalogStatus, CatalogError> {
        debug!("Waiting for the catalog");
        match self.call(CatalogRequest::Settled).await? {
            CatalogReply::Status(status) => Ok(status),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        match self.call(CatalogRequest::Products).await? {
            CatalogReply::Products(products) => Ok(products.to_vec()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn find(&self, id: ProductId) -> Result<Product, CatalogError> {
        match self.call(CatalogRequest::Find(id)).await? {
            CatalogReply::Product(product) => Ok(product),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(reply: CatalogReply) -> CatalogError {
    CatalogError::ActorCommunicationError(format!("unexpected reply: {reply:?}"))
}

#[async_trait]
impl ActorClient<CatalogState> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &StateClient<CatalogState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_state::<CatalogError>()
            .unwrap_or_else(|e| CatalogError::ActorCommunicationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use storefront_actor::mock::{create_mock_client, expect_request, MockClient};

    #[tokio::test]
    async fn test_find_returns_product() {
        let (client, mut receiver) = create_mock_client::<CatalogState>(10);
        let catalog = CatalogClient::new(client);

        let find_task = tokio::spawn(async move { catalog.find(ProductId::from(3)).await });

        let (request, responder) = expect_request(&mut receiver)
            .await
            .expect("Expected a Find request");
        match request {
            CatalogRequest::Find(id) => assert_eq!(id, ProductId::from(3)),
            other => panic!("Expected Find, got {other:?}"),
        }
        responder
            .send(Ok(CatalogReply::Product(Product::new(3, "Kurti", Decimal::from(850), 2))))
            .unwrap();

        let product = find_task.await.unwrap().unwrap();
        assert_eq!(product.name, "Kurti");
    }

    #[tokio::test]
    async fn test_state_errors_are_recovered() {
        let mut mock = MockClient::<CatalogState>::new();
        mock.expect_request()
            .matching(|request| matches!(request, CatalogRequest::Products))
            .return_err(FrameworkError::StateError(Box::new(CatalogError::Loading)));

        let catalog = CatalogClient::new(mock.client());
        assert_eq!(catalog.products().await.unwrap_err(), CatalogError::Loading);
        mock.verify();
    }

    #[tokio::test]
    async fn test_wrong_reply_is_an_error() {
        let mut mock = MockClient::<CatalogState>::new();
        mock.expect_request()
            .return_ok(CatalogReply::Status(CatalogStatus::Loading));

        let catalog = CatalogClient::new(mock.client());
        assert!(matches!(
            catalog.find(ProductId::from(1)).await,
            Err(CatalogError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor() {
        let (client, receiver) = create_mock_client::<CatalogState>(1);
        drop(receiver);
        let catalog = CatalogClient::new(client);
        assert!(matches!(
            catalog.status().await,
            Err(CatalogError::ActorCommunicationError(_))
        ));
    }
}
