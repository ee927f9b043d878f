//! # Order Client
//!
//! Provides a high‑level API for interacting with the Order actor.
//! It wraps a `StateClient<OrderState>`; every method maps onto one workflow operation.
use crate::model::{OrderResult, Product};
use crate::order_actor::{OrderDraft, OrderError, OrderReply, OrderRequest, OrderSnapshot, OrderState, Quantity};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use storefront_actor::{ActorClient, FrameworkError, StateClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: StateClient<OrderState>,
}

impl OrderClient {
    pub fn new(inner: StateClient<OrderState>) -> Self {
        Self { inner }
    }

    /// Starts a fresh draft for `product`, discarding the previous one.
    #[instrument(skip(self, product), fields(product = %product.id))]
    pub async fn select(&self, product: Product) -> Result<OrderDraft, OrderError> {
        match self.call(OrderRequest::Select(Arc::new(product))).await? {
            OrderReply::Draft(draft) => Ok(draft),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn open_order_form(&self) -> Result<(), OrderError> {
        self.done(OrderRequest::OpenForm).await
    }

    #[instrument(skip(self))]
    pub async fn close(&self) -> Result<(), OrderError> {
        self.done(OrderRequest::Close).await
    }

    pub async fn set_quantity(&self, quantity: i64) -> Result<(), OrderError> {
        self.done(OrderRequest::SetQuantity(Quantity::Value(quantity))).await
    }

    /// Sets the quantity from raw field text; text that is not a number is kept as such.
    pub async fn set_quantity_text(&self, text: &str) -> Result<(), OrderError> {
        self.done(OrderRequest::SetQuantity(Quantity::parse(text))).await
    }

    pub async fn set_phone(&self, phone: impl Into<String>) -> Result<(), OrderError> {
        self.done(OrderRequest::SetPhone(phone.into())).await
    }

    pub async fn set_address(&self, address: impl Into<String>) -> Result<(), OrderError> {
        self.done(OrderRequest::SetAddress(address.into())).await
    }

    /// Amount to collect on delivery; `None` while the quantity is not a number.
    #[instrument(skip(self))]
    pub async fn total(&self) -> Result<Option<Decimal>, OrderError> {
        match self.call(OrderRequest::Total).await? {
            OrderReply::Total(total) => Ok(total),
            other => Err(unexpected(other)),
        }
    }

    /// Submits the current draft and waits for the outcome.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<OrderResult, OrderError> {
        info!("Submitting order");
        match self.call(OrderRequest::Submit).await? {
            OrderReply::Submitted(result) => {
                debug!(?result, "Submission answered");
                Ok(result)
            }
            other => Err(unexpected(other)),
        }
    }

    pub async fn snapshot(&self) -> Result<OrderSnapshot, OrderError> {
        match self.call(OrderRequest::Snapshot).await? {
            OrderReply::Snapshot(snapshot) => Ok(snapshot),
            other => Err(unexpected(other)),
        }
    }

    async fn done(&self, request: OrderRequest) -> Result<(), OrderError> {
        match self.call(request).await? {
            OrderReply::Done => Ok(()),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(reply: OrderReply) -> OrderError {
    OrderError::ActorCommunicationError(format!("unexpected reply: {reply:?}"))
}

#[async_trait]
impl ActorClient<OrderState> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StateClient<OrderState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_state::<OrderError>()
            .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_actor::mock::{create_mock_client, expect_request, MockClient};

    #[tokio::test]
    async fn test_quantity_text_is_parsed_before_sending() {
        let (client, mut receiver) = create_mock_client::<OrderState>(10);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move { orders.set_quantity_text("abc").await });

        let (request, responder) = expect_request(&mut receiver)
            .await
            .expect("Expected SetQuantity");
        assert!(matches!(request, OrderRequest::SetQuantity(Quantity::NotANumber)));
        responder.send(Ok(OrderReply::Done)).unwrap();

        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_submit_unwraps_result() {
        let mut mock = MockClient::<OrderState>::new();
        mock.expect_request()
            .matching(|request| matches!(request, OrderRequest::Submit))
            .return_ok(OrderReply::Submitted(OrderResult::failure("Out of stock")));
        mock.expect_request()
            .matching(|request| matches!(request, OrderRequest::Submit))
            .return_err(FrameworkError::StateError(Box::new(OrderError::SubmissionInFlight)));

        let orders = OrderClient::new(mock.client());
        assert_eq!(orders.submit().await, Ok(OrderResult::failure("Out of stock")));
        assert_eq!(orders.submit().await, Err(OrderError::SubmissionInFlight));
        mock.verify();
    }

    #[tokio::test]
    async fn test_dropped_reply_is_a_communication_error() {
        let (client, mut receiver) = create_mock_client::<OrderState>(10);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move { orders.total().await });
        let (_request, responder) = expect_request(&mut receiver).await.unwrap();
        drop(responder);

        assert!(matches!(
            task.await.unwrap(),
            Err(OrderError::ActorCommunicationError(_))
        ));
    }
}
