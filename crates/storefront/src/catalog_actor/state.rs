//! [`ActorState`] implementation backing the catalog.
use super::{CatalogError, CatalogEvent, CatalogReply, CatalogRequest, CatalogStatus};
use crate::api::SharedApi;
use storefront_actor::{ActorState, Mailbox, Responder};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Holds the catalog and the callers waiting for it to settle.
#[derive(Debug)]
pub struct CatalogState {
    status: CatalogStatus,
    waiting: Vec<Responder<CatalogReply>>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            status: CatalogStatus::Loading,
            waiting: Vec::new(),
        }
    }

    fn products(&self) -> Result<CatalogReply, CatalogError> {
        match &self.status {
            CatalogStatus::Ready(products) => Ok(CatalogReply::Products(products.clone())),
            CatalogStatus::Loading => Err(CatalogError::Loading),
            CatalogStatus::Failed(reason) => Err(CatalogError::Unavailable(reason.clone())),
        }
    }

    fn find(&self, id: &crate::model::ProductId) -> Result<CatalogReply, CatalogError> {
        let CatalogReply::Products(products) = self.products()? else {
            return Err(CatalogError::Loading);
        };
        products
            .iter()
            .find(|product| &product.id == id)
            .cloned()
            .map(CatalogReply::Product)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ActorState for CatalogState {
    type Request = CatalogRequest;
    type Reply = CatalogReply;
    type Event = CatalogEvent;
    type Context = SharedApi;
    type Error = CatalogError;

    /// Starts the one and only catalog fetch.
    async fn on_start(&mut self, api: &SharedApi, mailbox: &Mailbox<Self>) -> Result<(), CatalogError> {
        let api = api.clone();
        let mailbox = mailbox.clone();
        tokio::spawn(async move {
            let result = api.fetch_products().await;
            if mailbox.post(CatalogEvent::Loaded(result)).await.is_err() {
                debug!("Catalog actor gone before the fetch finished");
            }
        });
        info!("Catalog fetch started");
        Ok(())
    }

    async fn handle_request(
        &mut self,
        request: CatalogRequest,
        responder: Responder<CatalogReply>,
        _api: &SharedApi,
        _mailbox: &Mailbox<Self>,
    ) {
        match request {
            CatalogRequest::Status => {
                responder.ok(CatalogReply::Status(self.status.clone()));
            }
            CatalogRequest::Settled if self.status.is_loading() => self.waiting.push(responder),
            CatalogRequest::Settled => {
                responder.ok(CatalogReply::Status(self.status.clone()));
            }
            CatalogRequest::Products => {
                let _ = match self.products() {
                    Ok(reply) => responder.ok(reply),
                    Err(e) => responder.err(e),
                };
            }
            CatalogRequest::Find(id) => {
                let _ = match self.find(&id) {
                    Ok(reply) => responder.ok(reply),
                    Err(e) => responder.err(e),
                };
            }
        }
    }

    async fn handle_event(&mut self, event: CatalogEvent, _api: &SharedApi, _mailbox: &Mailbox<Self>) {
        let CatalogEvent::Loaded(result) = event;
        if !self.status.is_loading() {
            warn!("Ignoring a second catalog load");
            return;
        }
        self.status = match result {
            Ok(products) => {
                info!(count = products.len(), "Catalog ready");
                CatalogStatus::Ready(products.into())
            }
            Err(e) => {
                warn!(error = %e, "Catalog fetch failed");
                CatalogStatus::Failed(e.to_string())
            }
        };
        for responder in self.waiting.drain(..) {
            responder.ok(CatalogReply::Status(self.status.clone()));
        }
    }

    fn on_stop(&mut self) {
        debug!(waiting = self.waiting.len(), "Catalog actor stopping");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};
    use rust_decimal::Decimal;

    fn ready() -> CatalogState {
        let mut state = CatalogState::new();
        state.status = CatalogStatus::Ready(
            vec![
                Product::new(1, "Kurti", Decimal::from(850), 3),
                Product::new(2, "Saree", Decimal::from(1200), 10),
            ]
            .into(),
        );
        state
    }

    #[test]
    fn test_find_in_ready_catalog() {
        let state = ready();
        match state.find(&ProductId::from(2)) {
            Ok(CatalogReply::Product(product)) => assert_eq!(product.name, "Saree"),
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(
            state.find(&ProductId::from(9)).unwrap_err(),
            CatalogError::NotFound("9".into())
        );
    }

    #[test]
    fn test_products_before_and_after_failure() {
        let mut state = CatalogState::new();
        assert_eq!(state.products().unwrap_err(), CatalogError::Loading);

        state.status = CatalogStatus::Failed("HTTP error: status 500".into());
        assert_eq!(
            state.find(&ProductId::from(1)).unwrap_err(),
            CatalogError::Unavailable("HTTP error: status 500".into())
        );
    }
}
