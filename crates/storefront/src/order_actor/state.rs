//! [`ActorState`] implementation driving the [`OrderWorkflow`].
//!
//! The workflow itself is synchronous; this layer adds the two suspending pieces. The
//! order request runs in a spawned task that posts `SubmissionFinished`, and the notice
//! timer posts `NoticeExpired`. Both only hold the weak [`Mailbox`].
use super::draft::OrderSettings;
use super::workflow::{Completion, OrderWorkflow, SubmitStart};
use super::{OrderError, OrderEvent, OrderReply, OrderRequest};
use crate::api::SharedApi;
use crate::model::OrderResult;
use async_trait::async_trait;
use storefront_actor::{ActorState, Mailbox, Responder};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct OrderState {
    workflow: OrderWorkflow,
    /// Caller of the outstanding submission and the generation it was started for.
    waiting: Option<(u64, Responder<OrderReply>)>,
    notice_timer: Option<JoinHandle<()>>,
}

impl OrderState {
    pub fn new(settings: OrderSettings) -> Self {
        Self {
            workflow: OrderWorkflow::new(settings),
            waiting: None,
            notice_timer: None,
        }
    }

    fn cancel_notice_timer(&mut self) {
        if let Some(timer) = self.notice_timer.take() {
            timer.abort();
        }
    }

    /// Releases the caller of a submission whose draft no longer exists.
    fn release_superseded(&mut self) {
        if let Some((generation, responder)) = self.waiting.take() {
            debug!(generation, "Submission superseded");
            responder.err(OrderError::Superseded);
        }
    }

    fn start_notice_timer(&mut self, notice_id: u64, mailbox: &Mailbox<Self>) {
        self.cancel_notice_timer();
        let duration = self.workflow.settings().notice_duration;
        let mailbox = mailbox.clone();
        self.notice_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = mailbox.post(OrderEvent::NoticeExpired { notice_id }).await;
        }));
    }

    fn submit(&mut self, responder: Responder<OrderReply>, api: &SharedApi, mailbox: &Mailbox<Self>) {
        let pending = match self.workflow.begin_submit() {
            Ok(SubmitStart::Send(pending)) => pending,
            Ok(SubmitStart::Rejected(result)) => {
                self.cancel_notice_timer();
                responder.ok(OrderReply::Submitted(result));
                return;
            }
            Err(e) => {
                debug!(error = %e, "Submit refused");
                responder.err(e);
                return;
            }
        };
        self.cancel_notice_timer();

        info!(
            generation = pending.generation,
            product = %pending.payload.product_ids,
            cod_amount = %pending.payload.cod_amount,
            "Submitting order"
        );
        self.waiting = Some((pending.generation, responder));

        let api = api.clone();
        let mailbox = mailbox.clone();
        tokio::spawn(async move {
            let result = match api.place_order(&pending.payload).await {
                Ok(receipt) => OrderResult::from_receipt(&receipt),
                Err(e) => {
                    warn!(error = %e, "Order request failed");
                    OrderResult::transport_failure()
                }
            };
            let event = OrderEvent::SubmissionFinished {
                generation: pending.generation,
                result,
            };
            if mailbox.post(event).await.is_err() {
                debug!("Order actor gone before the response arrived");
            }
        });
    }

    fn finish(&mut self, generation: u64, result: OrderResult, mailbox: &Mailbox<Self>) {
        match self.workflow.complete_submit(generation, result) {
            Completion::Stale => {}
            Completion::Applied { result, notice } => {
                info!(
                    generation,
                    success = result.is_success(),
                    outcome = result.message(),
                    "Order completed"
                );
                if let Some(notice) = notice {
                    self.start_notice_timer(notice.id, mailbox);
                }
                match self.waiting.take() {
                    Some((waiting_for, responder)) if waiting_for == generation => {
                        if responder.is_closed() {
                            debug!(generation, "Submitter stopped waiting for the result");
                        } else {
                            responder.ok(OrderReply::Submitted(result));
                        }
                    }
                    Some(other) => self.waiting = Some(other),
                    None => {}
                }
            }
        }
    }
}

#[async_trait]
impl ActorState for OrderState {
    type Request = OrderRequest;
    type Reply = OrderReply;
    type Event = OrderEvent;
    type Context = SharedApi;
    type Error = OrderError;

    async fn handle_request(
        &mut self,
        request: OrderRequest,
        responder: Responder<OrderReply>,
        api: &SharedApi,
        mailbox: &Mailbox<Self>,
    ) {
        let reply = match request {
            OrderRequest::Select(product) => {
                self.release_superseded();
                self.cancel_notice_timer();
                info!(product = %product.id, product_name = %product.name, "Product selected");
                Ok(OrderReply::Draft(self.workflow.select_product(product)))
            }
            OrderRequest::OpenForm => self.workflow.open_order_form().map(|()| OrderReply::Done),
            OrderRequest::Close => {
                self.release_superseded();
                self.cancel_notice_timer();
                self.workflow.close();
                Ok(OrderReply::Done)
            }
            OrderRequest::SetQuantity(quantity) => {
                self.workflow.set_quantity(quantity).map(|()| OrderReply::Done)
            }
            OrderRequest::SetPhone(phone) => self.workflow.set_phone(phone).map(|()| OrderReply::Done),
            OrderRequest::SetAddress(address) => {
                self.workflow.set_address(address).map(|()| OrderReply::Done)
            }
            OrderRequest::Total => self.workflow.compute_total().map(OrderReply::Total),
            OrderRequest::Snapshot => Ok(OrderReply::Snapshot(self.workflow.snapshot())),
            OrderRequest::Submit => return self.submit(responder, api, mailbox),
        };
        match reply {
            Ok(reply) => responder.ok(reply),
            Err(e) => responder.err(e),
        };
    }

    async fn handle_event(&mut self, event: OrderEvent, _api: &SharedApi, mailbox: &Mailbox<Self>) {
        match event {
            OrderEvent::SubmissionFinished { generation, result } => {
                self.finish(generation, result, mailbox);
            }
            OrderEvent::NoticeExpired { notice_id } => {
                if self.workflow.dismiss_notice(notice_id) {
                    debug!(notice_id, "Notice expired");
                    self.notice_timer = None;
                }
            }
        }
    }

    fn on_stop(&mut self) {
        self.cancel_notice_timer();
        if self.workflow.is_in_flight() {
            warn!(generation = self.workflow.generation(), "Stopping with an order in flight");
        }
    }
}

