//! The order workflow as a plain state machine.
//!
//! ```text
//! Closed -> ProductSelected -> OrderFormOpen -> Submitting -> Closed        (success)
//!                                                          -> OrderFormOpen (failure)
//! ```
//!
//! [`OrderWorkflow`] does no I/O. Submission is split into [`OrderWorkflow::begin_submit`],
//! which validates and hands out the payload, and [`OrderWorkflow::complete_submit`],
//! which applies the outcome unless the draft has been superseded in the meantime.
use super::draft::{OrderDraft, OrderSettings, Quantity};
use super::error::OrderError;
use crate::model::{OrderPayload, OrderResult, Product};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderView {
    Closed,
    ProductSelected,
    OrderFormOpen,
    Submitting,
}

/// The success banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// A validated order, tagged with the draft generation it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub generation: u64,
    pub payload: OrderPayload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStart {
    /// Send this payload.
    Send(PendingSubmission),
    /// Validation failed; nothing to send.
    Rejected(OrderResult),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The draft changed since the submission started; the outcome was dropped.
    Stale,
    Applied {
        result: OrderResult,
        notice: Option<Notice>,
    },
}

/// Copy of everything a front end renders.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSnapshot {
    pub view: OrderView,
    pub draft: Option<OrderDraft>,
    pub total: Option<Decimal>,
    pub result: Option<OrderResult>,
    pub notice: Option<Notice>,
    pub in_flight: bool,
}

#[derive(Debug)]
pub struct OrderWorkflow {
    settings: OrderSettings,
    view: OrderView,
    draft: Option<OrderDraft>,
    result: Option<OrderResult>,
    notice: Option<Notice>,
    generation: u64,
    in_flight: bool,
    next_notice: u64,
}

impl OrderWorkflow {
    pub fn new(settings: OrderSettings) -> Self {
        Self {
            settings,
            view: OrderView::Closed,
            draft: None,
            result: None,
            notice: None,
            generation: 0,
            in_flight: false,
            next_notice: 0,
        }
    }

    pub fn settings(&self) -> &OrderSettings {
        &self.settings
    }

    pub fn view(&self) -> OrderView {
        self.view
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Replaces any current draft with a fresh one for `product`.
    pub fn select_product(&mut self, product: Arc<Product>) -> OrderDraft {
        self.supersede();
        let draft = OrderDraft::new(product);
        self.draft = Some(draft.clone());
        self.view = OrderView::ProductSelected;
        draft
    }

    pub fn open_order_form(&mut self) -> Result<(), OrderError> {
        if self.draft.is_none() {
            return Err(OrderError::NoProductSelected);
        }
        if !self.in_flight {
            self.view = OrderView::OrderFormOpen;
        }
        Ok(())
    }

    /// Closes whatever view is open and drops the draft.
    pub fn close(&mut self) {
        self.supersede();
        self.draft = None;
        self.view = OrderView::Closed;
    }

    fn supersede(&mut self) {
        self.generation += 1;
        self.in_flight = false;
        self.result = None;
        self.notice = None;
    }

    fn draft_mut(&mut self) -> Result<&mut OrderDraft, OrderError> {
        self.draft.as_mut().ok_or(OrderError::NoProductSelected)
    }

    pub fn set_quantity(&mut self, quantity: Quantity) -> Result<(), OrderError> {
        self.draft_mut()?.quantity = quantity;
        Ok(())
    }

    pub fn set_phone(&mut self, phone: String) -> Result<(), OrderError> {
        self.draft_mut()?.phone = phone;
        Ok(())
    }

    pub fn set_address(&mut self, address: String) -> Result<(), OrderError> {
        self.draft_mut()?.address = address;
        Ok(())
    }

    /// Total to collect for the current draft; `Ok(None)` while the quantity is not a number.
    pub fn compute_total(&self) -> Result<Option<Decimal>, OrderError> {
        let draft = self.draft.as_ref().ok_or(OrderError::NoProductSelected)?;
        Ok(draft.compute_total(self.settings.delivery_charge))
    }

    pub fn begin_submit(&mut self) -> Result<SubmitStart, OrderError> {
        if self.in_flight {
            return Err(OrderError::SubmissionInFlight);
        }
        self.result = None;
        self.notice = None;

        let payload = self
            .draft
            .as_ref()
            .and_then(|draft| draft.to_payload(&self.settings));
        let Some(payload) = payload else {
            let result = OrderResult::validation_failure();
            self.result = Some(result.clone());
            debug!("Order rejected by validation");
            return Ok(SubmitStart::Rejected(result));
        };

        self.in_flight = true;
        self.view = OrderView::Submitting;
        Ok(SubmitStart::Send(PendingSubmission {
            generation: self.generation,
            payload,
        }))
    }

    pub fn complete_submit(&mut self, generation: u64, result: OrderResult) -> Completion {
        if generation != self.generation || !self.in_flight {
            debug!(generation, current = self.generation, "Dropping stale order response");
            return Completion::Stale;
        }
        self.in_flight = false;

        let notice = match (&result, self.draft.as_mut()) {
            (OrderResult::Success { .. }, Some(draft)) => {
                let message = format!("Successfully ordered: {}", draft.product.name);
                draft.reset();
                self.view = OrderView::Closed;
                self.next_notice += 1;
                Some(Notice {
                    id: self.next_notice,
                    message,
                })
            }
            _ => {
                self.view = OrderView::OrderFormOpen;
                None
            }
        };
        self.notice = notice.clone();
        self.result = Some(result.clone());
        Completion::Applied { result, notice }
    }

    /// Clears the notice if it is still the one identified by `id`.
    pub fn dismiss_notice(&mut self, id: u64) -> bool {
        if self.notice.as_ref().is_some_and(|notice| notice.id == id) {
            self.notice = None;
            true
        } else {
            false
        }
    }

    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            view: self.view,
            draft: self.draft.clone(),
            total: self.compute_total().ok().flatten(),
            result: self.result.clone(),
            notice: self.notice.clone(),
            in_flight: self.in_flight,
        }
    }
}
