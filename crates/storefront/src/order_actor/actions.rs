//! Messages understood by the Order actor.
use super::draft::{OrderDraft, Quantity};
use super::workflow::OrderSnapshot;
use crate::model::{OrderResult, Product};
use rust_decimal::Decimal;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum OrderRequest {
    /// Start a fresh draft for this product. Replies with the draft.
    Select(Arc<Product>),
    OpenForm,
    Close,
    SetQuantity(Quantity),
    SetPhone(String),
    SetAddress(String),
    Total,
    /// Validate and send the current draft. Replies once the outcome is known.
    Submit,
    Snapshot,
}

/// Replies, one variant per kind of answer.
#[derive(Debug, Clone)]
pub enum OrderReply {
    Draft(OrderDraft),
    Done,
    Total(Option<Decimal>),
    Submitted(OrderResult),
    Snapshot(OrderSnapshot),
}

/// Completions posted back by work the actor spawned.
#[derive(Debug)]
pub enum OrderEvent {
    SubmissionFinished { generation: u64, result: OrderResult },
    NoticeExpired { notice_id: u64 },
}
