//! # Order Actor
//!
//! Owns the cash-on-delivery workflow: one draft for the selected product, the
//! submission of that draft and the success notice that follows.
//!
//! ## Structure
//!
//! - [`draft`] - [`OrderDraft`], [`Quantity`] and the fixed [`OrderSettings`]
//! - [`workflow`] - [`OrderWorkflow`], the synchronous state machine
//! - [`state`] - [`OrderState`], which runs the workflow inside an actor
//! - [`actions`] - [`OrderRequest`], [`OrderReply`] and [`OrderEvent`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Submission
//!
//! ```rust,ignore
//! orders.select(product).await?;
//! orders.open_order_form().await?;
//! orders.set_quantity(3).await?;
//! orders.set_phone("01700000000").await?;
//! orders.set_address("House 1, Road 2, Dhaka").await?;
//!
//! match orders.submit().await? {
//!     OrderResult::Success { message } => println!("placed: {message}"),
//!     OrderResult::Failure { message } => eprintln!("{message}"),
//! }
//! ```
//!
//! Validation failures come back as `OrderResult::Failure` without any request being
//! made. While a submission is outstanding a second `submit` fails with
//! [`OrderError::SubmissionInFlight`]; selecting another product or closing the view
//! answers the waiting caller with [`OrderError::Superseded`] and the late response
//! is discarded.

pub mod actions;
pub mod draft;
pub mod error;
pub mod state;
pub mod workflow;

pub use actions::*;
pub use draft::{OrderDraft, OrderSettings, Quantity};
pub use error::*;
pub use state::OrderState;
pub use workflow::{Notice, OrderSnapshot, OrderView, OrderWorkflow};

use storefront_actor::{StateActor, StateClient};

/// Creates a new Order actor and its client.
pub fn new(settings: OrderSettings) -> (StateActor<OrderState>, StateClient<OrderState>) {
    StateActor::new(OrderState::new(settings), 32)
}
