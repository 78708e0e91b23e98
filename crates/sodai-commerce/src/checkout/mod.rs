//! Checkout module.
//!
//! Contains the checkout form, the order payload and the submission state.

mod order;
mod submit;

pub use order::{CheckoutForm, OrderReply, OrderRequest};
pub use submit::{CheckoutSubmitter, SubmitButton, SubmitOutcome};
