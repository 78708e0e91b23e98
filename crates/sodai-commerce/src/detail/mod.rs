//! Product detail view: the open/closed state machine and its projection.

mod modal;
mod view;

pub use modal::{Confirmed, DetailModal, DetailState, HistoryEffect};
pub use view::{DiscountView, ProductDetailView, RatingView};
