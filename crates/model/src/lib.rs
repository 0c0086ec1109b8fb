//! Domain types for the alert-to-order relay.
//!
//! [`Alert`] is the raw inbound webhook payload; [`OrderDraft`] and
//! [`OrderIntent`] are the normalized representations the pipeline works
//! with. Every value here lives for a single request and is discarded when
//! the pipeline completes.

mod alert;
mod order;

pub use alert::Alert;
pub use order::{
    InvalidOrder, OrderDraft, OrderIntent, OrderSize, OrderType, PositionSide, MAX_LEVERAGE,
    MIN_LEVERAGE,
};
