//! The alert-to-order relay pipeline.
//!
//! Receives raw TradingView alert bodies and turns them into signed Bitget
//! order placements:
//!
//! ```text
//! raw body -> authenticate -> parse -> resolve size -> sign -> dispatch
//! ```
//!
//! Authentication and signing live in the `auth` crate, the exchange
//! contract in `bitget-rest`; this crate owns the normalization, the
//! dispatch seam ([`OrderSubmitter`], with dry-run as a first-class
//! implementation), and the error taxonomy the HTTP layer maps to statuses.

mod dispatcher;
mod error;
mod parser;
mod pipeline;
mod sizing;

pub use dispatcher::{DispatchResult, DryRunSubmitter, LiveOrderSubmitter, OrderSubmitter};
pub use error::RelayError;
pub use parser::parse_alert;
pub use pipeline::{generate_client_order_id, Pipeline};
pub use sizing::{resolve_quantity, MarkPriceSource};
