//! Bitget mix v1 REST contract.
//!
//! This crate owns everything provider-specific: the canonical order body
//! encoding, the `ACCESS-*` signing headers, the response envelope, and the
//! order / ticker / account endpoints. Bitget versions this contract, not
//! us — an API revision lands here and nowhere else.

mod client;
mod error;
mod request;
mod responses;

pub use client::BitgetRestClient;
pub use error::BitgetRestError;
pub use request::{PlaceOrderBody, SignedRequest};
pub use responses::{AccountData, BitgetResponse, PlaceOrderData, TickerData, SUCCESS_CODE};
