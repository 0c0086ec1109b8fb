//! Webhook listener for the alert relay.
//!
//! A thin axum wrapper around the pipeline: one POST route for alerts, one
//! health route, and the mapping from [`relay::RelayError`] to HTTP
//! statuses. Everything interesting happens in the `relay` crate.

mod error;
mod router;

pub use error::{ApiError, ErrorResponse};
pub use router::{create_router, AppState};
