//! The pipeline coordinator.
//!
//! Sequences authenticate -> parse -> size -> sign -> dispatch for one raw
//! alert body, short-circuiting on the first failure. This is the only
//! component that knows the end-to-end order; everything it calls is
//! independently testable.

use std::sync::Arc;

use uuid::Uuid;

use auth::AlertAuthenticator;
use bitget_rest::BitgetRestClient;
use model::Alert;

use crate::dispatcher::{DispatchResult, OrderSubmitter};
use crate::error::RelayError;
use crate::parser::parse_alert;
use crate::sizing::{resolve_quantity, MarkPriceSource};

/// Prefix for generated client order IDs.
const ORDER_ID_PREFIX: &str = "relay";

/// Generate a unique client order ID.
///
/// Format: `{prefix}_{uuid}` where uuid is a v4 UUID in simple format
/// (no hyphens).
pub fn generate_client_order_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().as_simple())
}

/// The alert-to-order pipeline.
///
/// Holds only read-only state; one instance serves all requests
/// concurrently.
pub struct Pipeline {
    authenticator: AlertAuthenticator,
    client: Arc<BitgetRestClient>,
    price_source: Arc<dyn MarkPriceSource>,
    submitter: Arc<dyn OrderSubmitter>,
}

impl Pipeline {
    pub fn new(
        authenticator: AlertAuthenticator,
        client: Arc<BitgetRestClient>,
        price_source: Arc<dyn MarkPriceSource>,
        submitter: Arc<dyn OrderSubmitter>,
    ) -> Self {
        Self {
            authenticator,
            client,
            price_source,
            submitter,
        }
    }

    /// Handle one raw alert body end to end.
    ///
    /// # Errors
    /// The first failing stage wins; see [`RelayError`] for the mapping to
    /// HTTP statuses.
    pub async fn handle(&self, raw_body: &[u8]) -> Result<DispatchResult, RelayError> {
        // A body that does not even deserialize carries no verifiable
        // secret, so it fails closed as unauthorized.
        let alert = Alert::from_slice(raw_body).map_err(|e| {
            tracing::debug!(error = %e, "Alert body is not valid JSON");
            RelayError::Unauthorized
        })?;

        self.authenticator.authenticate(&alert)?;

        let draft = parse_alert(&alert)?;
        let quantity = resolve_quantity(&draft, self.price_source.as_ref()).await?;
        let intent = draft.into_intent(quantity)?;

        let client_order_id = generate_client_order_id(ORDER_ID_PREFIX);
        let timestamp_ms = self.client.timestamp_ms();
        let request = self
            .client
            .build_order_request(&intent, &client_order_id, timestamp_ms)?;

        tracing::info!(
            symbol = %intent.symbol,
            side = intent.side.as_bitget_str(),
            order_type = intent.order_type.as_bitget_str(),
            quantity = %intent.quantity,
            client_order_id = %client_order_id,
            "Dispatching order"
        );

        // Run the exchange call detached from the inbound connection: if the
        // caller disconnects mid-flight the order may already be placed, so
        // the call completes and its outcome is logged rather than aborted
        // into an ambiguous partial-order state.
        let submitter = Arc::clone(&self.submitter);
        let outcome = tokio::spawn(async move {
            let result = submitter.submit(&request, &client_order_id).await;

            match &result {
                Ok(r) => tracing::info!(
                    order_id = r.order_id(),
                    simulated = r.is_simulated(),
                    "Dispatch complete"
                ),
                Err(e) => tracing::warn!(error = %e, "Dispatch failed"),
            }
            result
        })
        .await
        .map_err(|e| RelayError::Transport(format!("dispatch task failed: {}", e)))?;

        Ok(outcome?)
    }
}
