//! Order dispatch: the live/dry-run seam.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use bitget_rest::{BitgetRestClient, BitgetRestError, SignedRequest};

/// Counter for generating unique simulated order IDs.
static SIMULATED_ORDER_ID: AtomicU64 = AtomicU64::new(1_000_000);

/// Outcome of dispatching a signed request.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchResult {
    /// The exchange confirmed the order.
    Placed {
        order_id: String,
        client_order_id: String,
    },
    /// Dry run: the fully-formed request, never sent.
    Simulated {
        order_id: String,
        client_order_id: String,
        request: SignedRequest,
    },
}

impl DispatchResult {
    /// The order id, exchange-assigned or synthetic.
    pub fn order_id(&self) -> &str {
        match self {
            Self::Placed { order_id, .. } | Self::Simulated { order_id, .. } => order_id,
        }
    }

    /// True if this result came from a dry run.
    pub fn is_simulated(&self) -> bool {
        matches!(self, Self::Simulated { .. })
    }
}

/// Capability for submitting a signed order request.
///
/// Dry-run mode is an implementation of this trait, not a branch in the
/// pipeline — both modes run the identical path up to and including signing,
/// so the dry-run output cannot drift from what live mode would send.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    /// Submit a signed request. Exactly one attempt; implementations must
    /// not retry (a duplicate placement risks a duplicate fill).
    async fn submit(
        &self,
        request: &SignedRequest,
        client_order_id: &str,
    ) -> Result<DispatchResult, BitgetRestError>;
}

/// Submits orders to the real exchange.
pub struct LiveOrderSubmitter {
    client: Arc<BitgetRestClient>,
}

impl LiveOrderSubmitter {
    pub fn new(client: Arc<BitgetRestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderSubmitter for LiveOrderSubmitter {
    async fn submit(
        &self,
        request: &SignedRequest,
        client_order_id: &str,
    ) -> Result<DispatchResult, BitgetRestError> {
        let data = self.client.send_order(request).await?;

        Ok(DispatchResult::Placed {
            order_id: data.order_id,
            client_order_id: data
                .client_oid
                .unwrap_or_else(|| client_order_id.to_string()),
        })
    }
}

/// Logs the would-be request and returns a synthetic result.
pub struct DryRunSubmitter;

#[async_trait]
impl OrderSubmitter for DryRunSubmitter {
    async fn submit(
        &self,
        request: &SignedRequest,
        client_order_id: &str,
    ) -> Result<DispatchResult, BitgetRestError> {
        let order_id = format!("sim-{}", SIMULATED_ORDER_ID.fetch_add(1, Ordering::Relaxed));

        tracing::info!(
            method = request.method,
            path = %request.path,
            body = %request.body,
            timestamp_ms = request.timestamp_ms,
            order_id = %order_id,
            "Dry run: order signed but not sent"
        );

        Ok(DispatchResult::Simulated {
            order_id,
            client_order_id: client_order_id.to_string(),
            request: request.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::BitgetCredentials;
    use bitget_rest::PlaceOrderBody;
    use model::{OrderIntent, PositionSide};
    use rust_decimal_macros::dec;

    fn signed_request() -> SignedRequest {
        let creds = BitgetCredentials::new("key".into(), "secret".into(), "pass".into());
        let intent = OrderIntent::market("BTCUSDT_UMCBL", PositionSide::OpenLong, dec!(0.01));
        let body = PlaceOrderBody::from_intent(&intent, "USDT", "umcbl", "relay_test");
        SignedRequest::place_order(&creds, "/api/mix/v1/order/placeOrder", &body, 1000).unwrap()
    }

    #[tokio::test]
    async fn test_dry_run_returns_simulated_with_request_echo() {
        let result = DryRunSubmitter
            .submit(&signed_request(), "relay_test")
            .await
            .unwrap();

        assert!(result.is_simulated());
        match result {
            DispatchResult::Simulated {
                order_id,
                client_order_id,
                request,
            } => {
                assert!(order_id.starts_with("sim-"));
                assert_eq!(client_order_id, "relay_test");
                assert!(request.body.contains(r#""symbol":"BTCUSDT_UMCBL""#));
            }
            other => panic!("expected simulated result, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_simulated_order_ids_unique() {
        let request = signed_request();
        let a = DryRunSubmitter.submit(&request, "c1").await.unwrap();
        let b = DryRunSubmitter.submit(&request, "c2").await.unwrap();
        assert_ne!(a.order_id(), b.order_id());
    }

    #[tokio::test]
    async fn test_simulated_response_serialization_is_secret_free() {
        let result = DryRunSubmitter
            .submit(&signed_request(), "relay_test")
            .await
            .unwrap();

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""status":"simulated""#));
        assert!(json.contains(r#""symbol\":\"BTCUSDT_UMCBL"#));
        assert!(!json.contains("ACCESS-PASSPHRASE"));
    }
}
