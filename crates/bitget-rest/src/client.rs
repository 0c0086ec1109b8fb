//! Bitget mix v1 REST API client.

use std::time::Duration;

use rust_decimal::Decimal;

use auth::{BitgetCredentials, RequestSigner};
use common::BitgetEnvironment;
use model::OrderIntent;
use rest_client::RestClient;

use crate::error::BitgetRestError;
use crate::request::{PlaceOrderBody, SignedRequest};
use crate::responses::{AccountData, BitgetResponse, PlaceOrderData, TickerData};

/// Bitget REST API client for USDT-margined futures.
pub struct BitgetRestClient {
    client: RestClient,
    credentials: BitgetCredentials,
    environment: BitgetEnvironment,
    margin_coin: String,
    order_path: String,
}

impl BitgetRestClient {
    /// Create a new Bitget REST client.
    ///
    /// # Arguments
    /// * `credentials` - API credentials for authenticated requests
    /// * `environment` - Production or demo (selects product type)
    /// * `margin_coin` - Margin coin for futures orders (typically "USDT")
    /// * `order_path` - Order-placement endpoint path
    /// * `timeout` - Bounded timeout for every exchange call
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        credentials: BitgetCredentials,
        environment: BitgetEnvironment,
        margin_coin: String,
        order_path: String,
        timeout: Duration,
    ) -> Result<Self, BitgetRestError> {
        let client = RestClient::new(environment.rest_base_url(), timeout)
            .map_err(BitgetRestError::Rest)?;

        Ok(Self {
            client,
            credentials,
            environment,
            margin_coin,
            order_path,
        })
    }

    /// Get the environment this client is connected to.
    pub fn environment(&self) -> BitgetEnvironment {
        self.environment
    }

    /// Get the API key (for logging/debugging).
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Current local timestamp in milliseconds.
    ///
    /// Bitget accepts a 30-second window around server time; for a relay
    /// placing one order per alert the local clock is sufficient.
    pub fn timestamp_ms(&self) -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }

    // ========================================================================
    // Order Placement
    // ========================================================================

    /// Assemble and sign an order-placement request without sending it.
    ///
    /// Pure apart from string allocation: dry-run mode uses this to surface
    /// any construction error while never touching the network.
    pub fn build_order_request(
        &self,
        intent: &OrderIntent,
        client_oid: &str,
        timestamp_ms: i64,
    ) -> Result<SignedRequest, BitgetRestError> {
        let body = PlaceOrderBody::from_intent(
            intent,
            &self.margin_coin,
            self.environment.product_type(),
            client_oid,
        );

        SignedRequest::place_order(&self.credentials, &self.order_path, &body, timestamp_ms)
    }

    /// Send a signed order-placement request.
    ///
    /// POST {order_path}
    ///
    /// Exactly one attempt; a failure is reported, never replayed, since a
    /// duplicate placement risks a duplicate fill.
    pub async fn send_order(
        &self,
        request: &SignedRequest,
    ) -> Result<PlaceOrderData, BitgetRestError> {
        tracing::info!(
            path = %request.path,
            timestamp_ms = request.timestamp_ms,
            "Sending order to exchange"
        );

        let response: BitgetResponse<PlaceOrderData> = self
            .client
            .post_json(&request.path, &request.body, &request.headers)
            .await?;

        if !response.is_ok() {
            tracing::warn!(
                code = %response.code,
                msg = %response.msg,
                "Exchange rejected order"
            );
            return Err(BitgetRestError::Rejected {
                code: response.code,
                message: response.msg,
            });
        }

        let data = response.data.ok_or_else(|| {
            BitgetRestError::MalformedResponse("success envelope without order data".into())
        })?;

        tracing::info!(
            order_id = %data.order_id,
            client_oid = ?data.client_oid,
            "Order placed"
        );

        Ok(data)
    }

    // ========================================================================
    // Market Data & Account
    // ========================================================================

    /// Fetch the last traded price for a symbol.
    ///
    /// GET /api/mix/v1/market/ticker
    pub async fn mark_price(&self, symbol: &str) -> Result<Decimal, BitgetRestError> {
        let path = format!(
            "/api/mix/v1/market/ticker?symbol={}&productType={}",
            symbol,
            self.environment.product_type()
        );

        let response: BitgetResponse<TickerData> = self.signed_get(&path).await?;

        if !response.is_ok() {
            return Err(BitgetRestError::Rejected {
                code: response.code,
                message: response.msg,
            });
        }

        response
            .data
            .as_ref()
            .and_then(TickerData::last_price)
            .ok_or_else(|| {
                BitgetRestError::MalformedResponse(format!("no last price for {}", symbol))
            })
    }

    /// Fetch the available futures balance for the configured margin coin.
    ///
    /// GET /api/mix/v1/account/accounts
    pub async fn available_balance(&self) -> Result<Decimal, BitgetRestError> {
        let path = format!(
            "/api/mix/v1/account/accounts?productType={}",
            self.environment.product_type()
        );

        let response: BitgetResponse<Vec<AccountData>> = self.signed_get(&path).await?;

        if !response.is_ok() {
            return Err(BitgetRestError::Rejected {
                code: response.code,
                message: response.msg,
            });
        }

        response
            .data
            .unwrap_or_default()
            .iter()
            .find(|acct| acct.margin_coin.as_deref() == Some(self.margin_coin.as_str()))
            .and_then(AccountData::available_balance)
            .ok_or_else(|| {
                BitgetRestError::MalformedResponse(format!(
                    "no balance entry for margin coin {}",
                    self.margin_coin
                ))
            })
    }

    /// Issue a signed GET request (empty body in the prehash).
    async fn signed_get<T: serde::de::DeserializeOwned>(
        &self,
        request_path: &str,
    ) -> Result<BitgetResponse<T>, BitgetRestError> {
        let signer = RequestSigner::new(&self.credentials);
        let headers = signer.signed_headers("GET", request_path, "", self.timestamp_ms());

        Ok(self.client.get(request_path, &headers).await?)
    }
}

impl std::fmt::Debug for BitgetRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitgetRestClient")
            .field("environment", &self.environment)
            .field("base_url", &self.environment.rest_base_url())
            .field("api_key", &self.credentials.api_key())
            .field("margin_coin", &self.margin_coin)
            .field("order_path", &self.order_path)
            .finish()
    }
}
