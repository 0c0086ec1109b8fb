//! Order request construction and signing.

use auth::{BitgetCredentials, RequestSigner};
use model::{OrderIntent, OrderType};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::BitgetRestError;

/// Wire body for `POST /api/mix/v1/order/placeOrder`.
///
/// Field order is the canonical signing encoding: Bitget signs the literal
/// body string, so serialization must be deterministic. Struct field order
/// is exactly the order serde_json emits.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderBody {
    pub symbol: String,
    pub margin_coin: String,
    pub side: &'static str,
    pub order_type: &'static str,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leverage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force_value: Option<&'static str>,
    pub product_type: String,
    pub client_oid: String,
}

impl PlaceOrderBody {
    /// Build the wire body for an order intent.
    pub fn from_intent(
        intent: &OrderIntent,
        margin_coin: &str,
        product_type: &str,
        client_oid: &str,
    ) -> Self {
        Self {
            symbol: intent.symbol.clone(),
            margin_coin: margin_coin.to_string(),
            side: intent.side.as_bitget_str(),
            order_type: intent.order_type.as_bitget_str(),
            size: intent.quantity.to_string(),
            price: intent.price.map(|p: Decimal| p.to_string()),
            leverage: intent.leverage.map(|l| l.to_string()),
            // Bitget requires a time-in-force for resting orders only
            time_in_force_value: (intent.order_type == OrderType::Limit).then_some("normal"),
            product_type: product_type.to_string(),
            client_oid: client_oid.to_string(),
        }
    }
}

/// A fully assembled, signed order-placement request.
///
/// The signature is deterministic given (body, timestamp, secret); changing
/// either the body or the timestamp invalidates it. Headers carry the
/// passphrase and are therefore excluded from serialization and Debug — the
/// serialized form is safe to echo back in dry-run responses.
#[derive(Clone, Serialize)]
pub struct SignedRequest {
    pub method: &'static str,
    /// Request path including any query string.
    pub path: String,
    /// Exact body string the signature covers.
    pub body: String,
    pub timestamp_ms: i64,
    /// Base64 HMAC-SHA256 signature.
    pub signature: String,
    /// Complete header set, including secret material.
    #[serde(skip)]
    pub headers: Vec<(String, String)>,
}

impl SignedRequest {
    /// Sign an order body for the given endpoint and timestamp.
    ///
    /// Pure: no I/O, no clock access — the caller supplies the timestamp so
    /// signing stays deterministic and testable.
    pub fn place_order(
        credentials: &BitgetCredentials,
        order_path: &str,
        body: &PlaceOrderBody,
        timestamp_ms: i64,
    ) -> Result<Self, BitgetRestError> {
        let body = serde_json::to_string(body)?;
        let signer = RequestSigner::new(credentials);
        let signature = signer.sign(&RequestSigner::prehash(
            timestamp_ms,
            "POST",
            order_path,
            &body,
        ));
        let headers = signer.headers_for(&signature, timestamp_ms);

        Ok(Self {
            method: "POST",
            path: order_path.to_string(),
            body,
            timestamp_ms,
            signature,
            headers,
        })
    }
}

impl std::fmt::Debug for SignedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("body", &self.body)
            .field("timestamp_ms", &self.timestamp_ms)
            .field("signature", &self.signature)
            .field("headers", &"[omitted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::PositionSide;
    use rust_decimal_macros::dec;

    fn credentials() -> BitgetCredentials {
        BitgetCredentials::new("key".into(), "secret".into(), "pass".into())
    }

    const ORDER_PATH: &str = "/api/mix/v1/order/placeOrder";

    #[test]
    fn test_market_body_canonical_encoding() {
        let intent = OrderIntent::market("BTCUSDT_UMCBL", PositionSide::OpenLong, dec!(0.01));
        let body = PlaceOrderBody::from_intent(&intent, "USDT", "umcbl", "relay_abc123");

        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"symbol":"BTCUSDT_UMCBL","marginCoin":"USDT","side":"open_long","orderType":"market","size":"0.01","productType":"umcbl","clientOid":"relay_abc123"}"#
        );
    }

    #[test]
    fn test_limit_body_includes_price_and_tif() {
        let intent = OrderIntent::limit(
            "ETHUSDT_UMCBL",
            PositionSide::CloseShort,
            dec!(1.5),
            dec!(3000),
        );
        let body = PlaceOrderBody::from_intent(&intent, "USDT", "umcbl", "relay_x");
        let encoded = serde_json::to_string(&body).unwrap();

        assert!(encoded.contains(r#""side":"close_short""#));
        assert!(encoded.contains(r#""orderType":"limit""#));
        assert!(encoded.contains(r#""price":"3000""#));
        assert!(encoded.contains(r#""timeInForceValue":"normal""#));
    }

    #[test]
    fn test_leverage_serialized_when_present() {
        let mut intent = OrderIntent::market("BTCUSDT_UMCBL", PositionSide::OpenShort, dec!(1));
        intent.leverage = Some(3);
        let body = PlaceOrderBody::from_intent(&intent, "USDT", "umcbl", "relay_x");

        assert!(serde_json::to_string(&body)
            .unwrap()
            .contains(r#""leverage":"3""#));
    }

    #[test]
    fn test_round_trip_body_decodes_to_same_intent_fields() {
        let intent = OrderIntent::market("BTC_USDT", PositionSide::OpenLong, dec!(1));
        let body = PlaceOrderBody::from_intent(&intent, "USDT", "umcbl", "relay_rt");
        let encoded = serde_json::to_string(&body).unwrap();

        let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded["symbol"], "BTC_USDT");
        assert_eq!(decoded["side"], "open_long");
        assert_eq!(decoded["orderType"], "market");
        assert_eq!(decoded["size"], "1");
        assert_eq!(
            PositionSide::from_bitget_str(decoded["side"].as_str().unwrap()),
            Some(PositionSide::OpenLong)
        );
    }

    #[test]
    fn test_signed_request_is_deterministic() {
        let creds = credentials();
        let intent = OrderIntent::market("BTCUSDT_UMCBL", PositionSide::OpenLong, dec!(0.01));
        let body = PlaceOrderBody::from_intent(&intent, "USDT", "umcbl", "relay_abc");

        let a = SignedRequest::place_order(&creds, ORDER_PATH, &body, 1_700_000_000_000).unwrap();
        let b = SignedRequest::place_order(&creds, ORDER_PATH, &body, 1_700_000_000_000).unwrap();
        assert_eq!(a.signature, b.signature);
        assert_eq!(a.body, b.body);
    }

    #[test]
    fn test_signature_changes_with_timestamp() {
        let creds = credentials();
        let intent = OrderIntent::market("BTCUSDT_UMCBL", PositionSide::OpenLong, dec!(0.01));
        let body = PlaceOrderBody::from_intent(&intent, "USDT", "umcbl", "relay_abc");

        let a = SignedRequest::place_order(&creds, ORDER_PATH, &body, 1_700_000_000_000).unwrap();
        let b = SignedRequest::place_order(&creds, ORDER_PATH, &body, 1_700_000_000_001).unwrap();
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn test_serialized_echo_omits_headers() {
        let creds = credentials();
        let intent = OrderIntent::market("BTCUSDT_UMCBL", PositionSide::OpenLong, dec!(0.01));
        let body = PlaceOrderBody::from_intent(&intent, "USDT", "umcbl", "relay_abc");
        let req = SignedRequest::place_order(&creds, ORDER_PATH, &body, 1000).unwrap();

        let echo = serde_json::to_string(&req).unwrap();
        assert!(!echo.contains("pass"));
        assert!(!echo.contains("ACCESS-PASSPHRASE"));
        assert!(echo.contains(r#""path":"/api/mix/v1/order/placeOrder""#));

        let debug_str = format!("{:?}", req);
        assert!(!debug_str.contains("pass"));
    }
}
