//! Bitget mix v1 API response types.
//!
//! Every endpoint wraps its payload in a `{code, msg, data}` envelope.
//! Some payload field names have drifted across API revisions, so the
//! accessors try the known variants in order.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Envelope code Bitget uses for success.
pub const SUCCESS_CODE: &str = "00000";

/// The common Bitget response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct BitgetResponse<T> {
    /// "00000" on success, an error code otherwise.
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> BitgetResponse<T> {
    /// True if the envelope reports success.
    pub fn is_ok(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Payload of a successful order placement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderData {
    /// Exchange-assigned order id.
    pub order_id: String,
    /// Echo of the client-supplied order id.
    #[serde(default)]
    pub client_oid: Option<String>,
}

/// Payload of the futures ticker endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerData {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    last: Option<Decimal>,
    #[serde(default)]
    last_price: Option<Decimal>,
    #[serde(default)]
    close: Option<Decimal>,
}

impl TickerData {
    /// The most recent traded price, trying the field variants Bitget has
    /// used across revisions.
    pub fn last_price(&self) -> Option<Decimal> {
        self.last.or(self.last_price).or(self.close)
    }
}

/// One margin-coin entry of the futures account endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    #[serde(default)]
    pub margin_coin: Option<String>,
    #[serde(default)]
    available: Option<Decimal>,
    #[serde(default)]
    available_balance: Option<Decimal>,
    #[serde(default)]
    balance: Option<Decimal>,
}

impl AccountData {
    /// The available balance, trying the field variants Bitget has used.
    pub fn available_balance(&self) -> Option<Decimal> {
        self.available.or(self.available_balance).or(self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_success_envelope() {
        let resp: BitgetResponse<PlaceOrderData> = serde_json::from_str(
            r#"{"code":"00000","msg":"success","data":{"orderId":"123456","clientOid":"relay_abc"}}"#,
        )
        .unwrap();

        assert!(resp.is_ok());
        let data = resp.data.unwrap();
        assert_eq!(data.order_id, "123456");
        assert_eq!(data.client_oid.as_deref(), Some("relay_abc"));
    }

    #[test]
    fn test_rejection_envelope() {
        let resp: BitgetResponse<PlaceOrderData> = serde_json::from_str(
            r#"{"code":"40754","msg":"balance not enough","data":null}"#,
        )
        .unwrap();

        assert!(!resp.is_ok());
        assert_eq!(resp.code, "40754");
        assert_eq!(resp.msg, "balance not enough");
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_ticker_field_fallbacks() {
        let with_last: TickerData =
            serde_json::from_str(r#"{"symbol":"BTCUSDT_UMCBL","last":"50000.5"}"#).unwrap();
        assert_eq!(with_last.last_price(), Some(dec!(50000.5)));

        let with_last_price: TickerData =
            serde_json::from_str(r#"{"lastPrice":"50001"}"#).unwrap();
        assert_eq!(with_last_price.last_price(), Some(dec!(50001)));

        let with_close: TickerData = serde_json::from_str(r#"{"close":"49999"}"#).unwrap();
        assert_eq!(with_close.last_price(), Some(dec!(49999)));

        let empty: TickerData = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(empty.last_price(), None);
    }

    #[test]
    fn test_account_field_fallbacks() {
        let acct: AccountData =
            serde_json::from_str(r#"{"marginCoin":"USDT","available":"1234.56"}"#).unwrap();
        assert_eq!(acct.available_balance(), Some(dec!(1234.56)));

        let legacy: AccountData =
            serde_json::from_str(r#"{"marginCoin":"USDT","availableBalance":"99"}"#).unwrap();
        assert_eq!(legacy.available_balance(), Some(dec!(99)));
    }
}
