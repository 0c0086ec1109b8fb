//! Raw TradingView alert payload.

use serde::{Deserialize, Deserializer};

/// An inbound alert as received from TradingView.
///
/// All fields are optional at the deserialization level; required-field and
/// type validation happens downstream so failures can name the offending
/// field. Numeric fields accept both JSON strings and bare numbers, since
/// alert templates emit either depending on how the operator quotes
/// placeholders.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Alert {
    /// Shared secret; must match the configured `ALERT_SECRET`.
    pub secret: Option<String>,
    /// Exchange symbol, e.g. "BTCUSDT_UMCBL".
    pub symbol: Option<String>,
    /// Trade direction. Accepts `buy`/`sell`/`long`/`short` or the explicit
    /// four-way `open_long`/`open_short`/`close_long`/`close_short`.
    pub side: Option<String>,
    /// Order size in contracts.
    #[serde(deserialize_with = "de_opt_number_as_string")]
    pub quantity: Option<String>,
    /// Order size as a notional amount in the margin coin; mutually
    /// exclusive with `quantity`.
    #[serde(deserialize_with = "de_opt_number_as_string")]
    pub notional: Option<String>,
    /// Order type: `market` (default) or `limit`.
    #[serde(rename = "type")]
    pub order_type: Option<String>,
    /// Limit price; required for limit orders.
    #[serde(deserialize_with = "de_opt_number_as_string")]
    pub price: Option<String>,
    /// Leverage multiplier.
    #[serde(deserialize_with = "de_opt_number_as_string")]
    pub leverage: Option<String>,
    /// When set with `buy`/`sell`, marks the alert as closing an existing
    /// position instead of opening a new one.
    pub close: Option<bool>,
}

impl Alert {
    /// Deserialize an alert from a raw request body.
    ///
    /// TradingView sometimes sends `text/plain`, so the caller passes raw
    /// bytes rather than relying on content-type negotiation.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

// Never leak the shared secret through logs.
impl std::fmt::Debug for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alert")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("symbol", &self.symbol)
            .field("side", &self.side)
            .field("quantity", &self.quantity)
            .field("notional", &self.notional)
            .field("order_type", &self.order_type)
            .field("price", &self.price)
            .field("leverage", &self.leverage)
            .field("close", &self.close)
            .finish()
    }
}

/// Accept a JSON string, integer, or float and normalize it to a string.
fn de_opt_number_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_alert() {
        let alert = Alert::from_slice(
            br#"{"secret":"s1","symbol":"BTCUSDT_UMCBL","side":"buy","quantity":"0.01"}"#,
        )
        .unwrap();

        assert_eq!(alert.secret.as_deref(), Some("s1"));
        assert_eq!(alert.symbol.as_deref(), Some("BTCUSDT_UMCBL"));
        assert_eq!(alert.side.as_deref(), Some("buy"));
        assert_eq!(alert.quantity.as_deref(), Some("0.01"));
        assert!(alert.notional.is_none());
        assert!(alert.close.is_none());
    }

    #[test]
    fn test_numeric_fields_accept_bare_numbers() {
        let alert = Alert::from_slice(
            br#"{"secret":"s1","symbol":"ETHUSDT_UMCBL","side":"sell","quantity":1.5,"leverage":3}"#,
        )
        .unwrap();

        assert_eq!(alert.quantity.as_deref(), Some("1.5"));
        assert_eq!(alert.leverage.as_deref(), Some("3"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let alert =
            Alert::from_slice(br#"{"secret":"s1","symbol":"X","side":"buy","comment":"entry"}"#)
                .unwrap();
        assert_eq!(alert.symbol.as_deref(), Some("X"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(Alert::from_slice(b"not json at all").is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let alert = Alert::from_slice(
            br#"{"secret":"super_secret","symbol":"BTCUSDT_UMCBL","side":"buy"}"#,
        )
        .unwrap();

        let debug_str = format!("{:?}", alert);
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
