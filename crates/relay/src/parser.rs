//! Alert normalization.
//!
//! Maps the loose TradingView alert vocabulary onto the typed order model,
//! validating required presence and value ranges. Every failure names the
//! offending alert field.

use rust_decimal::Decimal;
use std::str::FromStr;

use model::{
    Alert, OrderDraft, OrderSize, OrderType, PositionSide, MAX_LEVERAGE, MIN_LEVERAGE,
};

use crate::error::RelayError;

/// Normalize an authenticated alert into an [`OrderDraft`].
pub fn parse_alert(alert: &Alert) -> Result<OrderDraft, RelayError> {
    let symbol = alert
        .symbol
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| RelayError::validation("symbol", "missing"))?
        .to_string();

    let side = resolve_side(alert)?;
    let order_type = resolve_order_type(alert)?;
    let size = resolve_size(alert)?;

    let price = alert
        .price
        .as_deref()
        .map(|raw| parse_positive_decimal("price", raw))
        .transpose()?;

    if order_type == OrderType::Limit && price.is_none() {
        return Err(RelayError::validation(
            "price",
            "limit order requires a price",
        ));
    }

    let leverage = alert
        .leverage
        .as_deref()
        .map(|raw| {
            let lev = u32::from_str(raw).map_err(|_| {
                RelayError::validation("leverage", format!("not a whole number: '{}'", raw))
            })?;
            if !(MIN_LEVERAGE..=MAX_LEVERAGE).contains(&lev) {
                return Err(RelayError::validation(
                    "leverage",
                    format!("must be within {}..={}, got {}", MIN_LEVERAGE, MAX_LEVERAGE, lev),
                ));
            }
            Ok(lev)
        })
        .transpose()?;

    Ok(OrderDraft {
        symbol,
        side,
        order_type,
        size,
        price,
        leverage,
    })
}

/// Resolve the alert's side vocabulary into the four-way position side.
///
/// Accepts the explicit Bitget strings (`open_long`, ...) as well as
/// `buy`/`sell`/`long`/`short` combined with the optional `close` flag.
fn resolve_side(alert: &Alert) -> Result<PositionSide, RelayError> {
    let raw = alert
        .side
        .as_deref()
        .ok_or_else(|| RelayError::validation("side", "missing"))?;
    let close = alert.close.unwrap_or(false);

    if let Some(side) = PositionSide::from_bitget_str(&raw.to_lowercase()) {
        // An explicit four-way side must not contradict the close flag.
        if alert.close.is_some() && side.is_entry() == close {
            return Err(RelayError::validation(
                "side",
                format!("'{}' contradicts close={}", raw, close),
            ));
        }
        return Ok(side);
    }

    match (raw.to_lowercase().as_str(), close) {
        ("buy" | "long", false) => Ok(PositionSide::OpenLong),
        ("buy" | "long", true) => Ok(PositionSide::CloseShort),
        ("sell" | "short", false) => Ok(PositionSide::OpenShort),
        ("sell" | "short", true) => Ok(PositionSide::CloseLong),
        _ => Err(RelayError::validation(
            "side",
            format!("unrecognized value '{}'", raw),
        )),
    }
}

fn resolve_order_type(alert: &Alert) -> Result<OrderType, RelayError> {
    match alert.order_type.as_deref() {
        None => Ok(OrderType::Market),
        Some(raw) => OrderType::from_bitget_str(&raw.to_lowercase()).ok_or_else(|| {
            RelayError::validation("type", format!("expected market or limit, got '{}'", raw))
        }),
    }
}

fn resolve_size(alert: &Alert) -> Result<OrderSize, RelayError> {
    match (alert.quantity.as_deref(), alert.notional.as_deref()) {
        (Some(_), Some(_)) => Err(RelayError::validation(
            "quantity",
            "provide either quantity or notional, not both",
        )),
        (Some(raw), None) => Ok(OrderSize::Contracts(parse_positive_decimal(
            "quantity", raw,
        )?)),
        (None, Some(raw)) => Ok(OrderSize::Notional(parse_positive_decimal(
            "notional", raw,
        )?)),
        (None, None) => Err(RelayError::validation(
            "quantity",
            "missing (provide quantity or notional)",
        )),
    }
}

fn parse_positive_decimal(field: &str, raw: &str) -> Result<Decimal, RelayError> {
    let value = Decimal::from_str(raw)
        .map_err(|_| RelayError::validation(field, format!("not a decimal: '{}'", raw)))?;

    if value <= Decimal::ZERO {
        return Err(RelayError::validation(
            field,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(value)
}
