//! Order domain types: sides, order types, drafts, and validated intents.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Leverage bounds accepted by Bitget USDT-margined futures.
pub const MIN_LEVERAGE: u32 = 1;
pub const MAX_LEVERAGE: u32 = 125;

/// Position side for futures orders.
///
/// A tagged four-way variant rather than a direction/close pair, so invalid
/// combinations are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionSide {
    OpenLong,
    OpenShort,
    CloseLong,
    CloseShort,
}

impl PositionSide {
    /// Convert from the Bitget mix string representation.
    pub fn from_bitget_str(s: &str) -> Option<Self> {
        match s {
            "open_long" => Some(Self::OpenLong),
            "open_short" => Some(Self::OpenShort),
            "close_long" => Some(Self::CloseLong),
            "close_short" => Some(Self::CloseShort),
            _ => None,
        }
    }

    /// Convert to the Bitget mix string representation.
    pub fn as_bitget_str(&self) -> &'static str {
        match self {
            Self::OpenLong => "open_long",
            Self::OpenShort => "open_short",
            Self::CloseLong => "close_long",
            Self::CloseShort => "close_short",
        }
    }

    /// True if this side opens (increases) a position.
    pub fn is_entry(&self) -> bool {
        matches!(self, Self::OpenLong | Self::OpenShort)
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Market,
    Limit,
}

impl OrderType {
    /// Convert from the Bitget mix string representation.
    pub fn from_bitget_str(s: &str) -> Option<Self> {
        match s {
            "market" => Some(Self::Market),
            "limit" => Some(Self::Limit),
            _ => None,
        }
    }

    /// Convert to the Bitget mix string representation.
    pub fn as_bitget_str(&self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
        }
    }
}

/// How the alert expressed order size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSize {
    /// Size directly in contracts.
    Contracts(Decimal),
    /// Size as a notional amount in the margin coin, converted to contracts
    /// at the current mark price before signing.
    Notional(Decimal),
}

/// Parser output: a normalized alert whose size may still need resolving
/// against the mark price.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub symbol: String,
    pub side: PositionSide,
    pub order_type: OrderType,
    pub size: OrderSize,
    /// Limit price; required when `order_type` is `Limit`.
    pub price: Option<Decimal>,
    pub leverage: Option<u32>,
}

impl OrderDraft {
    /// Resolve this draft into a validated intent with a concrete quantity.
    ///
    /// # Errors
    /// Returns `InvalidOrder` if the resulting intent violates any invariant.
    pub fn into_intent(self, quantity: Decimal) -> Result<OrderIntent, InvalidOrder> {
        let intent = OrderIntent {
            symbol: self.symbol,
            side: self.side,
            order_type: self.order_type,
            quantity,
            price: self.price,
            leverage: self.leverage,
        };
        intent.validate()?;
        Ok(intent)
    }
}

/// A validated, fully resolved order intent.
///
/// Invariants (enforced by [`OrderIntent::validate`]): quantity is positive,
/// limit orders carry a price, leverage when present is within
/// `MIN_LEVERAGE..=MAX_LEVERAGE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIntent {
    pub symbol: String,
    pub side: PositionSide,
    pub order_type: OrderType,
    /// Quantity in contracts (exchange-native units).
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub leverage: Option<u32>,
}

impl OrderIntent {
    /// Create a market order intent.
    pub fn market(symbol: impl Into<String>, side: PositionSide, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            quantity,
            price: None,
            leverage: None,
        }
    }

    /// Create a limit order intent.
    pub fn limit(
        symbol: impl Into<String>,
        side: PositionSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            quantity,
            price: Some(price),
            leverage: None,
        }
    }

    /// Check all intent invariants.
    pub fn validate(&self) -> Result<(), InvalidOrder> {
        if self.quantity <= Decimal::ZERO {
            return Err(InvalidOrder::NonPositiveQuantity(self.quantity));
        }
        if self.order_type == OrderType::Limit {
            match self.price {
                None => return Err(InvalidOrder::MissingLimitPrice),
                Some(p) if p <= Decimal::ZERO => {
                    return Err(InvalidOrder::NonPositivePrice(p));
                }
                Some(_) => {}
            }
        }
        if let Some(lev) = self.leverage {
            if !(MIN_LEVERAGE..=MAX_LEVERAGE).contains(&lev) {
                return Err(InvalidOrder::LeverageOutOfRange(lev));
            }
        }
        Ok(())
    }
}

/// An intent invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOrder {
    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(Decimal),

    #[error("limit order requires a price")]
    MissingLimitPrice,

    #[error("price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    #[error("leverage must be within {MIN_LEVERAGE}..={MAX_LEVERAGE}, got {0}")]
    LeverageOutOfRange(u32),
}

impl InvalidOrder {
    /// The alert field this violation concerns.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveQuantity(_) => "quantity",
            Self::MissingLimitPrice | Self::NonPositivePrice(_) => "price",
            Self::LeverageOutOfRange(_) => "leverage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_side_round_trip() {
        for side in [
            PositionSide::OpenLong,
            PositionSide::OpenShort,
            PositionSide::CloseLong,
            PositionSide::CloseShort,
        ] {
            assert_eq!(
                PositionSide::from_bitget_str(side.as_bitget_str()),
                Some(side)
            );
        }
        assert_eq!(PositionSide::from_bitget_str("buy"), None);
    }

    #[test]
    fn test_is_entry() {
        assert!(PositionSide::OpenLong.is_entry());
        assert!(PositionSide::OpenShort.is_entry());
        assert!(!PositionSide::CloseLong.is_entry());
        assert!(!PositionSide::CloseShort.is_entry());
    }

    #[test]
    fn test_market_intent_valid() {
        let intent = OrderIntent::market("BTCUSDT_UMCBL", PositionSide::OpenLong, dec!(0.01));
        assert!(intent.validate().is_ok());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let intent = OrderIntent::market("BTCUSDT_UMCBL", PositionSide::OpenLong, dec!(0));
        assert_eq!(
            intent.validate(),
            Err(InvalidOrder::NonPositiveQuantity(dec!(0)))
        );
        assert_eq!(intent.validate().unwrap_err().field(), "quantity");
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let intent = OrderIntent::market("BTCUSDT_UMCBL", PositionSide::OpenShort, dec!(-1));
        assert!(intent.validate().is_err());
    }

    #[test]
    fn test_limit_without_price_rejected() {
        let mut intent =
            OrderIntent::limit("BTCUSDT_UMCBL", PositionSide::OpenLong, dec!(1), dec!(50000));
        intent.price = None;
        assert_eq!(intent.validate(), Err(InvalidOrder::MissingLimitPrice));
        assert_eq!(intent.validate().unwrap_err().field(), "price");
    }

    #[test]
    fn test_leverage_bounds() {
        let mut intent = OrderIntent::market("BTCUSDT_UMCBL", PositionSide::OpenLong, dec!(1));

        intent.leverage = Some(0);
        assert_eq!(intent.validate(), Err(InvalidOrder::LeverageOutOfRange(0)));

        intent.leverage = Some(126);
        assert_eq!(
            intent.validate(),
            Err(InvalidOrder::LeverageOutOfRange(126))
        );

        intent.leverage = Some(3);
        assert!(intent.validate().is_ok());
    }

    #[test]
    fn test_draft_into_intent_validates() {
        let draft = OrderDraft {
            symbol: "BTCUSDT_UMCBL".into(),
            side: PositionSide::OpenLong,
            order_type: OrderType::Market,
            size: OrderSize::Notional(dec!(100)),
            price: None,
            leverage: None,
        };

        assert!(draft.clone().into_intent(dec!(0.002)).is_ok());
        assert!(draft.into_intent(dec!(0)).is_err());
    }
}
