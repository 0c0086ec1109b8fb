//! Notional-to-contracts size resolution.

use async_trait::async_trait;
use rust_decimal::Decimal;

use bitget_rest::{BitgetRestClient, BitgetRestError};
use model::{OrderDraft, OrderSize};

use crate::error::RelayError;

/// Decimal places Bitget accepts for contract sizes.
const SIZE_PRECISION: u32 = 6;

/// Capability for looking up the current mark price of a symbol.
///
/// A trait seam so the pipeline can be tested with fixed prices and so
/// alerts sized in contracts never touch the network for a price.
#[async_trait]
pub trait MarkPriceSource: Send + Sync {
    async fn mark_price(&self, symbol: &str) -> Result<Decimal, BitgetRestError>;
}

#[async_trait]
impl MarkPriceSource for BitgetRestClient {
    async fn mark_price(&self, symbol: &str) -> Result<Decimal, BitgetRestError> {
        BitgetRestClient::mark_price(self, symbol).await
    }
}

/// Resolve a draft's size to a concrete contract quantity.
///
/// `Contracts` passes through unchanged. `Notional` divides by the current
/// mark price and rounds to the exchange's size precision; the instrument's
/// contract multiplier is assumed to be 1 (true for Bitget USDT-margined
/// perpetuals).
pub async fn resolve_quantity(
    draft: &OrderDraft,
    price_source: &dyn MarkPriceSource,
) -> Result<Decimal, RelayError> {
    match draft.size {
        OrderSize::Contracts(quantity) => Ok(quantity),
        OrderSize::Notional(notional) => {
            let mark_price = price_source.mark_price(&draft.symbol).await?;

            if mark_price <= Decimal::ZERO {
                return Err(RelayError::Transport(format!(
                    "invalid mark price {} for {}",
                    mark_price, draft.symbol
                )));
            }

            let quantity = (notional / mark_price).round_dp(SIZE_PRECISION);
            tracing::debug!(
                symbol = %draft.symbol,
                notional = %notional,
                mark_price = %mark_price,
                quantity = %quantity,
                "Resolved notional size"
            );
            Ok(quantity)
        }
    }
}
