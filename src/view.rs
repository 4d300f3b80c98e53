//! Turns raw account data into display-ready numbers.
//!
//! No formatting happens here; see [`crate::render::format`].

use crate::datastructures::{account::AccountSnapshot, position::Position};
use crate::error::DashboardError;
use rust_decimal::Decimal;
use serde::Serialize;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    pub equity: Decimal,
    /// `None` when the previous close is zero or so small the change is not representable.
    pub percent_change: Option<Decimal>,
    pub buying_power: Decimal,
    pub cash: Decimal,
    pub holdings: Holdings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Holdings {
    AllCash,
    Invested {
        positions: Vec<PositionView>,
        allocation: Vec<Slice>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionView {
    pub symbol: String,
    pub market_value: Decimal,
    pub quantity: Decimal,
    pub unrealized_pl: Decimal,
    /// Already scaled to percent.
    pub unrealized_pl_percent: Decimal,
}

/// One wedge of the allocation chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: Decimal,
}

/// `(equity - last_equity) / last_equity * 100`.
///
/// `None` if `last_equity` is zero or the result overflows `Decimal`; the page
/// then shows the equity without a change instead of failing.
pub fn percent_change(equity: Decimal, last_equity: Decimal) -> Option<Decimal> {
    equity
        .checked_sub(last_equity)?
        .checked_div(last_equity)?
        .checked_mul(HUNDRED)
}

fn position_view(position: &Position) -> Result<PositionView, DashboardError> {
    let pl_percent = position
        .unrealized_pl_percent
        .checked_mul(HUNDRED)
        .ok_or_else(|| DashboardError::computation(format!("P/L percent overflowed for {}", position.symbol)))?;

    Ok(PositionView {
        symbol: position.symbol.clone(),
        market_value: position.market_value,
        quantity: position.quantity,
        unrealized_pl: position.unrealized_pl,
        unrealized_pl_percent: pl_percent,
    })
}

pub fn build(account: &AccountSnapshot, positions: &[Position]) -> Result<DisplayModel, DashboardError> {
    let holdings = if positions.is_empty() {
        Holdings::AllCash
    } else {
        let positions = positions
            .iter()
            .map(position_view)
            .collect::<Result<Vec<_>, _>>()?;
        // Shorts and zero-valued lots stay in the table but cannot be drawn as wedges.
        let allocation = positions
            .iter()
            .filter(|p| p.market_value > Decimal::ZERO)
            .map(|p| Slice {
                label: p.symbol.clone(),
                value: p.market_value,
            })
            .collect();
        Holdings::Invested { positions, allocation }
    };

    Ok(DisplayModel {
        equity: account.equity,
        percent_change: percent_change(account.equity, account.last_equity),
        buying_power: account.buying_power,
        cash: account.cash,
        holdings,
    })
}
