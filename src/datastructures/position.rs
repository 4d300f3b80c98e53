use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One open position from `GET /v2/positions`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Position {
    pub symbol: String,
    pub market_value: Decimal,
    #[serde(rename = "qty")]
    pub quantity: Decimal,
    pub unrealized_pl: Decimal,
    /// Fraction, not percent: 0.05 means +5%.
    #[serde(rename = "unrealized_plpc")]
    pub unrealized_pl_percent: Decimal,
}
