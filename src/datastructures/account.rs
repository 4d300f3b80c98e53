use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subset of `GET /v2/account` the dashboard displays.
///
/// Alpaca encodes every amount as a JSON string, e.g. `"equity": "10500.25"`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AccountSnapshot {
    pub equity: Decimal,
    /// Equity as of the previous trading day's close.
    pub last_equity: Decimal,
    pub buying_power: Decimal,
    pub cash: Decimal,
}
