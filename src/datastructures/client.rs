use super::{account::AccountSnapshot, config::Config, position::Position};
use crate::error::DashboardError;
use async_trait::async_trait;

/// Read-only view of a brokerage account.
///
/// One call per operation per refresh: implementations must not retry.
#[async_trait]
pub trait TradingClient {
    fn new(config: &Config) -> Result<Self, DashboardError>
    where
        Self: Sized;
    async fn get_account(&self) -> Result<AccountSnapshot, DashboardError>;
    /// An empty list means an all-cash account, not a failure.
    async fn get_positions(&self) -> Result<Vec<Position>, DashboardError>;
}
