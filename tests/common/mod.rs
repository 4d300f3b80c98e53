#![allow(dead_code)]

use async_trait::async_trait;
use fund_tracker::datastructures::{
    account::AccountSnapshot, client::TradingClient, config::Config, position::Position,
};
use fund_tracker::error::DashboardError;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory broker returning canned responses and counting calls.
#[derive(Clone)]
pub struct FakeBroker {
    pub account: Result<AccountSnapshot, DashboardError>,
    pub positions: Result<Vec<Position>, DashboardError>,
    pub account_calls: Arc<AtomicUsize>,
    pub position_calls: Arc<AtomicUsize>,
}

impl FakeBroker {
    pub fn with(account: AccountSnapshot, positions: Vec<Position>) -> Self {
        FakeBroker {
            account: Ok(account),
            positions: Ok(positions),
            account_calls: Arc::new(AtomicUsize::new(0)),
            position_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(err: DashboardError) -> Self {
        FakeBroker {
            account: Err(err.clone()),
            positions: Err(err),
            ..FakeBroker::with(scenario_account(), vec![])
        }
    }

    pub fn calls(&self) -> (usize, usize) {
        (
            self.account_calls.load(Ordering::SeqCst),
            self.position_calls.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl TradingClient for FakeBroker {
    fn new(_config: &Config) -> Result<Self, DashboardError> {
        Ok(FakeBroker::with(scenario_account(), vec![scenario_position()]))
    }

    async fn get_account(&self) -> Result<AccountSnapshot, DashboardError> {
        self.account_calls.fetch_add(1, Ordering::SeqCst);
        self.account.clone()
    }

    async fn get_positions(&self) -> Result<Vec<Position>, DashboardError> {
        self.position_calls.fetch_add(1, Ordering::SeqCst);
        self.positions.clone()
    }
}

pub fn scenario_account() -> AccountSnapshot {
    AccountSnapshot {
        equity: dec!(10500),
        last_equity: dec!(10000),
        buying_power: dec!(5000),
        cash: dec!(2000),
    }
}

pub fn scenario_position() -> Position {
    Position {
        symbol: "AAPL".to_string(),
        market_value: dec!(3000),
        quantity: dec!(10),
        unrealized_pl: dec!(150),
        unrealized_pl_percent: dec!(0.05),
    }
}
