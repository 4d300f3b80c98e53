use crate::datastructures::client::TradingClient;
use crate::error::DashboardError;
use crate::render::RenderState;
use crate::view::{self, DisplayModel};
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::{debug, info, warn};

/// Fetch, transform, and hold the outcome of the latest refresh.
pub struct Dashboard<C> {
    client: C,
    /// `None` until the first refresh starts.
    state: RwLock<Option<RenderState>>,
    // Held for the whole pipeline so two refreshes never fetch at once.
    refresh_gate: Mutex<()>,
}

impl<C: TradingClient + Send + Sync> Dashboard<C> {
    pub fn new(client: C) -> Self {
        Dashboard {
            client,
            state: RwLock::new(None),
            refresh_gate: Mutex::new(()),
        }
    }

    async fn pipeline(&self) -> Result<DisplayModel, DashboardError> {
        let account = self.client.get_account().await?;
        let positions = self.client.get_positions().await?;
        view::build(&account, &positions)
    }

    async fn run(&self, _gate: MutexGuard<'_, ()>) -> RenderState {
        *self.state.write().await = Some(RenderState::Loading);

        let settled = match self.pipeline().await {
            Ok(model) => {
                info!(equity = %model.equity, "dashboard refreshed");
                RenderState::Success(model)
            }
            Err(err) => {
                warn!(error = %err, "dashboard refresh failed");
                RenderState::Failed(err)
            }
        };

        *self.state.write().await = Some(settled.clone());
        settled
    }

    /// Runs the whole pipeline from scratch and returns the settled state.
    /// Waits for a refresh already in flight to finish first.
    pub async fn refresh(&self) -> RenderState {
        let gate = self.refresh_gate.lock().await;
        self.run(gate).await
    }

    /// Like [`Dashboard::refresh`], but answers `Loading` instead of queueing
    /// behind a refresh that is already running.
    pub async fn refresh_unless_busy(&self) -> RenderState {
        match self.refresh_gate.try_lock() {
            Ok(gate) => self.run(gate).await,
            Err(_) => {
                debug!("refresh already in flight");
                RenderState::Loading
            }
        }
    }

    /// Last known state, without touching the network. `None` before the first refresh.
    pub async fn current(&self) -> Option<RenderState> {
        self.state.read().await.clone()
    }
}
