use crate::dashboard::Dashboard;
use crate::datastructures::{
    client::TradingClient,
    config::ConfigBuilder,
};
use crate::error::DashboardError;
use crate::render::{render_page, RenderState};
use crate::settings::{load_credentials, SecretStore};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Either a live dashboard or the reason it never started.
pub enum AppState<C> {
    Ready(Arc<Dashboard<C>>),
    Halted(DashboardError),
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        match self {
            AppState::Ready(dashboard) => AppState::Ready(Arc::clone(dashboard)),
            AppState::Halted(err) => AppState::Halted(err.clone()),
        }
    }
}

impl<C: TradingClient + Send + Sync> AppState<C> {
    /// The client is only constructed once both secrets are present.
    pub fn from_secrets(store: &SecretStore, config: ConfigBuilder) -> Self {
        let credentials = match load_credentials(store) {
            Ok(credentials) => credentials,
            Err(err) => {
                error!(error = %err, "dashboard halted");
                return AppState::Halted(err);
            }
        };

        match C::new(&config.credentials(&credentials).build()) {
            Ok(client) => {
                info!(key = %credentials.key, "brokerage client ready");
                AppState::Ready(Arc::new(Dashboard::new(client)))
            }
            Err(err) => {
                error!(error = %err, "dashboard halted");
                AppState::Halted(err)
            }
        }
    }

    async fn refresh(&self) -> RenderState {
        match self {
            AppState::Ready(dashboard) => dashboard.refresh().await,
            AppState::Halted(err) => RenderState::Failed(err.clone()),
        }
    }

    async fn refresh_unless_busy(&self) -> RenderState {
        match self {
            AppState::Ready(dashboard) => dashboard.refresh_unless_busy().await,
            AppState::Halted(err) => RenderState::Failed(err.clone()),
        }
    }

    async fn current(&self) -> Option<RenderState> {
        match self {
            AppState::Ready(dashboard) => dashboard.current().await,
            AppState::Halted(err) => Some(RenderState::Failed(err.clone())),
        }
    }
}

pub fn router<C>(state: AppState<C>) -> Router
where
    C: TradingClient + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index::<C>))
        .route("/api/state", get(current_state::<C>))
        .route("/api/refresh", post(refresh_state::<C>))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index<C: TradingClient + Send + Sync>(State(state): State<AppState<C>>) -> impl IntoResponse {
    Html(render_page(&state.refresh_unless_busy().await))
}

/// 204 until the first refresh has started.
async fn current_state<C: TradingClient + Send + Sync>(State(state): State<AppState<C>>) -> Response {
    match state.current().await {
        Some(current) => Json(current).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn refresh_state<C: TradingClient + Send + Sync>(State(state): State<AppState<C>>) -> impl IntoResponse {
    Json(state.refresh().await)
}

async fn health_check() -> &'static str {
    "OK"
}
