mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use common::{scenario_account, scenario_position, FakeBroker};
use fund_tracker::dashboard::Dashboard;
use fund_tracker::datastructures::config::Config;
use fund_tracker::error::DashboardError;
use fund_tracker::render::HEADING;
use fund_tracker::server::{router, AppState};
use fund_tracker::settings::SecretStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tower::ServiceExt;

fn app(broker: FakeBroker) -> Router {
    router(AppState::Ready(Arc::new(Dashboard::new(broker))))
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn index_refreshes_and_renders_page() {
    let broker = FakeBroker::with(scenario_account(), vec![scenario_position()]);
    let app = app(broker.clone());

    let (status, html) = send(&app, "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(HEADING));
    assert!(html.contains("$10,500.00"));
    assert!(html.contains("Asset Allocation"));
    assert_eq!(broker.calls(), (1, 1));

    // the refresh button is a plain reload of the index
    assert!(html.contains(r#"<form method="get" action="/">"#));
    send(&app, "GET", "/").await;
    assert_eq!(broker.calls(), (2, 2));
}

#[tokio::test]
async fn state_endpoint_reports_without_fetching() {
    let broker = FakeBroker::with(scenario_account(), vec![]);
    let app = app(broker.clone());

    let (status, body) = send(&app, "GET", "/api/state").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert_eq!(broker.calls(), (0, 0));

    let (status, body) = send(&app, "POST", "/api/refresh").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["state"], "success");
    assert_eq!(json["data"]["equity"], "10500");
    let change: Decimal = json["data"]["percent_change"].as_str().unwrap().parse().unwrap();
    assert_eq!(change, dec!(5));
    assert_eq!(json["data"]["holdings"]["kind"], "all_cash");

    let (_, body) = send(&app, "GET", "/api/state").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["state"], "success");
    assert_eq!(broker.calls(), (1, 1));
}

#[tokio::test]
async fn failures_keep_the_server_up() {
    let app = app(FakeBroker::failing(DashboardError::connectivity("connection refused")));

    let (status, html) = send(&app, "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Connection Error"));
    assert!(html.contains("Refresh Data"));

    let (status, body) = send(&app, "GET", "/health").await;
    assert_eq!((status, body.as_str()), (StatusCode::OK, "OK"));
}

#[tokio::test]
async fn secrets_present_build_a_ready_dashboard() {
    let store = SecretStore::from_toml(
        r#"
        ALPACA_KEY = "PKTEST"
        ALPACA_SECRET = "s3cr3t"
        "#,
    )
    .unwrap();
    let state = AppState::<FakeBroker>::from_secrets(&store, Config::builder());
    assert!(matches!(state, AppState::Ready(_)));

    let (_, html) = send(&router(state), "GET", "/").await;
    assert!(html.contains("<td>AAPL</td>"));
}
