use crate::datastructures::{
    account::AccountSnapshot, client::TradingClient, config::Config, position::Position,
};
use crate::error::DashboardError;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client as HttpClient, StatusCode,
};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

// Docs: https://docs.alpaca.markets/docs/authentication
fn auth_headers(config: &Config) -> Result<HeaderMap, DashboardError> {
    let value = |raw: &str, name: &str| {
        HeaderValue::from_str(raw)
            .map_err(|_| DashboardError::configuration(format!("{name} contains invalid characters")))
    };

    let mut headers = HeaderMap::new();
    headers.insert("APCA-API-KEY-ID", value(&config.alpaca_api_key, "ALPACA_KEY")?);
    let mut secret = value(&config.alpaca_secret_key, "ALPACA_SECRET")?;
    secret.set_sensitive(true);
    headers.insert("APCA-API-SECRET-KEY", secret);
    headers.insert("accept", HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn parse_base_url(raw: &str) -> Result<Url, DashboardError> {
    let mut url = Url::parse(raw)
        .map_err(|e| DashboardError::configuration(format!("invalid Alpaca base url {raw}: {e}")))?;
    // Url::join replaces the last segment unless the path ends with a slash.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[derive(Clone)]
pub struct AlpacaClient {
    http_client: HttpClient,
    base_url: Url,
    headers: HeaderMap,
}

impl AlpacaClient {
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| DashboardError::configuration(format!("invalid endpoint {path}: {e}")))?;

        let response = self
            .http_client
            .get(url.clone())
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|e| DashboardError::connectivity(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::connectivity(format!("reading {url} failed: {e}")))?;

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(DashboardError::auth(format!("{status}: {body}")));
            }
            s if !s.is_success() => {
                return Err(DashboardError::connectivity(format!("{status}: {body}")));
            }
            _ => {}
        }

        debug!(%url, bytes = body.len(), "alpaca response");

        serde_json::from_str(&body)
            .map_err(|e| DashboardError::decode(format!("GET {path}: {e}")))
    }
}

#[async_trait]
impl TradingClient for AlpacaClient {
    fn new(config: &Config) -> Result<Self, DashboardError> {
        Ok(AlpacaClient {
            http_client: HttpClient::new(),
            base_url: parse_base_url(&config.alpaca_base_url)?,
            headers: auth_headers(config)?,
        })
    }

    /// Docs: https://docs.alpaca.markets/reference/getaccount-1
    #[instrument(skip(self))]
    async fn get_account(&self) -> Result<AccountSnapshot, DashboardError> {
        self.get_json("v2/account").await
    }

    /// Docs: https://docs.alpaca.markets/reference/getallopenpositions
    #[instrument(skip(self))]
    async fn get_positions(&self) -> Result<Vec<Position>, DashboardError> {
        self.get_json("v2/positions").await
    }
}
