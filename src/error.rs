use serde::Serialize;
use thiserror::Error;

/// Everything that can go wrong between loading secrets and drawing the page.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connectivity error: {0}")]
    Connectivity(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl DashboardError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        DashboardError::Configuration(msg.into())
    }

    pub fn connectivity(msg: impl Into<String>) -> Self {
        DashboardError::Connectivity(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        DashboardError::Auth(msg.into())
    }

    pub fn computation(msg: impl Into<String>) -> Self {
        DashboardError::Computation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        DashboardError::Decode(msg.into())
    }

    /// Text shown in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Configuration(detail) => format!(
                "API Keys Missing! Set ALPACA_KEY and ALPACA_SECRET in the secret store. ({detail})"
            ),
            DashboardError::Connectivity(detail) => {
                format!("Connection Error: could not reach the brokerage API. ({detail})")
            }
            DashboardError::Auth(detail) => {
                format!("Authentication Error: the brokerage rejected the API key pair. ({detail})")
            }
            DashboardError::Computation(detail) => {
                format!("Computation Error: account figures could not be derived. ({detail})")
            }
            DashboardError::Decode(detail) => {
                format!("Data Error: the brokerage returned an unexpected payload. ({detail})")
            }
        }
    }
}

impl From<config::ConfigError> for DashboardError {
    fn from(err: config::ConfigError) -> Self {
        DashboardError::Configuration(err.to_string())
    }
}
