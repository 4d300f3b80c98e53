//! Secret store and server settings.
//!
//! Sources, later overriding earlier:
//! 1. `secrets.toml` in the working directory (optional)
//! 2. process environment (`ALPACA_KEY`, `ALPACA_SECRET`, `DASHBOARD_BIND_ADDR`)
//!
//! Keys are matched case-insensitively, so `ALPACA_KEY = "..."` in the file and
//! the `ALPACA_KEY` environment variable name the same entry.

use crate::datastructures::config::Credentials;
use crate::error::DashboardError;
use config::{Environment, File, FileFormat, Source, Value};
use std::collections::HashMap;
use std::net::SocketAddr;

pub const SECRETS_FILE: &str = "secrets.toml";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";

/// Raw entries of the secret store. Nothing here is validated yet.
#[derive(Default)]
pub struct SecretStore {
    pub alpaca_key: Option<String>,
    pub alpaca_secret: Option<String>,
    pub dashboard_bind_addr: Option<String>,
}

impl SecretStore {
    pub fn load() -> Result<Self, DashboardError> {
        Self::layered(
            &File::new(SECRETS_FILE, FileFormat::Toml).required(false),
            &Environment::default(),
        )
    }

    /// Inline TOML only; the process environment is ignored.
    pub fn from_toml(toml: &str) -> Result<Self, DashboardError> {
        Self::layered(
            &File::from_str(toml, FileFormat::Toml),
            &Environment::default().source(Some(HashMap::new())),
        )
    }

    // config keeps file keys as written but lowercases environment keys, so
    // both are folded to lowercase here and the environment is applied last.
    fn layered(file: &dyn Source, env: &dyn Source) -> Result<Self, DashboardError> {
        let mut entries: HashMap<String, Value> = HashMap::new();
        for source in [file, env] {
            for (key, value) in source.collect()? {
                entries.insert(key.to_lowercase(), value);
            }
        }

        let mut take = |name: &str| entries.remove(name).map(Value::into_string).transpose();
        Ok(SecretStore {
            alpaca_key: take("alpaca_key")?,
            alpaca_secret: take("alpaca_secret")?,
            dashboard_bind_addr: take("dashboard_bind_addr")?,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, DashboardError> {
        let raw = self.dashboard_bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|e| DashboardError::configuration(format!("DASHBOARD_BIND_ADDR {raw}: {e}")))
    }
}

fn require(value: &Option<String>, name: &str) -> Result<String, DashboardError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(DashboardError::configuration(format!("{name} is not set"))),
    }
}

/// Both secrets or nothing. No defaults, no retry.
pub fn load_credentials(store: &SecretStore) -> Result<Credentials, DashboardError> {
    let key = require(&store.alpaca_key, "ALPACA_KEY")?;
    let secret = require(&store.alpaca_secret, "ALPACA_SECRET")?;
    Ok(Credentials { key, secret })
}
