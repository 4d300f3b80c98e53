use std::fmt;

pub const PAPER_API_URL: &str = "https://paper-api.alpaca.markets";

/// API key pair read from the secret store.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Credentials {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

// Keeps the secret out of logs and panics.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/* Immutable configuration object. */
#[derive(Debug, Clone)]
pub struct Config {
    pub alpaca_base_url: String,
    pub alpaca_api_key: String,
    pub alpaca_secret_key: String,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/* Creates the final config object.  */
pub struct ConfigBuilder {
    alpaca_base_url: String,
    alpaca_api_key: String,
    alpaca_secret_key: String,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder {
            alpaca_base_url: PAPER_API_URL.to_string(),
            alpaca_api_key: String::new(),
            alpaca_secret_key: String::new(),
        }
    }
}

impl ConfigBuilder {
    /// Defaults to the paper trading endpoint. Only tests point it elsewhere.
    pub fn alpaca_base_url(mut self, alpaca_base_url: String) -> Self {
        self.alpaca_base_url = alpaca_base_url;
        self
    }

    pub fn alpaca_api_key(mut self, alpaca_api_key: String) -> Self {
        self.alpaca_api_key = alpaca_api_key;
        self
    }

    pub fn alpaca_secret_key(mut self, alpaca_secret_key: String) -> Self {
        self.alpaca_secret_key = alpaca_secret_key;
        self
    }

    pub fn credentials(self, credentials: &Credentials) -> Self {
        self.alpaca_api_key(credentials.key.clone())
            .alpaca_secret_key(credentials.secret.clone())
    }

    pub fn build(self) -> Config {
        Config {
            alpaca_base_url: self.alpaca_base_url,
            alpaca_api_key: self.alpaca_api_key,
            alpaca_secret_key: self.alpaca_secret_key,
        }
    }
}
