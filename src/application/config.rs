/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_RECV_WINDOW, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Credentials used by private endpoints
pub struct Credentials {
    /// API key sent in the `X-BAPI-API-KEY` header
    pub api_key: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Bybit REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// Receive window in milliseconds for private requests
    pub recv_window: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            recv_window: DEFAULT_RECV_WINDOW,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Bybit API client
///
/// The configuration is passed explicitly to the client; nothing is read from
/// global state once it has been built.
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// A `.env` file is loaded first when present. Recognised variables:
    /// `BYBIT_API_KEY`, `BYBIT_REST_BASE_URL`, `BYBIT_REST_TIMEOUT` and
    /// `BYBIT_RECV_WINDOW`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key: Option<String> = get_env_or_none("BYBIT_API_KEY");
        if api_key.is_none() {
            debug!("BYBIT_API_KEY not set, only public endpoints are usable");
        }

        Config {
            credentials: Credentials { api_key },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "BYBIT_REST_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("BYBIT_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                recv_window: get_env_or_default("BYBIT_RECV_WINDOW", DEFAULT_RECV_WINDOW),
            },
        }
    }

    /// Creates a configuration pointing at `base_url`, without credentials
    ///
    /// Does not read the environment.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: Credentials::default(),
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                ..RestApiConfig::default()
            },
        }
    }

    /// Sets the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.credentials.api_key = Some(api_key.into());
        self
    }
}
