use bybit_client::config::{Config, RestApiConfig};
use bybit_client::constants::{DEFAULT_BASE_URL, DEFAULT_RECV_WINDOW, DEFAULT_TIMEOUT_SECS};
use std::env;

#[test]
fn test_with_base_url_has_no_credentials() {
    let config = Config::with_base_url("http://127.0.0.1:1234");
    assert_eq!(config.rest_api.base_url, "http://127.0.0.1:1234");
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.rest_api.recv_window, DEFAULT_RECV_WINDOW);
    assert!(config.credentials.api_key.is_none());

    let config = config.with_api_key("key");
    assert_eq!(config.credentials.api_key.as_deref(), Some("key"));
}

#[test]
fn test_rest_api_defaults() {
    let rest = RestApiConfig::default();
    assert_eq!(rest.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_new_reads_environment() {
    unsafe {
        env::set_var("BYBIT_REST_BASE_URL", "https://api-testnet.bybit.com");
        env::set_var("BYBIT_RECV_WINDOW", "10000");
    }
    let config = Config::new();
    assert_eq!(config.rest_api.base_url, "https://api-testnet.bybit.com");
    assert_eq!(config.rest_api.recv_window, 10000);
    unsafe {
        env::remove_var("BYBIT_REST_BASE_URL");
        env::remove_var("BYBIT_RECV_WINDOW");
    }
}

#[test]
fn test_config_serializes_for_display() {
    let config = Config::with_base_url("http://localhost");
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["rest_api"]["base_url"], "http://localhost");
}
