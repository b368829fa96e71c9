use bybit_client::application::client::Client;
use bybit_client::config::Config;
use bybit_client::error::AppError;
use bybit_client::model::http::RequestSigner;
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "test-api-key";
pub const SIGNATURE: &str = "test-signature";

/// Signer returning a fixed signature and recording every payload it saw
#[derive(Default)]
pub struct RecordingSigner {
    pub payloads: Mutex<Vec<String>>,
}

impl RequestSigner for RecordingSigner {
    fn sign(&self, payload: &str) -> Result<String, AppError> {
        self.payloads.lock().unwrap().push(payload.to_string());
        Ok(SIGNATURE.to_string())
    }
}

pub fn public_client(server_url: &str) -> Client {
    Client::new(Config::with_base_url(server_url)).unwrap()
}

pub fn private_client(server_url: &str) -> (Client, Arc<RecordingSigner>) {
    let signer = Arc::new(RecordingSigner::default());
    let config = Config::with_base_url(server_url).with_api_key(API_KEY);
    let client = Client::with_signer(config, signer.clone()).unwrap();
    (client, signer)
}
