/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::{HEADER_LIMIT_RESET, USER_AGENT};
use crate::error::AppError;
use crate::model::envelope::{CommonV5Response, Envelope, check_response_body};
use chrono::Utc;
use reqwest::Client as HttpInternalClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Produces the `X-BAPI-SIGN` header value for private requests
///
/// The payload handed to the signer is
/// `timestamp + api_key + recv_window + query_string_or_json_body`.
/// Implementations typically compute a hex encoded HMAC-SHA256 over it with the
/// API secret; this crate does not ship one.
pub trait RequestSigner: Send + Sync {
    /// Signs `payload`
    fn sign(&self, payload: &str) -> Result<String, AppError>;
}

/// Whether an endpoint needs authentication headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No authentication
    Public,
    /// API key, timestamp, receive window and signature headers
    Private,
}

/// Raw response as returned by the transport, before classification
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Response body
    pub body: Vec<u8>,
    /// Response headers
    pub headers: HeaderMap,
}

/// HTTP transport for the Bybit REST API
///
/// Holds the configuration and the optional signer explicitly; each call is
/// independent, so a single instance can be shared between tasks.
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    signer: Option<Arc<dyn RequestSigner>>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.rest_api.base_url)
            .field("signer", &self.signer.is_some())
            .finish()
    }
}

impl HttpClient {
    /// Creates a new transport
    ///
    /// # Arguments
    /// * `config` - Configuration containing the base URL, timeout and credentials
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Transport ready to use for public endpoints
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
            signer: None,
        })
    }

    /// Sets the signer used for private endpoints
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes an unauthenticated GET request with `query` encoded as URL parameters
    pub async fn get_publicly<Q, T>(&self, path: &str, query: &Q) -> Result<T, AppError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let query = serde_urlencoded::to_string(query)?;
        let raw = self
            .send(Method::GET, path, &query, None, Access::Public)
            .await?;
        parse_response::<CommonV5Response, T>(&raw)
    }

    /// Makes an authenticated GET request against a V5 endpoint
    pub async fn get_v5_privately<Q, T>(&self, path: &str, query: &Q) -> Result<T, AppError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let query = serde_urlencoded::to_string(query)?;
        let raw = self
            .send(Method::GET, path, &query, None, Access::Private)
            .await?;
        parse_response::<CommonV5Response, T>(&raw)
    }

    /// Makes an authenticated POST request against a V5 endpoint with a JSON body
    pub async fn post_v5_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body)?;
        let raw = self
            .send(Method::POST, path, "", Some(body), Access::Private)
            .await?;
        parse_response::<CommonV5Response, T>(&raw)
    }

    /// Sends a request and returns the raw response
    ///
    /// HTTP level failures are mapped onto the sentinel errors; the body of a
    /// successful response is returned unclassified.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &str,
        body: Option<String>,
        access: Access,
    ) -> Result<RawResponse, AppError> {
        let base = self.config.rest_api.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let url = if query.is_empty() {
            format!("{base}/{path}")
        } else {
            format!("{base}/{path}?{query}")
        };

        let mut request = self.http_client.request(method.clone(), &url);

        if access == Access::Private {
            let payload = body.as_deref().unwrap_or(query);
            for (name, value) in self.auth_headers(payload)? {
                request = request.header(name, value);
            }
        }

        if let Some(b) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(b);
        }

        debug!("{} {}", method, url);
        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if let Some(err) = AppError::from_status(status) {
            let text = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, text);
            return Err(err);
        }

        read_raw(response).await
    }

    /// Builds the authentication headers for a private request
    fn auth_headers(&self, payload: &str) -> Result<Vec<(&'static str, String)>, AppError> {
        let (Some(api_key), Some(signer)) = (&self.config.credentials.api_key, &self.signer)
        else {
            return Err(AppError::MissingCredentials);
        };

        let timestamp = Utc::now().timestamp_millis().to_string();
        let recv_window = self.config.rest_api.recv_window.to_string();
        let signature = signer.sign(&format!("{timestamp}{api_key}{recv_window}{payload}"))?;

        Ok(vec![
            ("X-BAPI-API-KEY", api_key.clone()),
            ("X-BAPI-TIMESTAMP", timestamp),
            ("X-BAPI-RECV-WINDOW", recv_window),
            ("X-BAPI-SIGN", signature),
        ])
    }
}

async fn read_raw(response: Response) -> Result<RawResponse, AppError> {
    let headers = response.headers().clone();
    let body = response.bytes().await?.to_vec();
    Ok(RawResponse { body, headers })
}

/// Classifies a raw response with envelope `E` and decodes it into `T`
///
/// A rate-limit error whose envelope carried no reset timestamp picks it up
/// from the `X-Bapi-Limit-Reset-Timestamp` header.
pub fn parse_response<E: Envelope, T: DeserializeOwned>(raw: &RawResponse) -> Result<T, AppError> {
    if let Err(err) = check_response_body::<E>(&raw.body) {
        let err = attach_reset(err, &raw.headers);
        if let AppError::RateLimit(rate_limit) = &err {
            warn!(
                "Rate limited (code {}): {}",
                rate_limit.ret_code, rate_limit
            );
        }
        return Err(err);
    }
    Ok(serde_json::from_slice(&raw.body)?)
}

fn attach_reset(err: AppError, headers: &HeaderMap) -> AppError {
    match err {
        AppError::RateLimit(mut rate_limit) if rate_limit.reset_at_ms.is_none() => {
            rate_limit.reset_at_ms = headers
                .get(HEADER_LIMIT_RESET)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<i64>().ok());
            AppError::RateLimit(rate_limit)
        }
        other => other,
    }
}
