/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Response envelopes and the return-code classifier.
//!
//! Every Bybit response is wrapped in an envelope carrying a return code, a
//! message and some metadata. Three envelope generations coexist: the legacy
//! snake_case one, and the camelCase V3 and V5 ones. They differ only in field
//! names and in which return codes mean "rate limited", so a single generic
//! routine, [`check_response_body`], handles all of them through the
//! [`Envelope`] trait.

use crate::constants::{LEGACY_RATE_LIMIT_CODES, V5_RATE_LIMIT_CODES};
use crate::error::{AppError, ErrorResponse, RateLimitError};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Common view over the different response envelope shapes
pub trait Envelope: DeserializeOwned {
    /// Return codes that denote rate limiting for this envelope version
    const RATE_LIMIT_CODES: &'static [i64];

    /// Return code, 0 on success
    fn ret_code(&self) -> i64;

    /// Human readable return message
    fn ret_msg(&self) -> &str;

    /// Rate-limit reset timestamp in milliseconds, when the envelope carries it
    fn rate_limit_reset_ms(&self) -> Option<i64> {
        None
    }

    /// Server time as reported by the envelope
    fn server_time(&self) -> Option<String>;
}

/// Legacy response envelope
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CommonResponse {
    /// Return code
    pub ret_code: i64,
    /// Return message
    #[serde(default)]
    pub ret_msg: String,
    /// Extended code
    #[serde(default)]
    pub ext_code: Option<String>,
    /// Extended info
    #[serde(default)]
    pub ext_info: Option<String>,
    /// Server time in seconds, as a decimal string
    #[serde(default)]
    pub time_now: Option<String>,
    /// Remaining requests in the current window
    #[serde(default)]
    pub rate_limit_status: Option<i64>,
    /// Window reset timestamp in milliseconds
    #[serde(default)]
    pub rate_limit_reset_ms: Option<i64>,
    /// Requests allowed per window
    #[serde(default)]
    pub rate_limit: Option<i64>,
}

impl Envelope for CommonResponse {
    const RATE_LIMIT_CODES: &'static [i64] = LEGACY_RATE_LIMIT_CODES;

    fn ret_code(&self) -> i64 {
        self.ret_code
    }

    fn ret_msg(&self) -> &str {
        &self.ret_msg
    }

    fn rate_limit_reset_ms(&self) -> Option<i64> {
        self.rate_limit_reset_ms
    }

    fn server_time(&self) -> Option<String> {
        self.time_now.clone()
    }
}

/// V3 response envelope
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommonV3Response {
    /// Return code
    pub ret_code: i64,
    /// Return message
    #[serde(default)]
    pub ret_msg: String,
    /// Extended info, free form
    #[serde(default)]
    pub ret_ext_info: Value,
    /// Server time in milliseconds
    #[serde(default)]
    pub time: Option<i64>,
}

impl Envelope for CommonV3Response {
    const RATE_LIMIT_CODES: &'static [i64] = &[];

    fn ret_code(&self) -> i64 {
        self.ret_code
    }

    fn ret_msg(&self) -> &str {
        &self.ret_msg
    }

    fn server_time(&self) -> Option<String> {
        self.time.map(|t| t.to_string())
    }
}

/// V5 response envelope
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommonV5Response {
    /// Return code
    pub ret_code: i64,
    /// Return message
    #[serde(default)]
    pub ret_msg: String,
    /// Extended info, free form
    #[serde(default)]
    pub ret_ext_info: Value,
    /// Server time in milliseconds
    #[serde(default)]
    pub time: Option<i64>,
}

impl Envelope for CommonV5Response {
    const RATE_LIMIT_CODES: &'static [i64] = V5_RATE_LIMIT_CODES;

    fn ret_code(&self) -> i64 {
        self.ret_code
    }

    fn ret_msg(&self) -> &str {
        &self.ret_msg
    }

    fn server_time(&self) -> Option<String> {
        self.time.map(|t| t.to_string())
    }
}

/// Classifies a raw response body
///
/// # Returns
/// * `Ok(())` - return code is 0, whatever the other fields say
/// * `Err(AppError::RateLimit)` - return code is one of `E::RATE_LIMIT_CODES`
/// * `Err(AppError::Api)` - any other non-zero return code
/// * `Err(AppError::Json)` - the body is not a valid envelope
pub fn check_response_body<E: Envelope>(body: &[u8]) -> Result<(), AppError> {
    let envelope: E = serde_json::from_slice(body)?;
    let ret_code = envelope.ret_code();

    if E::RATE_LIMIT_CODES.contains(&ret_code) {
        return Err(AppError::RateLimit(RateLimitError {
            ret_code,
            ret_msg: envelope.ret_msg().to_string(),
            reset_at_ms: envelope.rate_limit_reset_ms(),
            time_now: envelope.server_time(),
        }));
    }

    match ret_code {
        0 => Ok(()),
        _ => Err(AppError::Api(ErrorResponse {
            ret_code,
            ret_msg: envelope.ret_msg().to_string(),
        })),
    }
}

/// Envelope generation of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiVersion {
    /// snake_case envelope
    Legacy,
    /// camelCase envelope without rate-limit codes
    V3,
    /// camelCase envelope
    V5,
}

impl ApiVersion {
    /// Classifies `body` with the envelope of this version
    pub fn check(self, body: &[u8]) -> Result<(), AppError> {
        match self {
            ApiVersion::Legacy => check_response_body::<CommonResponse>(body),
            ApiVersion::V3 => check_response_body::<CommonV3Response>(body),
            ApiVersion::V5 => check_response_body::<CommonV5Response>(body),
        }
    }
}
