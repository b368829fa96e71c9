/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error types returned by every public operation of the crate.

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// HTTP 400: the request was rejected before reaching the endpoint
    #[error("bad request")]
    BadRequest,
    /// HTTP 401: wrong key or missing authentication headers
    #[error("authentication failed")]
    AuthenticationFailed,
    /// HTTP 403: IP rate limit breached, empty GET body or restricted region
    #[error("access denied")]
    AccessDenied,
    /// HTTP 404: wrong path, or category not matching the account mode
    #[error("path not found")]
    PathNotFound,
    /// Non-zero return code reported by the API
    #[error(transparent)]
    Api(ErrorResponse),
    /// Rate-limit return code reported by the API
    #[error(transparent)]
    RateLimit(RateLimitError),
    /// Local parameter validation failed, nothing was sent
    #[error("validate param: {0}")]
    InvalidParam(String),
    /// A private endpoint was called without an API key or a request signer
    #[error("private endpoint requires an api key and a request signer")]
    MissingCredentials,
    /// Signer failed to produce a signature
    #[error("signing error: {0}")]
    Signing(String),
    /// JSON encoding or decoding error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Query string encoding error
    #[error("query encoding error: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),
    /// Transport level error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Any other non-success HTTP status
    #[error("unexpected status: {0}")]
    Unexpected(StatusCode),
}

impl AppError {
    /// Maps an HTTP status onto one of the sentinel errors
    ///
    /// Returns `None` for successful statuses.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Option<Self> {
        if status.is_success() {
            return None;
        }
        Some(match status {
            StatusCode::BAD_REQUEST => AppError::BadRequest,
            StatusCode::UNAUTHORIZED => AppError::AuthenticationFailed,
            StatusCode::FORBIDDEN => AppError::AccessDenied,
            StatusCode::NOT_FOUND => AppError::PathNotFound,
            other => AppError::Unexpected(other),
        })
    }

    /// Returns true if this error was caused by rate limiting
    #[must_use]
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, AppError::RateLimit(_))
    }

    /// Return code reported by the API, if the error came from one
    #[must_use]
    pub fn ret_code(&self) -> Option<i64> {
        match self {
            AppError::Api(e) => Some(e.ret_code),
            AppError::RateLimit(e) => Some(e.ret_code),
            _ => None,
        }
    }
}

/// Generic API error: non-zero return code and message, verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{ret_code}, {ret_msg}")]
pub struct ErrorResponse {
    /// Return code
    pub ret_code: i64,
    /// Return message
    pub ret_msg: String,
}

/// Rate-limit error built from the full response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitError {
    /// Return code (one of the rate-limit codes of the envelope version)
    pub ret_code: i64,
    /// Return message
    pub ret_msg: String,
    /// Timestamp in milliseconds at which the limit window resets
    pub reset_at_ms: Option<i64>,
    /// Server time reported by the envelope, as sent
    pub time_now: Option<String>,
}

impl RateLimitError {
    /// Time left until the rate-limit window resets, measured from `now`
    ///
    /// The reset timestamp is truncated to whole seconds.
    #[must_use]
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        let reset = DateTime::from_timestamp(self.reset_at_ms? / 1000, 0)?;
        Some(reset - now)
    }

    /// Time left until the rate-limit window resets
    #[must_use]
    pub fn remaining(&self) -> Option<TimeDelta> {
        self.remaining_at(Utc::now())
    }
}

impl fmt::Display for RateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.remaining() {
            Some(left) => write!(
                f,
                "{}, rate limit resets in {}",
                self.ret_msg,
                format_remaining(left)
            ),
            None => write!(f, "{}", self.ret_msg),
        }
    }
}

impl std::error::Error for RateLimitError {}

/// Renders a duration as `1h2m3.5s`, `4s` or `850ms`, negative values prefixed with `-`
pub(crate) fn format_remaining(delta: TimeDelta) -> String {
    let total = delta.num_milliseconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    if total < 1000 {
        return format!("{sign}{total}ms");
    }

    let hours = total / 3_600_000;
    let minutes = (total % 3_600_000) / 60_000;
    let seconds = (total % 60_000) / 1000;
    let millis = total % 1000;

    let mut out = String::from(sign);
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    if millis > 0 {
        let frac = format!("{millis:03}");
        out.push_str(&format!("{seconds}.{}s", frac.trim_end_matches('0')));
    } else {
        out.push_str(&format!("{seconds}s"));
    }
    out
}
