/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Bybit Client Prelude
//!
//! Imports the types needed for most Bybit API interactions.
//!
//! ## Usage
//!
//! ```rust
//! use bybit_client::prelude::*;
//!
//! let request = GetProductInfoRequest::new(CategoryV5::FlexibleSaving).with_coin("BTC");
//! assert!(request.validate().is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Bybit API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, ErrorResponse, RateLimitError};

// ============================================================================
// CLIENT, SERVICES AND TRANSPORT
// ============================================================================

/// High level client
pub use crate::application::client::Client;

/// Earn service trait
pub use crate::application::interfaces::earn::EarnService;

/// HTTP transport and signing seam
pub use crate::model::http::{Access, HttpClient, RawResponse, RequestSigner, parse_response};

/// Response envelopes and classifier
pub use crate::model::envelope::{
    ApiVersion, CommonResponse, CommonV3Response, CommonV5Response, Envelope,
    check_response_body,
};

// ============================================================================
// MODELS
// ============================================================================

/// Request parameters
pub use crate::model::requests::{
    GetProductInfoRequest, GetStakedPositionsRequest, StakeRedeemRequest,
};

/// Response payloads
pub use crate::model::responses::{
    GetProductInfoResponse, GetStakedPositionsResponse, ProductInfo, ProductInfoResult,
    StakeRedeemResponse, StakeRedeemResult, StakedPosition, StakedPositionsResult, V5Response,
};

/// Exchange enumerations
pub use crate::presentation::earn::{AccountTypeV5, CategoryV5, Coin, OrderTypeV5};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Client order id generation
pub use crate::utils::id::get_order_link_id;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
