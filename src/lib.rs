/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Bybit Client
//!
//! A client for the Bybit V5 REST API focused on the Earn product family:
//! flexible savings product info, staked positions and stake / redeem orders.
//!
//! The library validates request parameters, serializes them as a query string
//! or JSON body, performs the HTTP call and turns the response envelope into
//! either a typed result or a typed [`error::AppError`]. Rate-limit return
//! codes surface as [`error::RateLimitError`], which reports how long until
//! the limit window resets.
//!
//! ## Usage
//!
//! ```ignore
//! use bybit_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let products = client
//!     .get_product_info(&GetProductInfoRequest::new(CategoryV5::FlexibleSaving))
//!     .await?;
//! for product in &products.result.list {
//!     info!("{} apr={}", product.product_id, product.estimate_apr);
//! }
//! ```

/// Services, service interfaces and the high level client facade
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models, response envelopes and the HTTP transport
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Exchange enumerations shown to callers
pub mod presentation;
/// Configuration, logging and id helpers
pub mod utils;

/// Configuration re-exported at the crate root
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
