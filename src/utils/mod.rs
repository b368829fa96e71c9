/// Module containing environment variable helpers used by the configuration
pub mod config;
/// Module containing client order id generation
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use id::*;
pub use logger::*;
