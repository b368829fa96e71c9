/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category (V5)
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CategoryV5 {
    /// Spot trading
    #[serde(rename = "spot")]
    Spot,
    /// USDT / USDC perpetuals and futures
    #[serde(rename = "linear")]
    Linear,
    /// Inverse contracts
    #[serde(rename = "inverse")]
    Inverse,
    /// Options
    #[serde(rename = "option")]
    Option,
    /// Earn flexible savings
    #[serde(rename = "FlexibleSaving")]
    FlexibleSaving,
}

impl CategoryV5 {
    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryV5::Spot => "spot",
            CategoryV5::Linear => "linear",
            CategoryV5::Inverse => "inverse",
            CategoryV5::Option => "option",
            CategoryV5::FlexibleSaving => "FlexibleSaving",
        }
    }
}

/// Order type (V5)
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderTypeV5 {
    /// Market order
    Market,
    /// Limit order
    Limit,
    /// Earn stake
    Stake,
    /// Earn redeem
    Redeem,
}

impl OrderTypeV5 {
    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderTypeV5::Market => "Market",
            OrderTypeV5::Limit => "Limit",
            OrderTypeV5::Stake => "Stake",
            OrderTypeV5::Redeem => "Redeem",
        }
    }
}

/// Account type (V5)
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountTypeV5 {
    /// Unified trading account
    Unified,
    /// Funding account
    Fund,
    /// Derivatives account (classic)
    Contract,
    /// Spot account (classic)
    Spot,
}

impl AccountTypeV5 {
    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountTypeV5::Unified => "UNIFIED",
            AccountTypeV5::Fund => "FUND",
            AccountTypeV5::Contract => "CONTRACT",
            AccountTypeV5::Spot => "SPOT",
        }
    }
}

/// Coin name, e.g. `BTC`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Coin(String);

impl Coin {
    /// Creates a coin from its ticker
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Ticker as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no ticker is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Coin {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Coin {
    fn from(value: String) -> Self {
        Self(value)
    }
}
