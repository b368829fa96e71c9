/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::envelope::CommonV5Response;
use crate::presentation::earn::{CategoryV5, Coin};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Deserializer, Serialize};

/// V5 response: common envelope plus the endpoint result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct V5Response<T> {
    /// Return code, message and server time
    #[serde(flatten)]
    pub common: CommonV5Response,
    /// Endpoint specific payload
    pub result: T,
}

/// Response of `GET /v5/earn/product`
pub type GetProductInfoResponse = V5Response<ProductInfoResult>;
/// Response of `GET /v5/earn/position`
pub type GetStakedPositionsResponse = V5Response<StakedPositionsResult>;
/// Response of `POST /v5/earn/place-order`
pub type StakeRedeemResponse = V5Response<StakeRedeemResult>;

/// Result of `GET /v5/earn/product`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductInfoResult {
    /// Products
    #[serde(default)]
    pub list: Vec<ProductInfo>,
}

/// Earn product
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    /// Coin
    pub coin: Coin,
    /// Product id
    pub product_id: String,
    /// Minimum stake amount
    pub min_stake_amount: String,
    /// Maximum stake amount
    pub max_stake_amount: String,
    /// Estimated APR, e.g. `0.5%`
    pub estimate_apr: String,
    /// Amount precision
    pub precision: String,
    /// `Available` or `NotAvailable`
    pub status: String,
    /// Category
    pub category: CategoryV5,
}

impl ProductInfoResult {
    /// Number of products
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// True when no products were returned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Products that are currently open for staking
    pub fn available(&self) -> impl Iterator<Item = &ProductInfo> {
        self.list.iter().filter(|p| p.status == "Available")
    }
}

/// Result of `GET /v5/earn/position`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StakedPositionsResult {
    /// Positions
    #[serde(default)]
    pub list: Vec<StakedPosition>,
}

impl StakedPositionsResult {
    /// Number of positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// True when there are no positions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Position held in `product_id`, if any
    #[must_use]
    pub fn by_product(&self, product_id: &str) -> Option<&StakedPosition> {
        self.list.iter().find(|p| p.product_id == product_id)
    }
}

/// Staked position
///
/// Older responses encode each position as a positional array
/// `[coin, productId, amount, totalPnl, claimableYield]` instead of an object.
/// Both encodings decode into this type.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StakedPosition {
    /// Coin
    pub coin: Coin,
    /// Product id
    pub product_id: String,
    /// Staked amount
    pub amount: String,
    /// Total PnL
    pub total_pnl: String,
    /// Yield that can be claimed
    pub claimable_yield: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StakedPositionWire {
    #[serde(rename_all = "camelCase")]
    Named {
        coin: Coin,
        product_id: String,
        amount: String,
        total_pnl: String,
        claimable_yield: String,
    },
    Positional(String, String, String, String, String),
}

impl From<StakedPositionWire> for StakedPosition {
    fn from(wire: StakedPositionWire) -> Self {
        match wire {
            StakedPositionWire::Named {
                coin,
                product_id,
                amount,
                total_pnl,
                claimable_yield,
            } => Self {
                coin,
                product_id,
                amount,
                total_pnl,
                claimable_yield,
            },
            StakedPositionWire::Positional(coin, product_id, amount, total_pnl, claimable_yield) => {
                Self {
                    coin: Coin::from(coin),
                    product_id,
                    amount,
                    total_pnl,
                    claimable_yield,
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for StakedPosition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StakedPositionWire::deserialize(deserializer).map(Self::from)
    }
}

/// Result of `POST /v5/earn/place-order`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StakeRedeemResult {
    /// Exchange order id
    pub order_id: String,
    /// Client order id echoed back
    pub order_link_id: String,
}
