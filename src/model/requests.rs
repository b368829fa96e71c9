/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::earn::{AccountTypeV5, CategoryV5, Coin, OrderTypeV5};
use crate::utils::id::get_order_link_id;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Earn endpoints only accept the flexible savings category
fn validate_flexible_saving(category: Option<CategoryV5>) -> Result<(), AppError> {
    match category {
        None => Err(AppError::InvalidParam("category needed".to_string())),
        Some(CategoryV5::FlexibleSaving) => Ok(()),
        Some(_) => Err(AppError::InvalidParam(
            "category must be flexible savings".to_string(),
        )),
    }
}

/// Parameters for `GET /v5/earn/product`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetProductInfoRequest {
    /// Product category, must be `FlexibleSaving`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryV5>,
    /// Optional coin filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<Coin>,
}

impl GetProductInfoRequest {
    /// Create new parameters with the category
    pub fn new(category: CategoryV5) -> Self {
        Self {
            category: Some(category),
            coin: None,
        }
    }

    /// Filter by coin
    pub fn with_coin(mut self, coin: impl Into<Coin>) -> Self {
        self.coin = Some(coin.into());
        self
    }

    /// Checks the parameters before anything is sent
    pub fn validate(&self) -> Result<(), AppError> {
        validate_flexible_saving(self.category)
    }
}

/// Parameters for `GET /v5/earn/position`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetStakedPositionsRequest {
    /// Product category, must be `FlexibleSaving`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryV5>,
    /// Optional product filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Optional coin filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<Coin>,
}

impl GetStakedPositionsRequest {
    /// Create new parameters with the category
    pub fn new(category: CategoryV5) -> Self {
        Self {
            category: Some(category),
            ..Default::default()
        }
    }

    /// Filter by product id
    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    /// Filter by coin
    pub fn with_coin(mut self, coin: impl Into<Coin>) -> Self {
        self.coin = Some(coin.into());
        self
    }

    /// Checks the parameters before anything is sent
    pub fn validate(&self) -> Result<(), AppError> {
        validate_flexible_saving(self.category)
    }
}

/// Body of `POST /v5/earn/place-order`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StakeRedeemRequest {
    /// Product category, must be `FlexibleSaving`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryV5>,
    /// `Stake` or `Redeem`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderTypeV5>,
    /// `UNIFIED` or `FUND`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountTypeV5>,
    /// Amount to stake or redeem, as a decimal string
    pub amount: String,
    /// Coin of the product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<Coin>,
    /// Product id
    pub product_id: String,
    /// Client order id, must be unique
    pub order_link_id: String,
}

impl StakeRedeemRequest {
    fn flexible_saving(
        order_type: OrderTypeV5,
        account_type: AccountTypeV5,
        coin: Coin,
        product_id: String,
        amount: String,
    ) -> Self {
        Self {
            category: Some(CategoryV5::FlexibleSaving),
            order_type: Some(order_type),
            account_type: Some(account_type),
            amount,
            coin: Some(coin),
            product_id,
            order_link_id: get_order_link_id(),
        }
    }

    /// Stakes `amount` of `coin` into a flexible savings product
    ///
    /// A random order link id is generated; override it with [`Self::with_order_link_id`].
    pub fn stake(
        account_type: AccountTypeV5,
        coin: impl Into<Coin>,
        product_id: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self::flexible_saving(
            OrderTypeV5::Stake,
            account_type,
            coin.into(),
            product_id.into(),
            amount.into(),
        )
    }

    /// Redeems `amount` of `coin` from a flexible savings product
    ///
    /// A random order link id is generated; override it with [`Self::with_order_link_id`].
    pub fn redeem(
        account_type: AccountTypeV5,
        coin: impl Into<Coin>,
        product_id: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self::flexible_saving(
            OrderTypeV5::Redeem,
            account_type,
            coin.into(),
            product_id.into(),
            amount.into(),
        )
    }

    /// Set the client order id
    pub fn with_order_link_id(mut self, order_link_id: impl Into<String>) -> Self {
        self.order_link_id = order_link_id.into();
        self
    }

    /// Checks the parameters before anything is sent
    pub fn validate(&self) -> Result<(), AppError> {
        let missing = |what: &str| Err(AppError::InvalidParam(format!("{what} needed")));

        if self.category.is_none() {
            return missing("category");
        }
        let Some(order_type) = self.order_type else {
            return missing("order type");
        };
        let Some(account_type) = self.account_type else {
            return missing("account type");
        };
        if self.amount.is_empty() {
            return missing("amount");
        }
        if self.product_id.is_empty() {
            return missing("product id");
        }
        if self.order_link_id.is_empty() {
            return missing("order link id");
        }

        validate_flexible_saving(self.category)?;

        if !matches!(order_type, OrderTypeV5::Stake | OrderTypeV5::Redeem) {
            return Err(AppError::InvalidParam(
                "order type should be either stake or redeem".to_string(),
            ));
        }
        if !matches!(account_type, AccountTypeV5::Unified | AccountTypeV5::Fund) {
            return Err(AppError::InvalidParam(
                "account type should be either fund or unified".to_string(),
            ));
        }
        Ok(())
    }
}
