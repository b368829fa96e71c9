use crate::error::AppError;
use crate::model::requests::{
    GetProductInfoRequest, GetStakedPositionsRequest, StakeRedeemRequest,
};
use crate::model::responses::{
    GetProductInfoResponse, GetStakedPositionsResponse, StakeRedeemResponse,
};
use async_trait::async_trait;

#[async_trait]
/// Service for the Bybit V5 Earn endpoints
///
/// Every method validates its parameters first and returns
/// `AppError::InvalidParam` without touching the network when they are not
/// acceptable. API level failures come back as `AppError::Api` or
/// `AppError::RateLimit`.
pub trait EarnService: Send + Sync {
    /// Lists flexible savings products (`GET /v5/earn/product`, public)
    async fn get_product_info(
        &self,
        params: &GetProductInfoRequest,
    ) -> Result<GetProductInfoResponse, AppError>;

    /// Lists staked positions (`GET /v5/earn/position`, private)
    async fn get_staked_positions(
        &self,
        params: &GetStakedPositionsRequest,
    ) -> Result<GetStakedPositionsResponse, AppError>;

    /// Stakes into or redeems from a product (`POST /v5/earn/place-order`, private)
    async fn stake_redeem(
        &self,
        params: &StakeRedeemRequest,
    ) -> Result<StakeRedeemResponse, AppError>;
}
