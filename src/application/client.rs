/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! High level client for the Bybit V5 REST API
//!
//! # Example
//! ```ignore
//! use bybit_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let products = client
//!     .get_product_info(&GetProductInfoRequest::new(CategoryV5::FlexibleSaving).with_coin("BTC"))
//!     .await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::earn::EarnService;
use crate::constants::{PATH_EARN_PLACE_ORDER, PATH_EARN_POSITION, PATH_EARN_PRODUCT};
use crate::error::AppError;
use crate::model::http::{HttpClient, RequestSigner};
use crate::model::requests::{
    GetProductInfoRequest, GetStakedPositionsRequest, StakeRedeemRequest,
};
use crate::model::responses::{
    GetProductInfoResponse, GetStakedPositionsResponse, StakeRedeemResponse,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the Bybit API
///
/// Cheap to clone; clones share the same transport.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client for public endpoints
    ///
    /// # Arguments
    /// * `config` - Configuration containing the base URL and API settings
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client able to call private endpoints
    ///
    /// # Arguments
    /// * `config` - Configuration, must carry an API key
    /// * `signer` - Produces the request signature
    pub fn with_signer(config: Config, signer: Arc<dyn RequestSigner>) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?.with_signer(signer));
        Ok(Self { http_client })
    }

    /// Creates a client sharing an existing transport
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets the underlying transport
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl EarnService for Client {
    async fn get_product_info(
        &self,
        params: &GetProductInfoRequest,
    ) -> Result<GetProductInfoResponse, AppError> {
        params.validate()?;
        info!("Getting earn product info");

        let response: GetProductInfoResponse = self
            .http_client
            .get_publicly(PATH_EARN_PRODUCT, params)
            .await?;

        debug!("Product info obtained: {} products", response.result.len());
        Ok(response)
    }

    async fn get_staked_positions(
        &self,
        params: &GetStakedPositionsRequest,
    ) -> Result<GetStakedPositionsResponse, AppError> {
        params.validate()?;
        info!("Getting staked positions");

        let response: GetStakedPositionsResponse = self
            .http_client
            .get_v5_privately(PATH_EARN_POSITION, params)
            .await?;

        debug!(
            "Staked positions obtained: {} positions",
            response.result.len()
        );
        Ok(response)
    }

    async fn stake_redeem(
        &self,
        params: &StakeRedeemRequest,
    ) -> Result<StakeRedeemResponse, AppError> {
        params.validate()?;
        info!(
            "Placing earn order {} for product {}",
            params.order_link_id, params.product_id
        );

        let response: StakeRedeemResponse = self
            .http_client
            .post_v5_json(PATH_EARN_PLACE_ORDER, params)
            .await?;

        debug!("Earn order accepted: {}", response.result.order_id);
        Ok(response)
    }
}
