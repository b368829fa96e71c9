use assert_json_diff::assert_json_eq;
use bybit_client::error::AppError;
use bybit_client::model::requests::{
    GetProductInfoRequest, GetStakedPositionsRequest, StakeRedeemRequest,
};
use bybit_client::presentation::earn::{AccountTypeV5, CategoryV5, Coin, OrderTypeV5};
use serde_json::json;

fn valid_stake() -> StakeRedeemRequest {
    StakeRedeemRequest::stake(AccountTypeV5::Fund, "BTC", "430", "0.5")
        .with_order_link_id("btc-stake-001")
}

fn invalid_reason(request: &StakeRedeemRequest) -> String {
    match request.validate() {
        Err(AppError::InvalidParam(reason)) => reason,
        other => panic!("Expected a validation error, got {other:?}"),
    }
}

#[test]
fn stake_redeem_valid_request_passes() {
    assert!(valid_stake().validate().is_ok());
    let redeem = StakeRedeemRequest::redeem(AccountTypeV5::Unified, "USDT", "428", "10");
    assert!(redeem.validate().is_ok());
    assert_eq!(redeem.order_type, Some(OrderTypeV5::Redeem));
    assert_eq!(redeem.category, Some(CategoryV5::FlexibleSaving));
}

#[test]
fn stake_redeem_constructor_generates_order_link_id() {
    let a = StakeRedeemRequest::stake(AccountTypeV5::Fund, "BTC", "430", "0.5");
    let b = StakeRedeemRequest::stake(AccountTypeV5::Fund, "BTC", "430", "0.5");
    assert_eq!(a.order_link_id.len(), 30);
    assert_ne!(a.order_link_id, b.order_link_id);
}

#[test]
fn stake_redeem_missing_fields_are_rejected() {
    let mut r = valid_stake();
    r.category = None;
    assert_eq!(invalid_reason(&r), "category needed");

    let mut r = valid_stake();
    r.order_type = None;
    assert_eq!(invalid_reason(&r), "order type needed");

    let mut r = valid_stake();
    r.account_type = None;
    assert_eq!(invalid_reason(&r), "account type needed");

    let mut r = valid_stake();
    r.amount.clear();
    assert_eq!(invalid_reason(&r), "amount needed");

    let mut r = valid_stake();
    r.product_id.clear();
    assert_eq!(invalid_reason(&r), "product id needed");

    let mut r = valid_stake();
    r.order_link_id.clear();
    assert_eq!(invalid_reason(&r), "order link id needed");

    assert_eq!(
        invalid_reason(&StakeRedeemRequest::default()),
        "category needed"
    );
}

#[test]
fn stake_redeem_disallowed_values_are_rejected() {
    let mut r = valid_stake();
    r.category = Some(CategoryV5::Spot);
    assert_eq!(invalid_reason(&r), "category must be flexible savings");

    for order_type in [OrderTypeV5::Market, OrderTypeV5::Limit] {
        let mut r = valid_stake();
        r.order_type = Some(order_type);
        assert_eq!(invalid_reason(&r), "order type should be either stake or redeem");
    }

    for account_type in [AccountTypeV5::Contract, AccountTypeV5::Spot] {
        let mut r = valid_stake();
        r.account_type = Some(account_type);
        assert_eq!(
            invalid_reason(&r),
            "account type should be either fund or unified"
        );
    }
}

#[test]
fn validation_error_display() {
    let mut r = valid_stake();
    r.amount.clear();
    assert_eq!(
        r.validate().unwrap_err().to_string(),
        "validate param: amount needed"
    );
}

#[test]
fn stake_redeem_json_body() {
    let body = serde_json::to_value(valid_stake()).unwrap();
    assert_json_eq!(
        body,
        json!({
            "category": "FlexibleSaving",
            "orderType": "Stake",
            "accountType": "FUND",
            "amount": "0.5",
            "coin": "BTC",
            "productId": "430",
            "orderLinkId": "btc-stake-001"
        })
    );
}

#[test]
fn product_info_request_validation_and_query() {
    let request = GetProductInfoRequest::new(CategoryV5::FlexibleSaving).with_coin("ETH");
    assert!(request.validate().is_ok());
    assert_eq!(
        serde_urlencoded::to_string(&request).unwrap(),
        "category=FlexibleSaving&coin=ETH"
    );

    let request = GetProductInfoRequest::new(CategoryV5::FlexibleSaving);
    assert_eq!(
        serde_urlencoded::to_string(&request).unwrap(),
        "category=FlexibleSaving"
    );

    assert!(matches!(
        GetProductInfoRequest::default().validate(),
        Err(AppError::InvalidParam(_))
    ));
    assert!(matches!(
        GetProductInfoRequest::new(CategoryV5::Linear).validate(),
        Err(AppError::InvalidParam(_))
    ));
}

#[test]
fn staked_positions_request_validation_and_query() {
    let request = GetStakedPositionsRequest::new(CategoryV5::FlexibleSaving)
        .with_product_id("430")
        .with_coin(Coin::new("BTC"));
    assert!(request.validate().is_ok());
    assert_eq!(
        serde_urlencoded::to_string(&request).unwrap(),
        "category=FlexibleSaving&productId=430&coin=BTC"
    );

    let request = GetStakedPositionsRequest {
        category: Some(CategoryV5::Option),
        ..Default::default()
    };
    match request.validate() {
        Err(AppError::InvalidParam(reason)) => {
            assert_eq!(reason, "category must be flexible savings")
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}
