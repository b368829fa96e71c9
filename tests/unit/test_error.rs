use bybit_client::error::{AppError, ErrorResponse, RateLimitError};
use chrono::Utc;
use reqwest::StatusCode;

#[test]
fn test_sentinel_display() {
    assert_eq!(AppError::BadRequest.to_string(), "bad request");
    assert_eq!(AppError::AuthenticationFailed.to_string(), "authentication failed");
    assert_eq!(AppError::AccessDenied.to_string(), "access denied");
    assert_eq!(AppError::PathNotFound.to_string(), "path not found");
}

#[test]
fn test_from_status() {
    assert!(AppError::from_status(StatusCode::OK).is_none());
    assert!(matches!(
        AppError::from_status(StatusCode::BAD_REQUEST),
        Some(AppError::BadRequest)
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::UNAUTHORIZED),
        Some(AppError::AuthenticationFailed)
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::FORBIDDEN),
        Some(AppError::AccessDenied)
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::NOT_FOUND),
        Some(AppError::PathNotFound)
    ));
    match AppError::from_status(StatusCode::BAD_GATEWAY) {
        Some(AppError::Unexpected(status)) => assert_eq!(status, StatusCode::BAD_GATEWAY),
        other => panic!("Unexpected mapping: {other:?}"),
    }
}

#[test]
fn test_api_error_display_and_code() {
    let error = AppError::Api(ErrorResponse {
        ret_code: 180001,
        ret_msg: "invalid product".to_string(),
    });
    assert_eq!(error.to_string(), "180001, invalid product");
    assert_eq!(error.ret_code(), Some(180001));
    assert!(!error.is_rate_limit());
}

#[test]
fn test_rate_limit_display_with_reset() {
    let reset_at_ms = (Utc::now().timestamp() + 30) * 1000;
    let error = AppError::RateLimit(RateLimitError {
        ret_code: 10006,
        ret_msg: "Too many visits!".to_string(),
        reset_at_ms: Some(reset_at_ms),
        time_now: None,
    });
    let message = error.to_string();
    assert!(message.starts_with("Too many visits!, rate limit resets in "));
    assert!(message.ends_with('s'));
    assert_eq!(error.ret_code(), Some(10006));
    assert!(error.is_rate_limit());
}

#[test]
fn test_rate_limit_in_the_past_is_negative() {
    let error = RateLimitError {
        ret_code: 10018,
        ret_msg: "limit".to_string(),
        reset_at_ms: Some(1_000),
        time_now: None,
    };
    assert!(error.to_string().starts_with("limit, rate limit resets in -"));
}

#[test]
fn test_invalid_param_display() {
    let error = AppError::InvalidParam("category needed".to_string());
    assert_eq!(error.to_string(), "validate param: category needed");
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(matches!(app_error, AppError::Json(_)));
}

#[test]
fn test_missing_credentials_display() {
    assert_eq!(
        AppError::MissingCredentials.to_string(),
        "private endpoint requires an api key and a request signer"
    );
}
