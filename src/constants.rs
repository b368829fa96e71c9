/// User agent string used in HTTP requests to identify this client to the Bybit API
pub const USER_AGENT: &str = "bybit-client/0.1.0";
/// Default REST endpoint (mainnet)
pub const DEFAULT_BASE_URL: &str = "https://api.bybit.com";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default receive window in milliseconds sent with private requests
pub const DEFAULT_RECV_WINDOW: u64 = 5000;
/// Length of generated order link ids
pub const ORDER_LINK_ID_LEN: usize = 30;

/// Return code the legacy API uses for "too many visits"
pub const LEGACY_RATE_LIMIT_CODES: &[i64] = &[10006];
/// Return codes the V5 API uses for rate limiting (too many visits, IP / UID limit)
pub const V5_RATE_LIMIT_CODES: &[i64] = &[10006, 10018];

/// Response header carrying the V5 rate-limit reset timestamp in milliseconds
pub const HEADER_LIMIT_RESET: &str = "x-bapi-limit-reset-timestamp";

/// V5 earn product info endpoint (public)
pub const PATH_EARN_PRODUCT: &str = "/v5/earn/product";
/// V5 earn staked positions endpoint (private)
pub const PATH_EARN_POSITION: &str = "/v5/earn/position";
/// V5 earn stake / redeem endpoint (private)
pub const PATH_EARN_PLACE_ORDER: &str = "/v5/earn/place-order";
