use crate::constants::ORDER_LINK_ID_LEN;

/// Generates a client order id for stake / redeem requests.
///
/// The id is `ORDER_LINK_ID_LEN` characters long and composed of uppercase
/// English letters (`A-Z`) and digits (`0-9`), generated with `nanoid`.
///
/// # Examples
/// ```
/// use bybit_client::utils::id::get_order_link_id;
/// let id = get_order_link_id();
/// assert_eq!(id.len(), 30);
/// ```
pub fn get_order_link_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(ORDER_LINK_ID_LEN, &alphabet)
}
