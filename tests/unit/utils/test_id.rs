use bybit_client::utils::id::get_order_link_id;
use std::collections::HashSet;

#[test]
fn test_order_link_id_length() {
    assert_eq!(get_order_link_id().len(), 30);
}

#[test]
fn test_order_link_id_contains_valid_chars() {
    let id = get_order_link_id();
    assert!(
        id.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
        "Invalid id: {id}"
    );
}

#[test]
fn test_order_link_id_uniqueness() {
    let ids: HashSet<String> = (0..100).map(|_| get_order_link_id()).collect();
    assert_eq!(ids.len(), 100);
}
