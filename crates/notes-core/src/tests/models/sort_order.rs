use crate::SortOrder;

use std::str::FromStr;

#[test]
fn test_sort_order_from_str() {
    assert_eq!(SortOrder::from_str("asc").unwrap(), SortOrder::Ascending);
    assert_eq!(SortOrder::from_str("DESC").unwrap(), SortOrder::Descending);
    assert!(SortOrder::from_str("sideways").is_err());
}

#[test]
fn test_sort_order_default_is_newest_first() {
    assert_eq!(SortOrder::default(), SortOrder::Descending);
}
