use crate::{Category, CategoryFilter};

use std::str::FromStr;

#[test]
fn test_category_as_str() {
    assert_eq!(Category::Work.as_str(), "Work");
    assert_eq!(Category::Study.as_str(), "Study");
    assert_eq!(Category::Personal.as_str(), "Personal");
}

#[test]
fn test_category_from_str_ignores_case() {
    assert_eq!(Category::from_str("work").unwrap(), Category::Work);
    assert_eq!(Category::from_str("STUDY").unwrap(), Category::Study);
    assert_eq!(Category::from_str("Personal").unwrap(), Category::Personal);
    assert!(Category::from_str("errands").is_err());
}

#[test]
fn test_category_default_is_personal() {
    assert_eq!(Category::default(), Category::Personal);
}

#[test]
fn test_category_serializes_as_capitalized_name() {
    assert_eq!(serde_json::to_string(&Category::Study).unwrap(), "\"Study\"");
}

#[test]
fn test_category_filter_from_str() {
    assert_eq!(CategoryFilter::from_str("all").unwrap(), CategoryFilter::All);
    assert_eq!(
        CategoryFilter::from_str("work").unwrap(),
        CategoryFilter::Only(Category::Work)
    );
    assert!(CategoryFilter::from_str("nope").is_err());
}

#[test]
fn test_category_all_parses_back_from_display() {
    for category in Category::ALL {
        assert_eq!(Category::from_str(&category.to_string()).unwrap(), category);
    }
}
