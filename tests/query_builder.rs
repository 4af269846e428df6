use sightline::query::{build_radius_query, Query, QueryKey};

#[test]
fn test_radius_query_with_type() {
    let query = build_radius_query("New York", 10.0, Some("airport"));
    assert_eq!(query.as_str(), "type:airport near:New_York radius:10");
}

#[test]
fn test_radius_query_without_type() {
    let query = build_radius_query("Paris", 5.0, None);
    assert_eq!(query.as_str(), "near:Paris radius:5");
}

#[test]
fn test_near_never_contains_whitespace() {
    for near in ["São  Paulo", "Rio de\tJaneiro", " Ho Chi Minh City ", "a\n b"] {
        let query = build_radius_query(near, 25.0, None);
        let near_token = query
            .tokens()
            .into_iter()
            .find(|token| token.key == QueryKey::Near)
            .expect("near token present");
        assert!(!near_token.value.chars().any(char::is_whitespace));
        assert!(!near_token.value.contains("__"));
        assert!(!near_token.value.starts_with('_'));
    }
}

#[test]
fn test_fractional_radius_is_kept() {
    let query = build_radius_query("Oslo", 2.5, Some("bridge"));
    assert_eq!(query.as_str(), "type:bridge near:Oslo radius:2.5");
    assert!(query.is_structured());
}

#[test]
fn test_free_text_rejects_blank_input() {
    assert!(Query::free_text("").is_none());
    assert!(Query::free_text("  \t\n ").is_none());
    assert_eq!(
        Query::free_text("  power plants in texas ").unwrap().as_str(),
        "power plants in texas"
    );
}

#[test]
fn test_free_text_is_not_structured() {
    assert!(!Query::free_text("airports near london").unwrap().is_structured());
    assert!(Query::free_text("type:university region:california")
        .unwrap()
        .is_structured());
}
