use course_service::domain::{
    course::value_objects::{CourseFilter, split_csv},
    shared::pagination::{
        DEFAULT_LIMIT, MAX_LIMIT, PageLimits, PaginationParams, build_envelope, normalize,
        page_count,
    },
};

#[test]
fn pagination_defaults_are_safe_and_stable() {
    let limits = PageLimits::default();
    assert_eq!(limits.default_limit, DEFAULT_LIMIT);
    assert_eq!(limits.max_limit, MAX_LIMIT);
    assert_eq!(DEFAULT_LIMIT, 20);
    assert_eq!(MAX_LIMIT, 100);
}

#[test]
fn list_request_walkthrough_matches_wire_contract() {
    // page=0&limit=0 -> first page at the default size
    let (page, limit) = normalize(0, 0, MAX_LIMIT, DEFAULT_LIMIT);
    let params = PaginationParams { page, limit };
    assert_eq!(params.offset(), 0);

    let envelope = build_envelope(vec!["a", "b", "c"], page, limit, 3);
    let body = serde_json::to_value(&envelope).unwrap();
    assert_eq!(body["data"], serde_json::json!(["a", "b", "c"]));
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 20);
    assert_eq!(body["pagination"]["total_items"], 3);
    assert_eq!(body["pagination"]["total_pages"], 1);
}

#[test]
fn page_count_table() {
    let cases = [(0, 20, 0), (1, 20, 1), (20, 20, 1), (21, 20, 2), (100, 0, 1)];
    for (total, limit, expected) in cases {
        assert_eq!(page_count(total, limit), expected, "page_count({}, {})", total, limit);
    }
}

#[test]
fn limits_struct_matches_free_function() {
    let limits = PageLimits {
        max_limit: 50,
        default_limit: 10,
    };
    for (page, limit) in [(-1, -1), (0, 51), (7, 25), (2, 0)] {
        let (p, l) = normalize(page, limit, 50, 10);
        assert_eq!(limits.normalize(page, limit), PaginationParams { page: p, limit: l });
    }
}

#[test]
fn course_filter_from_comma_lists() {
    let filter = CourseFilter {
        skill_types: split_csv(Some("listening,reading")),
        levels: split_csv(None),
        ..Default::default()
    };
    assert_eq!(filter.skill_types, vec!["listening", "reading"]);
    assert!(filter.levels.is_empty());
    assert!(!filter.is_empty());
}
