//! Tests for pagination module

use super::*;
use serde_json::json;
use url::Url;

fn pagination(page: u32, next_page: Option<&str>) -> Pagination {
    Pagination {
        limit: 50,
        page,
        total: 120,
        next_page: next_page.map(str::to_string),
    }
}

// ============================================================================
// Envelope decoding
// ============================================================================

#[test]
fn test_null_string_sentinel_is_absent() {
    let p: Pagination = serde_json::from_value(json!({
        "limit": 20, "page": 3, "total": 60, "next_page": "null"
    }))
    .unwrap();

    assert_eq!(p.next_page, None);
    assert!(!p.has_next());
}

#[test]
fn test_json_null_and_missing_next_page_are_absent() {
    let p: Pagination =
        serde_json::from_value(json!({"limit": 20, "page": 3, "total": 60, "next_page": null}))
            .unwrap();
    assert_eq!(p.next_page, None);

    let p: Pagination =
        serde_json::from_value(json!({"limit": 20, "page": 3, "total": 60})).unwrap();
    assert_eq!(p.next_page, None);
}

#[test]
fn test_next_page_url_is_kept() {
    let p: Pagination = serde_json::from_value(json!({
        "limit": 20, "page": 1, "total": 60,
        "next_page": "https://api.stagingeb.com/v1/properties?limit=20&page=2"
    }))
    .unwrap();

    assert!(p.has_next());
    assert_eq!(
        p.next_page.as_deref(),
        Some("https://api.stagingeb.com/v1/properties?limit=20&page=2")
    );
}

#[test]
fn test_absent_next_page_serializes_as_sentinel() {
    let value = serde_json::to_value(pagination(3, None)).unwrap();
    assert_eq!(value["next_page"], "null");
}

#[test]
fn test_total_pages() {
    assert_eq!(pagination(1, None).total_pages(), 3);

    let p = Pagination {
        limit: 0,
        ..Default::default()
    };
    assert_eq!(p.total_pages(), 0);
}

#[test]
fn test_listing_page_from_slice() {
    let body = br#"{
        "pagination": {"limit": 10, "page": 1, "total": 2, "next_page": "null"},
        "content": [{"title": "A"}, {"title": "B"}]
    }"#;

    let page: ListingPage<serde_json::Value> = ListingPage::from_slice(body).unwrap();
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1]["title"], "B");
}

#[test]
fn test_listing_page_missing_content_is_empty() {
    let body = br#"{"pagination": {"limit": 10, "page": 1, "total": 0, "next_page": "null"}}"#;
    let page: ListingPage<serde_json::Value> = ListingPage::from_slice(body).unwrap();
    assert!(page.items.is_empty());
}

#[test]
fn test_listing_page_of_records_without_default() {
    #[derive(Debug, serde::Deserialize)]
    struct Listing {
        public_id: String,
    }

    let body = br#"{
        "pagination": {"limit": 10, "page": 1, "total": 1, "next_page": "null"},
        "content": [{"public_id": "EB-1"}]
    }"#;
    let page: ListingPage<Listing> = ListingPage::from_slice(body).unwrap();
    assert_eq!(page.items[0].public_id, "EB-1");

    let body = br#"{"pagination": {"limit": 10, "page": 1, "total": 0, "next_page": "null"}}"#;
    let page: ListingPage<Listing> = ListingPage::from_slice(body).unwrap();
    assert!(page.items.is_empty());
}

#[test]
fn test_listing_page_malformed_is_decode_error() {
    let err = ListingPage::<serde_json::Value>::from_slice(b"<html>oops</html>").unwrap_err();
    assert!(err.is_decode());
}

// ============================================================================
// Cursor
// ============================================================================

#[test]
fn test_page_from_url() {
    assert_eq!(
        page_from_url("http://test.com?page=2", None, "page").unwrap(),
        2
    );
    assert_eq!(
        page_from_url("https://api.stagingeb.com/v1/properties?limit=50&page=7", None, "page").unwrap(),
        7
    );
}

#[test]
fn test_page_from_url_errors() {
    assert!(page_from_url("not a url", None, "page").unwrap_err().is_decode());
    assert!(page_from_url("http://test.com?limit=5", None, "page")
        .unwrap_err()
        .is_decode());
    assert!(page_from_url("http://test.com?page=two", None, "page")
        .unwrap_err()
        .is_decode());
}

#[test]
fn test_page_from_relative_url() {
    let base = Url::parse("https://api.stagingeb.com").unwrap();

    assert_eq!(
        page_from_url("/v1/properties?limit=50&page=2", Some(&base), "page").unwrap(),
        2
    );
    assert_eq!(page_from_url("?page=3", Some(&base), "page").unwrap(), 3);
    assert!(page_from_url("/v1/properties?limit=50&page=2", None, "page")
        .unwrap_err()
        .is_decode());
}

#[test]
fn test_cursor_advances_from_relative_next_url() {
    let base = Url::parse("http://localhost:8080").unwrap();
    let cursor = PageCursor::default();
    let mut state = cursor.initial_state();

    let next = cursor
        .advance(
            &pagination(1, Some("/v1/properties?limit=50&page=2")),
            50,
            Some(&base),
            &mut state,
        )
        .unwrap();
    assert_eq!(next, NextPage::Continue(2));

    let next = cursor
        .advance(
            &pagination(2, Some("/v1/properties?limit=50&page=2")),
            50,
            Some(&base),
            &mut state,
        )
        .unwrap();
    assert_eq!(next, NextPage::Done(StopReason::Stalled));
}

#[test]
fn test_cursor_default() {
    let cursor = PageCursor::default();
    assert_eq!(cursor.page_size, 50);
    assert_eq!(cursor.start_page, 1);
    assert_eq!(cursor.initial_state().page, 1);
}

#[test]
fn test_cursor_query_params_order() {
    let cursor = PageCursor::new(50);
    let state = PaginationState::with_page(4);

    assert_eq!(
        cursor.query_params(&state),
        vec![
            ("page".to_string(), "4".to_string()),
            ("limit".to_string(), "50".to_string()),
        ]
    );
}

#[test]
fn test_cursor_advances_to_next_page() {
    let cursor = PageCursor::default();
    let mut state = cursor.initial_state();

    let next = cursor
        .advance(&pagination(1, Some("http://test.com?page=2")), 50, None, &mut state)
        .unwrap();

    assert_eq!(next, NextPage::Continue(2));
    assert_eq!(state.page, 2);
    assert_eq!(state.pages_fetched, 1);
    assert_eq!(state.total_fetched, 50);
    assert!(!state.is_done());
}

#[test]
fn test_cursor_stops_on_last_page() {
    let cursor = PageCursor::default();
    let mut state = PaginationState::with_page(3);

    let next = cursor.advance(&pagination(3, None), 20, None, &mut state).unwrap();

    assert_eq!(next, NextPage::Done(StopReason::LastPage));
    assert!(next.is_done());
    assert_eq!(state.stop, Some(StopReason::LastPage));
    assert_eq!(state.page, 3);
}

#[test]
fn test_cursor_stall_guard() {
    let cursor = PageCursor::default();
    let mut state = cursor.initial_state();

    let next = cursor
        .advance(&pagination(1, Some("http://test.com?page=1")), 1, None, &mut state)
        .unwrap();

    assert_eq!(next, NextPage::Done(StopReason::Stalled));
    assert_eq!(state.stop, Some(StopReason::Stalled));
}

#[test]
fn test_cursor_bad_next_url_is_error() {
    let cursor = PageCursor::default();
    let mut state = cursor.initial_state();

    let err = cursor
        .advance(&pagination(1, Some("::not-a-url::")), 1, None, &mut state)
        .unwrap_err();
    assert!(err.is_decode());
    assert!(!state.is_done());
}

#[test]
fn test_cursor_can_move_backwards() {
    let cursor = PageCursor::default();
    let mut state = PaginationState::with_page(5);

    let next = cursor
        .advance(&pagination(5, Some("http://test.com?page=2")), 1, None, &mut state)
        .unwrap();
    assert_eq!(next, NextPage::Continue(2));
}
