//! Integration tests for tripdesk
//!
//! These tests load the JSON and CSV fixtures through the public API and
//! drive complete browsing sessions over them.

use std::path::{Path, PathBuf};
use tripdesk::browser::{BrowseError, CollectionBrowser, SortDirection, SortPagePolicy};
use tripdesk::entities::{CorporateUser, FlightBooking, builtin_schema};
use tripdesk::record::{DynamicRecord, Record};
use tripdesk::schema::EntitySchema;
use tripdesk::source;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn corporate_users() -> CollectionBrowser<CorporateUser> {
    let users = source::load_typed(&fixture("corporate_users.json")).unwrap();
    CollectionBrowser::for_entity(users).unwrap()
}

fn flight_bookings() -> CollectionBrowser<FlightBooking> {
    let bookings = source::load_typed(&fixture("flight_bookings.json")).unwrap();
    CollectionBrowser::for_entity(bookings).unwrap()
}

fn hotel_bookings() -> CollectionBrowser<DynamicRecord> {
    let schema = EntitySchema::load(&fixture("hotel_bookings.toml")).unwrap();
    let records = source::load_records(&fixture("hotel_bookings.csv")).unwrap();
    CollectionBrowser::builder()
        .schema(schema)
        .records(records)
        .build()
        .unwrap()
}

fn ids<R: Record>(items: &[&R]) -> Vec<String> {
    items.iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn test_verified_corporate_users() {
    let mut browser = corporate_users();
    browser.set_filter("status", "verified").unwrap();

    let view = browser.derived_view();
    assert_eq!(view.total_matched, 3);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.page_size, 5);
}

#[test]
fn test_search_matches_destination() {
    let mut browser = flight_bookings();
    browser.set_search_query("dubai");

    let view = browser.derived_view();
    assert_eq!(view.total_matched, 1);
    assert_eq!(view.visible_items[0].destination, "Dubai (DXB)");
}

#[test]
fn test_sort_price_twice_flips_direction() {
    let mut browser = flight_bookings();

    browser.set_sort("price").unwrap();
    let first = browser.derived_view().visible_items[0].id.clone();
    assert_eq!(
        browser.sort().map(|s| s.direction),
        Some(SortDirection::Ascending)
    );

    browser.set_sort("price").unwrap();
    let view = browser.derived_view();
    assert_eq!(
        view.active_sort.as_ref().map(|s| s.direction),
        Some(SortDirection::Descending)
    );
    assert_eq!(first, "FB007");
    assert_eq!(view.visible_items[0].id, "FB003");
}

#[test]
fn test_page_beyond_range_clamps() {
    let mut browser = corporate_users();
    assert_eq!(browser.derived_view().total_pages, 2);

    browser.set_page(99);
    assert_eq!(browser.current_page(), 2);
    assert_eq!(
        ids(&browser.derived_view().visible_items),
        vec!["CU006", "CU007", "CU008"]
    );
}

#[test]
fn test_no_query_keeps_source_order() {
    let browser = corporate_users();
    let view = browser.derived_view();
    assert_eq!(
        ids(&view.visible_items),
        vec!["CU001", "CU002", "CU003", "CU004", "CU005"]
    );
    assert!(view.active_sort.is_none());
    assert_eq!(view.window().unwrap().to_string(), "Showing 1 to 5 of 8");
}

#[test]
fn test_configuration_errors_surface() {
    let mut browser = flight_bookings();
    assert!(matches!(
        browser.set_filter("airline", "AI"),
        Err(BrowseError::UnknownFilter(_))
    ));
    assert!(matches!(
        browser.set_filter("status", "booked"),
        Err(BrowseError::InvalidFilterValue { .. })
    ));
    assert!(matches!(
        browser.set_sort("email"),
        Err(BrowseError::UnknownSortField(_))
    ));
}

#[test]
fn test_schema_driven_csv_session() {
    let mut browser = hotel_bookings();
    assert_eq!(browser.page_size(), 4);
    assert_eq!(browser.derived_view().total_pages, 2);

    browser.set_filter("status", "confirmed").unwrap();
    browser.set_sort("amount").unwrap();
    browser.set_sort("amount").unwrap();
    assert_eq!(
        ids(&browser.derived_view().visible_items),
        vec!["HB002", "HB001", "HB005"]
    );

    browser.set_filter("status", "all").unwrap();
    browser.set_sort("amount").unwrap();
    let view = browser.derived_view();
    assert_eq!(view.total_matched, 6);
    assert_eq!(ids(&view.visible_items)[0], "HB003");
}

#[test]
fn test_open_filter_options_and_tally() {
    let browser = hotel_bookings();
    assert_eq!(
        browser.filter_options("city").unwrap(),
        vec!["Bangalore", "Delhi", "Dubai", "London", "Mumbai", "Singapore"]
    );

    let counts = browser.tally("status").unwrap();
    assert_eq!(counts["confirmed"], 3);
    assert_eq!(counts["pending"], 2);
    assert_eq!(counts["cancelled"], 1);
}

#[test]
fn test_preserve_policy_keeps_page_on_sort() {
    let bookings: Vec<FlightBooking> = source::load_typed(&fixture("flight_bookings.json")).unwrap();
    let mut browser = CollectionBrowser::builder()
        .schema(builtin_schema("flight-bookings").unwrap())
        .records(bookings)
        .sort_page_policy(SortPagePolicy::Preserve)
        .build()
        .unwrap();

    browser.set_page(2);
    browser.set_sort("departureDate").unwrap();
    assert_eq!(browser.current_page(), 2);

    browser.set_search_query("a");
    assert_eq!(browser.current_page(), 1);
}

#[test]
fn test_replace_records_after_refresh() {
    let mut browser = corporate_users();
    browser.set_page(2);

    let refreshed: Vec<CorporateUser> = browser.records()[..4].to_vec();
    browser.replace_records(refreshed);

    assert_eq!(browser.current_page(), 1);
    let view = browser.derived_view();
    assert_eq!(view.total_matched, 4);
    assert!(!view.needs_pagination());
}
