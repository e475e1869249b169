//! History query tests: inclusive date-range filtering and the flattened
//! cross-company view.

mod common;

use chrono::NaiveDate;
use metaldesk_sdk::models::MarkupHistoryEntry;
use metaldesk_sdk::queries::history::{filter_entries, flatten_companies};
use metaldesk_sdk::MetaldeskError;

use common::{snap, ts};

fn entry(id: &str, timestamp: chrono::DateTime<chrono::Utc>) -> MarkupHistoryEntry {
    MarkupHistoryEntry {
        id: id.to_string(),
        snapshot: snap(2.0, 2.5, 1.0, 1.5),
        timestamp,
        changed_by: "Ahmed Hassan".to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// filter_entries
// ---------------------------------------------------------------------------

#[test]
fn no_bounds_returns_input_unchanged_in_order() {
    let entries = vec![
        entry("h1", ts(2025, 1, 5, 9, 15, 0)),
        entry("h2", ts(2025, 1, 10, 14, 20, 0)),
        entry("h3", ts(2025, 1, 15, 10, 30, 0)),
    ];

    let filtered = filter_entries(&entries, None, None);
    assert_eq!(filtered, entries);
}

#[test]
fn bounds_are_inclusive_on_both_ends() {
    let entries = vec![
        entry("h1", ts(2025, 1, 5, 9, 15, 0)),
        entry("h2", ts(2025, 1, 10, 14, 20, 0)),
        entry("h3", ts(2025, 1, 15, 10, 30, 0)),
    ];

    // bounds exactly on the first and last timestamps keep everything
    let filtered = filter_entries(
        &entries,
        Some(ts(2025, 1, 5, 9, 15, 0)),
        Some(ts(2025, 1, 15, 10, 30, 0)),
    );
    assert_eq!(filtered.len(), 3);

    // a second past either bound drops the boundary entry
    let filtered = filter_entries(
        &entries,
        Some(ts(2025, 1, 5, 9, 15, 1)),
        Some(ts(2025, 1, 15, 10, 29, 59)),
    );
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "h2");
}

#[test]
fn absent_bound_is_unconstrained_on_that_side() {
    let entries = vec![
        entry("h1", ts(2025, 1, 5, 9, 15, 0)),
        entry("h2", ts(2025, 1, 10, 14, 20, 0)),
        entry("h3", ts(2025, 1, 15, 10, 30, 0)),
    ];

    let from_only = filter_entries(&entries, Some(ts(2025, 1, 10, 0, 0, 0)), None);
    assert_eq!(from_only.len(), 2);

    let to_only = filter_entries(&entries, None, Some(ts(2025, 1, 10, 23, 59, 59)));
    assert_eq!(to_only.len(), 2);
}

// ---------------------------------------------------------------------------
// for_company
// ---------------------------------------------------------------------------

#[test]
fn for_company_includes_entries_on_boundary_days() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    // c1 has an entry at 2025-01-15 10:30; a from==to filter on that day
    // must include it
    let entries = sdk
        .history()
        .for_company("c1", Some(date(2025, 1, 15)), Some(date(2025, 1, 15)))
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "h3");
}

#[test]
fn for_company_without_bounds_preserves_insertion_order() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let entries = sdk.history().for_company("c1", None, None).unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["h1", "h2", "h3"]);
}

#[test]
fn for_company_unknown_is_not_found() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let err = sdk.history().for_company("c99", None, None).unwrap_err();
    assert!(matches!(err, MetaldeskError::NotFound(_)));
}

// ---------------------------------------------------------------------------
// flatten / all
// ---------------------------------------------------------------------------

#[test]
fn flatten_annotates_rows_with_owning_company() {
    let (sdk, _tmp) = common::setup_sample_sdk();
    let companies = sdk.companies().list().unwrap();

    let rows = flatten_companies(&companies);
    assert_eq!(rows.len(), 5);

    let beta_rows: Vec<_> = rows.iter().filter(|r| r.company_id == "c2").collect();
    assert_eq!(beta_rows.len(), 2);
    assert!(beta_rows.iter().all(|r| r.company_name == "Delta Silver, Ltd."));
}

#[test]
fn flattened_rows_are_sorted_most_recent_first() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let rows = sdk.history().all(None, None, None).unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows
        .windows(2)
        .all(|w| w[0].entry.timestamp >= w[1].entry.timestamp));
    assert_eq!(rows[0].entry.id, "h3");
}

#[test]
fn all_filters_by_company_and_date_range() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let rows = sdk.history().all(Some("c2"), None, None).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.company_id == "c2"));

    let rows = sdk
        .history()
        .all(None, Some(date(2025, 1, 9)), Some(date(2025, 1, 14)))
        .unwrap();
    let ids: Vec<&str> = rows.iter().map(|r| r.entry.id.as_str()).collect();
    assert_eq!(ids, vec!["h5", "h2"]);
}
