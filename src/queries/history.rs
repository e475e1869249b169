//! Markup history queries: date-range filtering and the cross-company
//! flattened view backing the history screen and the CSV exports.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{MetaldeskError, Result};
use crate::models::{Company, HistoryRow, MarkupHistoryEntry};
use crate::store::Store;

// ---------------------------------------------------------------------------
// HistoryQuery
// ---------------------------------------------------------------------------

/// Query interface for markup change history.
pub struct HistoryQuery<'a> {
    store: &'a Store,
}

impl<'a> HistoryQuery<'a> {
    /// Create a new `HistoryQuery` bound to the given store.
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// One company's history, optionally restricted to an inclusive date
    /// range. Entries on the boundary days are included. Original
    /// (insertion) order is preserved.
    pub fn for_company(
        &self,
        company_id: &str,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<MarkupHistoryEntry>> {
        let company = self
            .store
            .repo()
            .company(company_id)?
            .ok_or_else(|| {
                MetaldeskError::NotFound(format!("No company with id '{company_id}'"))
            })?;
        let (from, to) = day_bounds(date_from, date_to);
        Ok(filter_entries(company.history(), from, to))
    }

    /// Flattened history across all companies, optionally restricted to
    /// one company and/or an inclusive date range, most recent first.
    pub fn all(
        &self,
        company_id: Option<&str>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<HistoryRow>> {
        let companies = self.store.repo().companies()?;
        let (from, to) = day_bounds(date_from, date_to);
        let rows = flatten_companies(&companies)
            .into_iter()
            .filter(|row| company_id.map_or(true, |id| row.company_id == id))
            .filter(|row| within(row.entry.timestamp, from, to))
            .collect();
        Ok(rows)
    }
}

// ---------------------------------------------------------------------------
// Free-standing helpers
// ---------------------------------------------------------------------------

/// Filter entries to the inclusive range `[from, to]`.
///
/// An absent bound is unconstrained on that side; with both bounds absent
/// the input comes back unchanged and in its original order.
pub fn filter_entries(
    entries: &[MarkupHistoryEntry],
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Vec<MarkupHistoryEntry> {
    entries
        .iter()
        .filter(|e| within(e.timestamp, from, to))
        .cloned()
        .collect()
}

/// One row per history entry across all companies, annotated with the
/// owning company's id and name and sorted by timestamp descending.
///
/// The descending sort is a presentation default, not a structural
/// property of the stored history; ties may land in either order.
pub fn flatten_companies(companies: &[Company]) -> Vec<HistoryRow> {
    let mut rows: Vec<HistoryRow> = companies
        .iter()
        .flat_map(|company| {
            company.history().iter().map(|entry| HistoryRow {
                company_id: company.id.clone(),
                company_name: company.name.clone(),
                entry: entry.clone(),
            })
        })
        .collect();
    rows.sort_by(|a, b| b.entry.timestamp.cmp(&a.entry.timestamp));
    rows
}

fn within(ts: DateTime<Utc>, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> bool {
    if let Some(from) = from {
        if ts < from {
            return false;
        }
    }
    if let Some(to) = to {
        if ts > to {
            return false;
        }
    }
    true
}

/// Expand date-level bounds to whole-day inclusive instants: `from` starts
/// at midnight, `to` runs through 23:59:59 of that day.
fn day_bounds(
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    let from = date_from.map(|d| d.and_hms_opt(0, 0, 0).expect("valid time").and_utc());
    let to = date_to.map(|d| d.and_hms_opt(23, 59, 59).expect("valid time").and_utc());
    (from, to)
}
