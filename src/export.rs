//! CSV export of markup history.
//!
//! Rendering goes through the `csv` crate so fields containing commas,
//! quotes or newlines are quoted per standard CSV rules and the output
//! round-trips through any conventional parser. Files are written to a
//! temp path and renamed on success, so an interrupted export never
//! leaves a corrupt partial file behind.

use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};

use crate::config;
use crate::error::{MetaldeskError, Result};
use crate::models::HistoryRow;
use crate::queries::history::HistoryQuery;
use crate::store::Store;

// ---------------------------------------------------------------------------
// Exporter
// ---------------------------------------------------------------------------

/// Export interface bound to the store; writes into `Store::export_dir`.
pub struct Exporter<'a> {
    store: &'a Store,
}

impl<'a> Exporter<'a> {
    /// Create a new `Exporter` bound to the given store.
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Render one company's (optionally date-filtered) history as CSV.
    pub fn company_csv(
        &self,
        company_id: &str,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<u8>> {
        let entries = HistoryQuery::new(self.store).for_company(company_id, date_from, date_to)?;
        let rows = entries.iter().map(|e| {
            vec![
                format_rate(e.snapshot.gold_buy),
                format_rate(e.snapshot.gold_sell),
                format_rate(e.snapshot.silver_buy),
                format_rate(e.snapshot.silver_sell),
                format_timestamp(e.timestamp),
                e.changed_by.clone(),
            ]
        });
        write_csv(&config::company_export_columns(), rows)
    }

    /// Write one company's history export to
    /// `<name_with_underscores>_markup_history.csv` in the export dir.
    pub fn company_csv_file(
        &self,
        company_id: &str,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<PathBuf> {
        let company = self
            .store
            .repo()
            .company(company_id)?
            .ok_or_else(|| {
                MetaldeskError::NotFound(format!("No company with id '{company_id}'"))
            })?;
        let bytes = self.company_csv(company_id, date_from, date_to)?;
        self.write_file(&company_export_filename(&company.name), &bytes)
    }

    /// Render the cross-company history view as CSV, most recent first.
    pub fn combined_csv(
        &self,
        company_id: Option<&str>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<u8>> {
        let rows = HistoryQuery::new(self.store).all(company_id, date_from, date_to)?;
        write_csv(
            &config::combined_export_columns(),
            rows.iter().map(history_row_fields),
        )
    }

    /// Write the cross-company export to
    /// `markup_history_export_<ISO-date>.csv` in the export dir.
    pub fn combined_csv_file(
        &self,
        company_id: Option<&str>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<PathBuf> {
        let bytes = self.combined_csv(company_id, date_from, date_to)?;
        self.write_file(&combined_export_filename(Utc::now().date_naive()), &bytes)
    }

    /// Atomic file write: temp file in the target directory, then rename.
    fn write_file(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.store.export_dir)?;
        let dest = self.store.export_dir.join(filename);
        let tmp = dest.with_extension("csv.tmp");

        let result = (|| -> Result<()> {
            fs::write(&tmp, bytes)?;
            fs::rename(&tmp, &dest)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        } else {
            eprintln!("Wrote export: {}", dest.display());
        }
        result.map(|_| dest)
    }
}

// ---------------------------------------------------------------------------
// Free-standing helpers
// ---------------------------------------------------------------------------

/// Render rows as CSV with a header line.
///
/// N rows produce N+1 lines; values with embedded delimiters, quotes or
/// newlines are quoted so the output parses back losslessly.
pub fn write_csv<I>(columns: &[&str], rows: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    writer
        .into_inner()
        .map_err(|e| MetaldeskError::Io(e.into_error()))
}

/// Per-company export file name, spaces replaced with underscores.
pub fn company_export_filename(company_name: &str) -> String {
    let underscored: String = company_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{underscored}_markup_history.csv")
}

/// Cross-company export file name carrying the export date.
pub fn combined_export_filename(date: NaiveDate) -> String {
    format!("markup_history_export_{}.csv", date.format("%Y-%m-%d"))
}

fn history_row_fields(row: &HistoryRow) -> Vec<String> {
    vec![
        row.company_name.clone(),
        format_rate(row.entry.snapshot.gold_buy),
        format_rate(row.entry.snapshot.gold_sell),
        format_rate(row.entry.snapshot.silver_buy),
        format_rate(row.entry.snapshot.silver_sell),
        format_timestamp(row.entry.timestamp),
        row.entry.changed_by.clone(),
    ]
}

fn format_rate(value: f64) -> String {
    value.to_string()
}

fn format_timestamp(ts: chrono::DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
