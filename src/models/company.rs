use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;

// ---------------------------------------------------------------------------
// MarkupSnapshot — one complete set of the four markup values
// ---------------------------------------------------------------------------

/// Buy/sell markup rates for both metals at one instant.
///
/// Immutable value object; a company's markup state only ever changes by
/// replacing the whole snapshot through [`Company::record_change`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupSnapshot {
    pub gold_buy: f64,
    pub gold_sell: f64,
    pub silver_buy: f64,
    pub silver_sell: f64,
}

impl MarkupSnapshot {
    /// Explicit zero baseline, used for sides a company's cooperation type
    /// does not cover.
    pub const ZERO: MarkupSnapshot = MarkupSnapshot {
        gold_buy: 0.0,
        gold_sell: 0.0,
        silver_buy: 0.0,
        silver_sell: 0.0,
    };

    pub fn new(gold_buy: f64, gold_sell: f64, silver_buy: f64, silver_sell: f64) -> Self {
        Self {
            gold_buy,
            gold_sell,
            silver_buy,
            silver_sell,
        }
    }

    /// Check all four values are finite and non-negative, reporting one
    /// error per offending field under its wire name.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, value) in [
            ("goldBuy", self.gold_buy),
            ("goldSell", self.gold_sell),
            ("silverBuy", self.silver_buy),
            ("silverSell", self.silver_sell),
        ] {
            if !value.is_finite() {
                errors.push(field, "markup value must be a number");
            } else if value < 0.0 {
                errors.push(field, "markup value must not be negative");
            }
        }
        errors
    }
}

impl Default for MarkupSnapshot {
    fn default() -> Self {
        Self::ZERO
    }
}

// ---------------------------------------------------------------------------
// MarkupHistoryEntry — append-only audit record of one markup change
// ---------------------------------------------------------------------------

/// One historical markup revision.
///
/// Entries are never mutated or removed once appended. `changed_by` is a
/// snapshot of the actor's display name at change time, kept as a plain
/// string so the audit trail stays stable if the account is later renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupHistoryEntry {
    pub id: String,
    #[serde(flatten)]
    pub snapshot: MarkupSnapshot,
    pub timestamp: DateTime<Utc>,
    pub changed_by: String,
}

// ---------------------------------------------------------------------------
// Company enumerations
// ---------------------------------------------------------------------------

/// Which metal(s) a partner company trades. Constrains which markup sides
/// are meaningful; uncovered sides are held at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CooperationType {
    Gold,
    Silver,
    Both,
}

impl CooperationType {
    pub fn covers_gold(self) -> bool {
        matches!(self, CooperationType::Gold | CooperationType::Both)
    }

    pub fn covers_silver(self) -> bool {
        matches!(self, CooperationType::Silver | CooperationType::Both)
    }
}

/// Soft lifecycle flag; companies are closed, never physically deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyStatus {
    Active,
    Closed,
}

impl Default for CompanyStatus {
    fn default() -> Self {
        CompanyStatus::Active
    }
}

// ---------------------------------------------------------------------------
// Company — aggregate owning the current snapshot and its history
// ---------------------------------------------------------------------------

/// A partner company with its current markup state and audit history.
///
/// `current_markup`, `last_updated` and `markup_history` are private:
/// [`Company::record_change`] is the only mutator, so the current snapshot
/// always equals the latest history entry (when any exist) and
/// `last_updated` always equals that entry's timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tax_number: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub cooperation_type: Option<CooperationType>,
    #[serde(default)]
    pub company_status: CompanyStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
    current_markup: MarkupSnapshot,
    last_updated: DateTime<Utc>,
    #[serde(default)]
    markup_history: Vec<MarkupHistoryEntry>,
}

impl Company {
    /// Create a company with an initial snapshot and an empty history.
    ///
    /// The initial state deliberately has no history entry: the history
    /// records revisions, not the starting point, whose provenance is
    /// `created_at`/`created_by_name`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cooperation_type: CooperationType,
        initial: MarkupSnapshot,
        created_by: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tax_number: None,
            location: None,
            cooperation_type: Some(cooperation_type),
            company_status: CompanyStatus::Active,
            created_at: Some(now),
            created_by_name: created_by,
            external_id: None,
            current_markup: initial,
            last_updated: now,
            markup_history: Vec::new(),
        }
    }

    pub fn current_markup(&self) -> &MarkupSnapshot {
        &self.current_markup
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn history(&self) -> &[MarkupHistoryEntry] {
        &self.markup_history
    }

    pub fn latest_entry(&self) -> Option<&MarkupHistoryEntry> {
        self.markup_history.last()
    }

    /// Append a markup revision and synchronize current state in one step.
    ///
    /// This is the only way markup state changes. The entry timestamp is
    /// clamped so it never runs behind the previous entry; history order
    /// and timestamp order therefore always coincide.
    pub fn record_change(
        &mut self,
        entry_id: impl Into<String>,
        snapshot: MarkupSnapshot,
        changed_by: impl Into<String>,
        now: DateTime<Utc>,
    ) -> &MarkupHistoryEntry {
        let timestamp = match self.markup_history.last() {
            Some(last) if now < last.timestamp => last.timestamp,
            _ => now,
        };
        self.markup_history.push(MarkupHistoryEntry {
            id: entry_id.into(),
            snapshot,
            timestamp,
            changed_by: changed_by.into(),
        });
        self.current_markup = snapshot;
        self.last_updated = timestamp;
        self.markup_history.last().expect("entry just pushed")
    }
}

// ---------------------------------------------------------------------------
// NewCompany / CompanyPatch — operation inputs
// ---------------------------------------------------------------------------

/// Input for creating a company.
///
/// Markup values are optional per side; unset values for sides covered by
/// the cooperation type default to zero, and sides the cooperation type
/// does not cover are held at zero regardless.
#[derive(Debug, Clone, Default)]
pub struct NewCompany {
    pub name: String,
    pub cooperation_type: Option<CooperationType>,
    pub gold_buy: Option<f64>,
    pub gold_sell: Option<f64>,
    pub silver_buy: Option<f64>,
    pub silver_sell: Option<f64>,
    pub tax_number: Option<String>,
    pub location: Option<String>,
    pub created_by: Option<String>,
}

/// Field-level edits to a company's base information. Markup state is not
/// patchable here; it only moves through `record_markup_change`.
#[derive(Debug, Clone, Default)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub tax_number: Option<String>,
    pub location: Option<String>,
    pub cooperation_type: Option<CooperationType>,
    pub company_status: Option<CompanyStatus>,
}
