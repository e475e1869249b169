//! Company operations against the injected repository.
//!
//! All markup mutation flows through [`CompanyQuery::record_markup_change`];
//! there is no way to set a company's current markup without producing the
//! matching history entry, because the aggregate exposes no direct setter.

use chrono::Utc;

use crate::error::{MetaldeskError, Result, ValidationErrors};
use crate::models::{
    Company, CompanyPatch, CompanyStatus, MarkupSnapshot, NewCompany,
};
use crate::store::Store;
use crate::token;

// ---------------------------------------------------------------------------
// CompanyQuery
// ---------------------------------------------------------------------------

/// Query interface for partner companies, borrowing from the store.
pub struct CompanyQuery<'a> {
    store: &'a Store,
}

impl<'a> CompanyQuery<'a> {
    /// Create a new `CompanyQuery` bound to the given store.
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List all companies in insertion order.
    pub fn list(&self) -> Result<Vec<Company>> {
        self.store.repo().companies()
    }

    /// Fetch one company by id, including its full markup history.
    pub fn get(&self, id: &str) -> Result<Option<Company>> {
        self.store.repo().company(id)
    }

    /// Resolve a company by its currently valid external ID.
    ///
    /// Only the most recently generated token resolves; regeneration
    /// replaces the stored value, revoking its predecessor.
    pub fn find_by_external_id(&self, external_id: &str) -> Result<Option<Company>> {
        let companies = self.store.repo().companies()?;
        Ok(companies
            .into_iter()
            .find(|c| c.external_id.as_deref() == Some(external_id)))
    }

    /// Create a company from validated input.
    ///
    /// Requires a non-empty name and a chosen cooperation type. Markup
    /// sides not covered by the cooperation type are held at zero; covered
    /// sides default to zero when unset. The new company starts with an
    /// empty history.
    pub fn create(&self, input: NewCompany) -> Result<Company> {
        let mut errors = ValidationErrors::new();
        if input.name.trim().is_empty() {
            errors.push("name", "company name is required");
        }
        let Some(cooperation) = input.cooperation_type else {
            errors.push("cooperationType", "cooperation type must be selected");
            return Err(MetaldeskError::Validation(errors));
        };

        let snapshot = MarkupSnapshot {
            gold_buy: covered_or_zero(cooperation.covers_gold(), input.gold_buy),
            gold_sell: covered_or_zero(cooperation.covers_gold(), input.gold_sell),
            silver_buy: covered_or_zero(cooperation.covers_silver(), input.silver_buy),
            silver_sell: covered_or_zero(cooperation.covers_silver(), input.silver_sell),
        };
        errors.0.extend(snapshot.validate().0);
        errors.into_result()?;

        let mut repo = self.store.repo_mut();
        let id = repo.next_id("c")?;
        let mut company = Company::new(
            id,
            input.name.trim(),
            cooperation,
            snapshot,
            input.created_by,
            Utc::now(),
        );
        company.tax_number = input.tax_number;
        company.location = input.location;
        repo.insert_company(company.clone())?;
        Ok(company)
    }

    /// Record a markup change: validate, allocate an entry id, append the
    /// history entry and synchronize the current snapshot, then commit the
    /// whole aggregate in one repository replace.
    pub fn record_markup_change(
        &self,
        id: &str,
        snapshot: MarkupSnapshot,
        actor: &str,
    ) -> Result<Company> {
        snapshot.validate().into_result()?;

        let mut repo = self.store.repo_mut();
        let mut company = repo
            .company(id)?
            .ok_or_else(|| MetaldeskError::NotFound(format!("No company with id '{id}'")))?;
        let entry_id = repo.next_id("h")?;
        company.record_change(entry_id, snapshot, actor, Utc::now());
        repo.replace_company(company.clone())?;
        Ok(company)
    }

    /// Apply field-level edits to a company's base information.
    pub fn update(&self, id: &str, patch: CompanyPatch) -> Result<Company> {
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                let mut errors = ValidationErrors::new();
                errors.push("name", "company name is required");
                errors.into_result()?;
            }
        }

        let mut repo = self.store.repo_mut();
        let mut company = repo
            .company(id)?
            .ok_or_else(|| MetaldeskError::NotFound(format!("No company with id '{id}'")))?;
        if let Some(name) = patch.name {
            company.name = name.trim().to_string();
        }
        if let Some(tax_number) = patch.tax_number {
            company.tax_number = Some(tax_number);
        }
        if let Some(location) = patch.location {
            company.location = Some(location);
        }
        if let Some(cooperation) = patch.cooperation_type {
            company.cooperation_type = Some(cooperation);
        }
        if let Some(status) = patch.company_status {
            company.company_status = status;
        }
        repo.replace_company(company.clone())?;
        Ok(company)
    }

    /// Soft-remove: set status to Closed, preserving the markup history.
    pub fn close(&self, id: &str) -> Result<Company> {
        self.update(
            id,
            CompanyPatch {
                company_status: Some(CompanyStatus::Closed),
                ..CompanyPatch::default()
            },
        )
    }

    /// Generate and store a fresh external ID for a company.
    ///
    /// The previous token, if any, is replaced and stops resolving.
    pub fn generate_external_id(&self, id: &str) -> Result<String> {
        let mut repo = self.store.repo_mut();
        let mut company = repo
            .company(id)?
            .ok_or_else(|| MetaldeskError::NotFound(format!("No company with id '{id}'")))?;
        let external_id = token::external_id();
        company.external_id = Some(external_id.clone());
        repo.replace_company(company)?;
        Ok(external_id)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn covered_or_zero(covered: bool, value: Option<f64>) -> f64 {
    if covered {
        value.unwrap_or(0.0)
    } else {
        0.0
    }
}
