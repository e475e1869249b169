//! User account operations with per-field validation.

use chrono::Utc;

use crate::error::{MetaldeskError, Result, ValidationErrors};
use crate::models::{NewUser, User, UserPatch};
use crate::store::Store;

// ---------------------------------------------------------------------------
// UserQuery
// ---------------------------------------------------------------------------

/// Query interface for dashboard and company user accounts.
pub struct UserQuery<'a> {
    store: &'a Store,
}

impl<'a> UserQuery<'a> {
    /// Create a new `UserQuery` bound to the given store.
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<User>> {
        self.store.repo().users()
    }

    pub fn get(&self, id: &str) -> Result<Option<User>> {
        self.store.repo().user(id)
    }

    /// List the users attached to one company.
    pub fn for_company(&self, company_id: &str) -> Result<Vec<User>> {
        let users = self.store.repo().users()?;
        Ok(users
            .into_iter()
            .filter(|u| u.company_id.as_deref() == Some(company_id))
            .collect())
    }

    /// Create a user account.
    ///
    /// Every failing field is collected before returning, so the caller
    /// can show targeted feedback; nothing is written on failure.
    /// `creator_id`/`creator_name` are denormalized onto the record as a
    /// creation-time snapshot.
    pub fn create(&self, input: NewUser, creator_id: &str, creator_name: &str) -> Result<User> {
        let mut errors = ValidationErrors::new();
        if input.name.trim().is_empty() {
            errors.push("name", "name is required");
        }
        let email = input.email.trim();
        if email.is_empty() {
            errors.push("email", "email is required");
        } else if !is_valid_email(email) {
            errors.push("email", "email address is not valid");
        }
        if input.account_type.is_none() {
            errors.push("accountType", "account type must be selected");
        }
        if input.account_status.is_none() {
            errors.push("accountStatus", "account status must be selected");
        }
        errors.into_result()?;

        let mut repo = self.store.repo_mut();
        let user = User {
            id: repo.next_id("u")?,
            name: input.name.trim().to_string(),
            email: email.to_string(),
            company_id: input.company_id,
            created_at: Utc::now(),
            created_by_id: creator_id.to_string(),
            created_by_name: creator_name.to_string(),
            account_type: input.account_type.expect("validated above"),
            account_status: input.account_status.expect("validated above"),
        };
        repo.insert_user(user.clone())?;
        Ok(user)
    }

    /// Apply field-level edits to a user.
    ///
    /// `created_at`, `created_by_id` and `created_by_name` cannot be
    /// changed; the patch type has no such fields. No edit history is
    /// kept for user records.
    pub fn update(&self, id: &str, patch: UserPatch) -> Result<User> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                errors.push("name", "name is required");
            }
        }
        if let Some(email) = &patch.email {
            let email = email.trim();
            if email.is_empty() {
                errors.push("email", "email is required");
            } else if !is_valid_email(email) {
                errors.push("email", "email address is not valid");
            }
        }
        errors.into_result()?;

        let mut repo = self.store.repo_mut();
        let mut user = repo
            .user(id)?
            .ok_or_else(|| MetaldeskError::NotFound(format!("No user with id '{id}'")))?;
        if let Some(name) = patch.name {
            user.name = name.trim().to_string();
        }
        if let Some(email) = patch.email {
            user.email = email.trim().to_string();
        }
        if let Some(account_type) = patch.account_type {
            user.account_type = account_type;
        }
        if let Some(account_status) = patch.account_status {
            user.account_status = account_status;
        }
        repo.replace_user(user.clone())?;
        Ok(user)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `local@domain.tld` shape check: non-empty local part, a domain with a
/// dot separating non-empty labels, no whitespace or extra `@` anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
