//! Storage seam for the SDK.
//!
//! All reads and writes go through the [`Repository`] trait so the store
//! can be backed by the bundled in-memory implementation, a test double,
//! or a real networked backend. Each `replace_*` call is one commit: a
//! markup change hands over the company with its new history entry and
//! synchronized snapshot in a single replace, never as two writes.

use std::collections::HashMap;

use crate::error::{MetaldeskError, Result};
use crate::models::{Company, User};

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

pub trait Repository: Send {
    fn companies(&self) -> Result<Vec<Company>>;
    fn company(&self, id: &str) -> Result<Option<Company>>;
    fn insert_company(&mut self, company: Company) -> Result<()>;
    /// Replace the stored company with the same id. Errors with `NotFound`
    /// if no such company exists; never creates one.
    fn replace_company(&mut self, company: Company) -> Result<()>;

    fn users(&self) -> Result<Vec<User>>;
    fn user(&self, id: &str) -> Result<Option<User>>;
    fn insert_user(&mut self, user: User) -> Result<()>;
    fn replace_user(&mut self, user: User) -> Result<()>;

    /// Allocate the next id for the given prefix (`"c"` for companies,
    /// `"h"` for history entries, `"u"` for users), e.g. `"h7"`.
    fn next_id(&mut self, prefix: &str) -> Result<String>;
}

// ---------------------------------------------------------------------------
// InMemoryRepository
// ---------------------------------------------------------------------------

/// Default backing store: plain vectors plus per-prefix id counters.
///
/// Insertion order is preserved, which is what list views and history
/// flattening rely on.
#[derive(Default)]
pub struct InMemoryRepository {
    companies: Vec<Company>,
    users: Vec<User>,
    counters: HashMap<String, u64>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance an id counter so freshly allocated ids never collide with
    /// pre-seeded records (e.g. `"u4"` in the demo dataset).
    pub fn reserve_ids(&mut self, prefix: &str, up_to: u64) {
        let counter = self.counters.entry(prefix.to_string()).or_insert(0);
        if *counter < up_to {
            *counter = up_to;
        }
    }
}

impl Repository for InMemoryRepository {
    fn companies(&self) -> Result<Vec<Company>> {
        Ok(self.companies.clone())
    }

    fn company(&self, id: &str) -> Result<Option<Company>> {
        Ok(self.companies.iter().find(|c| c.id == id).cloned())
    }

    fn insert_company(&mut self, company: Company) -> Result<()> {
        self.companies.push(company);
        Ok(())
    }

    fn replace_company(&mut self, company: Company) -> Result<()> {
        match self.companies.iter_mut().find(|c| c.id == company.id) {
            Some(slot) => {
                *slot = company;
                Ok(())
            }
            None => Err(MetaldeskError::NotFound(format!(
                "No company with id '{}'",
                company.id
            ))),
        }
    }

    fn users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    fn user(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    fn insert_user(&mut self, user: User) -> Result<()> {
        self.users.push(user);
        Ok(())
    }

    fn replace_user(&mut self, user: User) -> Result<()> {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user;
                Ok(())
            }
            None => Err(MetaldeskError::NotFound(format!(
                "No user with id '{}'",
                user.id
            ))),
        }
    }

    fn next_id(&mut self, prefix: &str) -> Result<String> {
        let counter = self.counters.entry(prefix.to_string()).or_insert(0);
        *counter += 1;
        Ok(format!("{prefix}{counter}"))
    }
}
