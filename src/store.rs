//! Store wrapper holding the injected repository.
//!
//! Mirrors the single-owner, interior-mutability setup of the SDK entry
//! point: query interfaces borrow `&Store` and go through `RefCell`
//! borrows, keeping the whole SDK usable from a shared reference.

use std::cell::{Ref, RefCell, RefMut};
use std::path::PathBuf;

use crate::repository::Repository;

pub struct Store {
    repo: RefCell<Box<dyn Repository>>,
    /// Directory CSV export files are written into.
    pub export_dir: PathBuf,
}

impl Store {
    pub fn new(repo: Box<dyn Repository>, export_dir: PathBuf) -> Self {
        Self {
            repo: RefCell::new(repo),
            export_dir,
        }
    }

    pub fn repo(&self) -> Ref<'_, Box<dyn Repository>> {
        self.repo.borrow()
    }

    pub fn repo_mut(&self) -> RefMut<'_, Box<dyn Repository>> {
        self.repo.borrow_mut()
    }
}
