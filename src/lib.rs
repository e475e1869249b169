//! MetalDesk SDK for Rust.
//!
//! Business core of the MetalDesk trading dashboard: partner companies
//! with per-metal markup rates, an append-only audit history of markup
//! changes, dashboard user accounts, and filtered/exported views of the
//! history. State lives behind an injected [`Repository`]; the bundled
//! in-memory implementation is the default.
//!
//! # Quick start
//!
//! ```no_run
//! use metaldesk_sdk::models::MarkupSnapshot;
//! use metaldesk_sdk::MetaldeskSdk;
//!
//! let sdk = MetaldeskSdk::builder().demo_data(true).build().unwrap();
//!
//! // Record a markup change (appends history + updates current state)
//! let company = sdk
//!     .companies()
//!     .record_markup_change("c1", MarkupSnapshot::new(2.6, 3.1, 1.6, 2.1), "Ahmed Hassan")
//!     .unwrap();
//! assert_eq!(company.current_markup(), &company.latest_entry().unwrap().snapshot);
//!
//! // Export the cross-company history
//! let path = sdk.exporter().combined_csv_file(None, None, None).unwrap();
//! println!("exported to {}", path.display());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod demo;
pub mod error;
pub mod export;
pub mod models;
pub mod queries;
pub mod repository;
pub mod store;
pub mod sync;
pub mod token;

#[cfg(feature = "async")]
pub use async_client::AsyncMetaldeskSdk;
pub use error::{FieldError, MetaldeskError, Result, ValidationErrors};
pub use export::Exporter;
pub use repository::{InMemoryRepository, Repository};
pub use store::Store;
pub use sync::PartnerSyncClient;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// MetaldeskSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`MetaldeskSdk`] instance.
///
/// Use [`MetaldeskSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](MetaldeskSdkBuilder::build) to create the SDK.
pub struct MetaldeskSdkBuilder {
    repository: Option<Box<dyn Repository>>,
    export_dir: Option<PathBuf>,
    seed_file: Option<PathBuf>,
    demo_data: bool,
}

impl Default for MetaldeskSdkBuilder {
    fn default() -> Self {
        Self {
            repository: None,
            export_dir: None,
            seed_file: None,
            demo_data: false,
        }
    }
}

impl MetaldeskSdkBuilder {
    /// Inject a custom repository implementation.
    ///
    /// Defaults to an empty [`InMemoryRepository`]. Passing a pre-seeded
    /// repository is the intended way to start from fixture data.
    pub fn repository(mut self, repo: Box<dyn Repository>) -> Self {
        self.repository = Some(repo);
        self
    }

    /// Set the directory CSV exports are written into.
    ///
    /// If not set, the platform-appropriate default is used (a
    /// `metaldesk-exports` folder under the user's download directory).
    pub fn export_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.export_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load companies and users from a seed JSON file
    /// (`{"companies": […], "users": […]}`) into the repository at build.
    pub fn seed_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.seed_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Seed the built-in demo dataset. Only applies when no custom
    /// repository was injected.
    pub fn demo_data(mut self, demo: bool) -> Self {
        self.demo_data = demo;
        self
    }

    /// Build the SDK, initializing the store and export directory.
    pub fn build(self) -> Result<MetaldeskSdk> {
        let repo: Box<dyn Repository> = match self.repository {
            Some(repo) => repo,
            None => {
                let mut repo = InMemoryRepository::new();
                if self.demo_data {
                    demo::install(&mut repo);
                }
                Box::new(repo)
            }
        };

        let export_dir = self.export_dir.unwrap_or_else(config::default_export_dir);
        fs::create_dir_all(&export_dir)?;

        let sdk = MetaldeskSdk {
            store: Store::new(repo, export_dir),
        };

        if let Some(path) = self.seed_file {
            sdk.load_seed_file(&path)?;
        }

        Ok(sdk)
    }
}

// ---------------------------------------------------------------------------
// MetaldeskSdk
// ---------------------------------------------------------------------------

/// The main entry point for the MetalDesk SDK.
///
/// Wraps a [`Store`] (which owns the injected repository) and exposes
/// domain-specific query interfaces as lightweight borrowing wrappers.
///
/// Created via [`MetaldeskSdk::builder()`].
pub struct MetaldeskSdk {
    store: Store,
}

impl MetaldeskSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> MetaldeskSdkBuilder {
        MetaldeskSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the company query interface.
    ///
    /// Returns a lightweight wrapper that borrows from the underlying
    /// store and provides CRUD plus the markup-change operation.
    pub fn companies(&self) -> queries::companies::CompanyQuery<'_> {
        queries::companies::CompanyQuery::new(&self.store)
    }

    /// Access the user query interface.
    pub fn users(&self) -> queries::users::UserQuery<'_> {
        queries::users::UserQuery::new(&self.store)
    }

    /// Access the markup history query interface.
    pub fn history(&self) -> queries::history::HistoryQuery<'_> {
        queries::history::HistoryQuery::new(&self.store)
    }

    /// Access the CSV export interface.
    pub fn exporter(&self) -> Exporter<'_> {
        Exporter::new(&self.store)
    }

    // -- Utility methods ---------------------------------------------------

    /// Return a reference to the underlying [`Store`] for advanced usage.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Load a seed JSON file (`{"companies": […], "users": […]}`) into the
    /// repository. Both keys are optional.
    pub fn load_seed_file(&self, path: &Path) -> Result<()> {
        let contents = fs::read_to_string(path)?;
        let seed: SeedData = serde_json::from_str(&contents)?;
        let (companies, users) = (seed.companies.len(), seed.users.len());
        let mut repo = self.store.repo_mut();
        for company in seed.companies {
            repo.insert_company(company)?;
        }
        for user in seed.users {
            repo.insert_user(user)?;
        }
        eprintln!(
            "Seeded {} companies and {} users from {}",
            companies,
            users,
            path.display()
        );
        Ok(())
    }
}

#[derive(serde::Deserialize)]
struct SeedData {
    #[serde(default)]
    companies: Vec<models::Company>,
    #[serde(default)]
    users: Vec<models::User>,
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for MetaldeskSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repo = self.store.repo();
        let companies = repo.companies().map(|c| c.len()).unwrap_or(0);
        let users = repo.users().map(|u| u.len()).unwrap_or(0);
        write!(
            f,
            "MetaldeskSdk(companies={}, users={}, export_dir={})",
            companies,
            users,
            self.store.export_dir.display()
        )
    }
}
