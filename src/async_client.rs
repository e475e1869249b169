//! Async wrapper around [`MetaldeskSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! Operations are in-memory and fast, so this approach is cheap; the
//! mutex also serializes concurrent mutations (last write wins).
//!
//! # Example
//!
//! ```no_run
//! # use metaldesk_sdk::AsyncMetaldeskSdk;
//! # async fn example() -> metaldesk_sdk::Result<()> {
//! let sdk = AsyncMetaldeskSdk::builder().demo_data(true).build().await?;
//!
//! // Run any sync SDK method via closure
//! let companies = sdk.run(|s| s.companies().list()).await?;
//! println!("{} companies", companies.len());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{MetaldeskError, Result};
use crate::models::{Company, User};
use crate::MetaldeskSdk;

// ---------------------------------------------------------------------------
// AsyncMetaldeskSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncMetaldeskSdk`] instance.
#[derive(Default)]
pub struct AsyncMetaldeskSdkBuilder {
    export_dir: Option<PathBuf>,
    seed_file: Option<PathBuf>,
    demo_data: bool,
}

impl AsyncMetaldeskSdkBuilder {
    /// Set the directory CSV exports are written into.
    pub fn export_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.export_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load companies and users from a seed JSON file at build.
    pub fn seed_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.seed_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Seed the built-in demo dataset.
    pub fn demo_data(mut self, demo: bool) -> Self {
        self.demo_data = demo;
        self
    }

    /// Build the async SDK, initializing the store on the blocking pool so
    /// it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncMetaldeskSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = MetaldeskSdk::builder().demo_data(self.demo_data);
            if let Some(dir) = self.export_dir {
                builder = builder.export_dir(dir);
            }
            if let Some(path) = self.seed_file {
                builder = builder.seed_file(path);
            }
            let sdk = builder.build()?;
            Ok(AsyncMetaldeskSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| MetaldeskError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncMetaldeskSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`MetaldeskSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`MetaldeskSdk`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally.
pub struct AsyncMetaldeskSdk {
    inner: Arc<Mutex<MetaldeskSdk>>,
}

impl AsyncMetaldeskSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncMetaldeskSdkBuilder {
        AsyncMetaldeskSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&MetaldeskSdk` reference and should return
    /// a `Result<T>`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use metaldesk_sdk::AsyncMetaldeskSdk;
    /// # async fn example() -> metaldesk_sdk::Result<()> {
    /// # let sdk = AsyncMetaldeskSdk::builder().build().await?;
    /// let users = sdk.run(|s| s.users().list()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&MetaldeskSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| MetaldeskError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| MetaldeskError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// List all companies. Convenience wrapper around [`run()`](Self::run).
    pub async fn companies(&self) -> Result<Vec<Company>> {
        self.run(|s| s.companies().list()).await
    }

    /// List all users. Convenience wrapper around [`run()`](Self::run).
    pub async fn users(&self) -> Result<Vec<User>> {
        self.run(|s| s.users().list()).await
    }
}
