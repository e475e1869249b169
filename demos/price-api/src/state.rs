use std::collections::HashMap;
use std::sync::Mutex;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async MetalDesk SDK instance. Dispatches blocking SDK
    /// operations to a thread pool internally.
    pub sdk: metaldesk_sdk::AsyncMetaldeskSdk,

    /// Issued partner access tokens, keyed by token value with the owning
    /// company id. Tokens live for the process lifetime; a restart
    /// requires partners to re-sync.
    pub access_tokens: Mutex<HashMap<String, String>>,

    /// Issued partner refresh tokens, keyed by token value with the
    /// owning company id.
    pub refresh_tokens: Mutex<HashMap<String, String>>,
}
