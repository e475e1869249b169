//! Client for the partner synchronization API.
//!
//! Implements the partner-facing side of the documented wire contract:
//! obtain access/refresh tokens from an external ID, fetch current
//! gold/silver prices, and regenerate an expired access token. Every
//! response arrives in the `{status, data, error}` envelope; auth,
//! not-found and bad-request failures map to distinct error variants so
//! callers can react to each (e.g. refresh on 401).

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{MetaldeskError, Result};
use crate::models::{AccessToken, ApiEnvelope, MetalPrices, RefreshRequest, SyncTokens};

/// Blocking HTTP client for the partner sync endpoints.
pub struct PartnerSyncClient {
    base_url: String,
    client: Client,
}

impl PartnerSyncClient {
    /// Create a client for the given backend base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Exchange a company's external ID for access and refresh tokens.
    ///
    /// `GET /company/sync/:externalID`
    pub fn fetch_tokens(&self, external_id: &str) -> Result<SyncTokens> {
        let url = format!("{}/company/sync/{external_id}", self.base_url);
        let resp = self.client.get(&url).send()?;
        read_envelope(resp)
    }

    /// Fetch the current gold and silver buy/sell prices.
    ///
    /// `GET /company/price/:accesstoken`
    pub fn current_prices(&self, access_token: &str) -> Result<MetalPrices> {
        let url = format!("{}/company/price/{access_token}", self.base_url);
        let resp = self.client.get(&url).send()?;
        read_envelope(resp)
    }

    /// Mint a fresh access token from a refresh token.
    ///
    /// `POST /company/generate-refresh-token` with `{token: "Bearer <refreshtoken>"}`
    pub fn regenerate_access_token(&self, refresh_token: &str) -> Result<String> {
        let url = format!("{}/company/generate-refresh-token", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&RefreshRequest::bearer(refresh_token))
            .send()?;
        let token: AccessToken = read_envelope(resp)?;
        Ok(token.accesstoken)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map the HTTP status to the contract's failure classes, then unwrap the
/// JSON envelope.
fn read_envelope<T: DeserializeOwned>(resp: reqwest::blocking::Response) -> Result<T> {
    let status = resp.status();
    match status {
        StatusCode::UNAUTHORIZED => {
            Err(MetaldeskError::Unauthorized(envelope_error(resp)))
        }
        StatusCode::NOT_FOUND => Err(MetaldeskError::NotFound(envelope_error(resp))),
        StatusCode::BAD_REQUEST => Err(MetaldeskError::InvalidArgument(envelope_error(resp))),
        _ => {
            let resp = resp.error_for_status()?;
            let envelope: ApiEnvelope<T> = resp.json()?;
            envelope.into_result()
        }
    }
}

/// Pull the error message out of a failure envelope, falling back to the
/// bare status line when the body is not parseable.
fn envelope_error(resp: reqwest::blocking::Response) -> String {
    let status = resp.status();
    resp.json::<ApiEnvelope<serde_json::Value>>()
        .ok()
        .and_then(|env| env.error)
        .unwrap_or_else(|| format!("request failed with status {status}"))
}
