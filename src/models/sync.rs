//! Wire types for the partner synchronization API.
//!
//! Every response uses the envelope `{status: "success"|"fail", data,
//! error}` with HTTP 200 for success and 400/401/404 for the respective
//! failure classes. Field names are the lowercase keys the contract
//! documents (`accesstoken`, `refreshtoken`).

use serde::{Deserialize, Serialize};

use crate::error::{MetaldeskError, Result};
use crate::models::company::MarkupSnapshot;

// ---------------------------------------------------------------------------
// ApiEnvelope
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            status: "fail".to_string(),
            data: None,
            error: Some(error.into()),
        }
    }

    /// Unwrap the envelope, turning a `fail` status or a missing payload
    /// into an error the caller can retry on.
    pub fn into_result(self) -> Result<T> {
        if self.status != "success" {
            let message = self.error.unwrap_or_else(|| "request failed".to_string());
            return Err(MetaldeskError::InvalidArgument(message));
        }
        self.data
            .ok_or_else(|| MetaldeskError::InvalidArgument("response envelope had no data".into()))
    }
}

// ---------------------------------------------------------------------------
// Token payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncTokens {
    pub accesstoken: String,
    pub refreshtoken: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub accesstoken: String,
}

/// Body of `POST /company/generate-refresh-token`; the token field carries
/// the refresh token in `Bearer <token>` form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub token: String,
}

impl RefreshRequest {
    pub fn bearer(refresh_token: &str) -> Self {
        Self {
            token: format!("Bearer {refresh_token}"),
        }
    }

    /// Extract the raw token, tolerating a missing `Bearer ` prefix.
    pub fn raw_token(&self) -> &str {
        self.token
            .strip_prefix("Bearer ")
            .unwrap_or(self.token.as_str())
    }
}

// ---------------------------------------------------------------------------
// Price payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceSide {
    pub buy: f64,
    pub sell: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetalPrices {
    pub gold: PriceSide,
    pub silver: PriceSide,
}

impl From<&MarkupSnapshot> for MetalPrices {
    fn from(snapshot: &MarkupSnapshot) -> Self {
        Self {
            gold: PriceSide {
                buy: snapshot.gold_buy,
                sell: snapshot.gold_sell,
            },
            silver: PriceSide {
                buy: snapshot.silver_buy,
                sell: snapshot.silver_sell,
            },
        }
    }
}
