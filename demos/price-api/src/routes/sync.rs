//! Partner synchronization endpoints.
//!
//! Wire contract: every response is the `{status, data, error}` envelope.
//! Token exchange is keyed off a company's currently valid external ID;
//! issued tokens are held in process memory (`AppState`).

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{json, Value};

use metaldesk_sdk::models::{MetalPrices, RefreshRequest};
use metaldesk_sdk::{config, token};

use crate::error::AppError;
use crate::routes::ok;
use crate::state::AppState;

/// GET /company/sync/:external_id
///
/// Exchange a company's external ID for access and refresh tokens.
pub async fn sync_tokens(
    State(state): State<Arc<AppState>>,
    Path(external_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let company = state
        .sdk
        .run(move |s| s.companies().find_by_external_id(&external_id))
        .await?
        .ok_or_else(|| AppError::not_found("No company registered for this external ID"))?;

    let access_token = token::opaque(config::SYNC_TOKEN_LEN);
    let refresh_token = token::opaque(config::SYNC_TOKEN_LEN);

    state
        .access_tokens
        .lock()
        .map_err(|_| AppError::internal("Token store lock poisoned"))?
        .insert(access_token.clone(), company.id.clone());
    state
        .refresh_tokens
        .lock()
        .map_err(|_| AppError::internal("Token store lock poisoned"))?
        .insert(refresh_token.clone(), company.id);

    Ok(ok(json!({
        "accesstoken": access_token,
        "refreshtoken": refresh_token,
    })))
}

/// GET /company/price/:access_token
///
/// Current gold/silver buy and sell values for the token's company.
pub async fn current_prices(
    State(state): State<Arc<AppState>>,
    Path(access_token): Path<String>,
) -> Result<Json<Value>, AppError> {
    let company_id = state
        .access_tokens
        .lock()
        .map_err(|_| AppError::internal("Token store lock poisoned"))?
        .get(&access_token)
        .cloned()
        .ok_or_else(|| AppError::unauthorized("Access token is not valid"))?;

    let company = state
        .sdk
        .run(move |s| s.companies().get(&company_id))
        .await?
        .ok_or_else(|| AppError::not_found("Company not found"))?;

    let prices = MetalPrices::from(company.current_markup());
    Ok(ok(prices))
}

/// POST /company/generate-refresh-token
///
/// Mint a fresh access token from a `{token: "Bearer <refreshtoken>"}` body.
pub async fn regenerate_access_token(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RefreshRequest>,
) -> Result<Json<Value>, AppError> {
    let raw = body.raw_token().to_string();
    if raw.is_empty() {
        return Err(AppError::bad_request("Missing refresh token"));
    }

    let company_id = state
        .refresh_tokens
        .lock()
        .map_err(|_| AppError::internal("Token store lock poisoned"))?
        .get(&raw)
        .cloned()
        .ok_or_else(|| AppError::unauthorized("Refresh token is not valid"))?;

    let access_token = token::opaque(config::SYNC_TOKEN_LEN);
    state
        .access_tokens
        .lock()
        .map_err(|_| AppError::internal("Token store lock poisoned"))?
        .insert(access_token.clone(), company_id);

    Ok(ok(json!({ "accesstoken": access_token })))
}
