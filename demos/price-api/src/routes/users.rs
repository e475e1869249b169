use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;

use metaldesk_sdk::models::{AccountStatus, AccountType, NewUser, UserPatch};

use crate::error::AppError;
use crate::routes::ok;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub account_type: Option<AccountType>,
    pub account_status: Option<AccountStatus>,
    pub company_id: Option<String>,
    /// Creator provenance, denormalized onto the record at creation time.
    pub creator_id: Option<String>,
    pub creator_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub account_type: Option<AccountType>,
    pub account_status: Option<AccountStatus>,
}

/// GET /user
///
/// List all user accounts.
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let users = state.sdk.run(|s| s.users().list()).await?;
    Ok(ok(users))
}

/// GET /user/:id
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let user = state
        .sdk
        .run(move |s| s.users().get(&id))
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(ok(user))
}

/// POST /user
///
/// Create a user. Validation failures come back field-by-field in the
/// error message; nothing is written when any field is rejected.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserBody>,
) -> Result<Json<Value>, AppError> {
    let user = state
        .sdk
        .run(move |s| {
            let input = NewUser {
                name: body.name,
                email: body.email,
                account_type: body.account_type,
                account_status: body.account_status,
                company_id: body.company_id,
            };
            let creator_id = body.creator_id.as_deref().unwrap_or("u1");
            let creator_name = body.creator_name.as_deref().unwrap_or("Admin User");
            s.users().create(input, creator_id, creator_name)
        })
        .await?;
    Ok(ok(user))
}

/// PUT /user/:id
///
/// Patch a user's editable fields. Creation provenance is immutable.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<Value>, AppError> {
    let user = state
        .sdk
        .run(move |s| {
            let patch = UserPatch {
                name: body.name,
                email: body.email,
                account_type: body.account_type,
                account_status: body.account_status,
            };
            s.users().update(&id, patch)
        })
        .await?;
    Ok(ok(user))
}
