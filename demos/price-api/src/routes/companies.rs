use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use metaldesk_sdk::models::{CompanyPatch, CompanyStatus, CooperationType, MarkupSnapshot};

use crate::error::AppError;
use crate::routes::ok;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyBody {
    /// New markup values; when present, recorded as an atomic markup
    /// change (history entry + current snapshot in one commit).
    pub markup: Option<MarkupSnapshot>,
    /// Actor name stamped on the history entry; defaults to "Admin User".
    pub changed_by: Option<String>,
    pub name: Option<String>,
    pub tax_number: Option<String>,
    pub location: Option<String>,
    pub cooperation_type: Option<CooperationType>,
    pub company_status: Option<CompanyStatus>,
}

/// GET /company
///
/// List all companies.
pub async fn list_companies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let companies = state.sdk.run(|s| s.companies().list()).await?;
    Ok(ok(companies))
}

/// GET /company/:id
///
/// Fetch one company including its full markup history.
pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let company = state
        .sdk
        .run(move |s| s.companies().get(&id))
        .await?
        .ok_or_else(|| AppError::not_found("Company not found"))?;
    Ok(ok(company))
}

/// PUT /company/:id
///
/// Update a company. Base-information fields are patched first; when the
/// body carries markup values they are recorded as a markup change, so the
/// history entry and the current snapshot commit together.
pub async fn update_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCompanyBody>,
) -> Result<Json<Value>, AppError> {
    let company = state
        .sdk
        .run(move |s| {
            let patch = CompanyPatch {
                name: body.name,
                tax_number: body.tax_number,
                location: body.location,
                cooperation_type: body.cooperation_type,
                company_status: body.company_status,
            };
            let mut company = s.companies().update(&id, patch)?;
            if let Some(markup) = body.markup {
                let actor = body.changed_by.as_deref().unwrap_or("Admin User");
                company = s.companies().record_markup_change(&id, markup, actor)?;
            }
            Ok(company)
        })
        .await?;
    Ok(ok(company))
}

/// DELETE /company/:id
///
/// Soft-remove: sets status to Closed so the markup history survives.
pub async fn close_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let company = state.sdk.run(move |s| s.companies().close(&id)).await?;
    Ok(ok(company))
}

/// POST /company/:id/external-id
///
/// Generate a fresh external ID for partner integration. The previous
/// token stops resolving.
pub async fn generate_external_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let external_id = state
        .sdk
        .run(move |s| s.companies().generate_external_id(&id))
        .await?;
    Ok(ok(json!({ "externalId": external_id })))
}
