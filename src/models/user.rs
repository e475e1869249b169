use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Account enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Admin,
    Employee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Closed,
}

// ---------------------------------------------------------------------------
// User — dashboard/company account
// ---------------------------------------------------------------------------

/// A dashboard user account, optionally attached to a partner company.
///
/// `created_by_id`/`created_by_name` are a point-in-time snapshot of the
/// creator taken at creation; they are never refreshed if the creator's
/// own record changes later. The `created_at` wire key is snake_case,
/// matching the dashboard's existing JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    pub created_by_id: String,
    pub created_by_name: String,
    pub account_type: AccountType,
    pub account_status: AccountStatus,
}

// ---------------------------------------------------------------------------
// NewUser / UserPatch — operation inputs
// ---------------------------------------------------------------------------

/// Input for creating a user. Type and status are optional here so an
/// unselected choice is representable and rejected with a field-level
/// error rather than a type error at the call site.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub account_type: Option<AccountType>,
    pub account_status: Option<AccountStatus>,
    pub company_id: Option<String>,
}

/// Field-level edits to a user. Creation provenance (`created_at`,
/// `created_by_id`, `created_by_name`) is deliberately absent: those
/// fields are immutable after creation.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub account_type: Option<AccountType>,
    pub account_status: Option<AccountStatus>,
}
