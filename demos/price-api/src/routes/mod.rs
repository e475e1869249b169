pub mod companies;
pub mod sync;
pub mod users;

use axum::response::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Wrap a payload in the success envelope `{"status": "success", "data": …,
/// "error": null}`.
pub fn ok<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({
        "status": "success",
        "data": data,
        "error": null,
    }))
}
