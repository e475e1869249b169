use serde::{Deserialize, Serialize};

use super::company::MarkupHistoryEntry;

// ---------------------------------------------------------------------------
// HistoryRow — cross-company flattened history record (query result)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub company_id: String,
    pub company_name: String,
    #[serde(flatten)]
    pub entry: MarkupHistoryEntry,
}
