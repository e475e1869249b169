use std::path::PathBuf;

/// Alphabet used for partner-facing external IDs: uppercase letters and
/// digits, 36 symbols, drawn uniformly per character.
pub const EXTERNAL_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// External IDs are three groups of four characters: `XXXX-XXXX-XXXX`.
pub const EXTERNAL_ID_GROUPS: usize = 3;
pub const EXTERNAL_ID_GROUP_LEN: usize = 4;
pub const EXTERNAL_ID_SEPARATOR: char = '-';

/// Length of the opaque access/refresh tokens minted by the sync backend.
pub const SYNC_TOKEN_LEN: usize = 40;

/// Column headers for the per-company markup history export.
pub fn company_export_columns() -> Vec<&'static str> {
    vec![
        "Gold Buy LE",
        "Gold Sell LE",
        "Silver Buy LE",
        "Silver Sell LE",
        "Timestamp",
        "Changed By",
    ]
}

/// Column headers for the cross-company export (adds the owning company).
pub fn combined_export_columns() -> Vec<&'static str> {
    vec![
        "Company",
        "Gold Buy LE",
        "Gold Sell LE",
        "Silver Buy LE",
        "Silver Sell LE",
        "Timestamp",
        "Changed By",
    ]
}

pub fn default_export_dir() -> PathBuf {
    if let Some(downloads) = dirs::download_dir() {
        downloads.join("metaldesk-exports")
    } else {
        PathBuf::from(".metaldesk-exports")
    }
}
