//! Random identifier generation for partner integration.
//!
//! External IDs are low-stakes integration handles, not security
//! credentials: three 4-character groups over a 36-symbol alphabet give
//! roughly 62 bits, which is plenty for routing a partner to the right
//! company record and nothing more.

use rand::prelude::*;

use crate::config::{
    EXTERNAL_ID_ALPHABET, EXTERNAL_ID_GROUPS, EXTERNAL_ID_GROUP_LEN, EXTERNAL_ID_SEPARATOR,
};

/// Generate a fresh partner-facing external ID, e.g. `AB3D-9KXZ-22QW`.
pub fn external_id() -> String {
    let mut rng = thread_rng();
    let mut groups = Vec::with_capacity(EXTERNAL_ID_GROUPS);
    for _ in 0..EXTERNAL_ID_GROUPS {
        let group: String = (0..EXTERNAL_ID_GROUP_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..EXTERNAL_ID_ALPHABET.len());
                EXTERNAL_ID_ALPHABET[idx] as char
            })
            .collect();
        groups.push(group);
    }
    groups.join(&EXTERNAL_ID_SEPARATOR.to_string())
}

/// Generate an opaque mixed-case alphanumeric token of the given length,
/// used by the sync backend for access and refresh tokens.
pub fn opaque(len: usize) -> String {
    let rng = thread_rng();
    rng.sample_iter(&rand::distributions::Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Check a string has the `XXXX-XXXX-XXXX` external-ID shape.
pub fn is_external_id(s: &str) -> bool {
    let groups: Vec<&str> = s.split(EXTERNAL_ID_SEPARATOR).collect();
    groups.len() == EXTERNAL_ID_GROUPS
        && groups.iter().all(|g| {
            g.len() == EXTERNAL_ID_GROUP_LEN
                && g.bytes().all(|b| EXTERNAL_ID_ALPHABET.contains(&b))
        })
}
