//! Shared test fixtures for the MetalDesk SDK integration tests.
//!
//! Provides `setup_sample_sdk()` which builds an SDK over a pre-seeded
//! in-memory repository: two partner companies with dated markup
//! histories plus two user accounts. The caller must keep the returned
//! `TempDir` alive for the duration of the test so the export directory
//! is not deleted prematurely.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use metaldesk_sdk::models::{
    AccountStatus, AccountType, Company, CooperationType, MarkupSnapshot, User,
};
use metaldesk_sdk::{InMemoryRepository, MetaldeskSdk, Repository};
use tempfile::TempDir;

pub fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

pub fn snap(gold_buy: f64, gold_sell: f64, silver_buy: f64, silver_sell: f64) -> MarkupSnapshot {
    MarkupSnapshot::new(gold_buy, gold_sell, silver_buy, silver_sell)
}

pub fn setup_sample_sdk() -> (MetaldeskSdk, TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let mut repo = InMemoryRepository::new();

    // -- c1: three markup revisions -----------------------------------------
    let mut alpha = Company::new(
        "c1",
        "Pyramid Gold House",
        CooperationType::Both,
        MarkupSnapshot::ZERO,
        Some("Admin User".into()),
        ts(2025, 1, 1, 9, 0, 0),
    );
    alpha.record_change("h1", snap(1.8, 2.2, 0.8, 1.2), "Ahmed Hassan", ts(2025, 1, 5, 9, 15, 0));
    alpha.record_change("h2", snap(2.0, 2.5, 1.0, 1.5), "Mohamed Ali", ts(2025, 1, 10, 14, 20, 0));
    alpha.record_change("h3", snap(2.5, 3.0, 1.5, 2.0), "Ahmed Hassan", ts(2025, 1, 15, 10, 30, 0));
    repo.insert_company(alpha).unwrap();

    // -- c2: silver-only partner; the comma in the name exercises CSV quoting
    let mut beta = Company::new(
        "c2",
        "Delta Silver, Ltd.",
        CooperationType::Silver,
        MarkupSnapshot::ZERO,
        Some("Admin User".into()),
        ts(2025, 1, 2, 12, 0, 0),
    );
    beta.record_change("h4", snap(0.0, 0.0, 1.8, 2.2), "Omar Farouk", ts(2025, 1, 8, 11, 30, 0));
    beta.record_change("h5", snap(0.0, 0.0, 2.0, 2.5), "Sara Ahmed", ts(2025, 1, 14, 16, 45, 0));
    repo.insert_company(beta).unwrap();

    // -- users ----------------------------------------------------------------
    repo.insert_user(User {
        id: "u1".into(),
        name: "Admin User".into(),
        email: "admin@metaldesk.example".into(),
        company_id: None,
        created_at: ts(2025, 1, 1, 9, 0, 0),
        created_by_id: "u1".into(),
        created_by_name: "System".into(),
        account_type: AccountType::Admin,
        account_status: AccountStatus::Active,
    })
    .unwrap();
    repo.insert_user(User {
        id: "u2".into(),
        name: "Ahmed Hassan".into(),
        email: "ahmed.hassan@metaldesk.example".into(),
        company_id: Some("c1".into()),
        created_at: ts(2025, 1, 5, 11, 15, 0),
        created_by_id: "u1".into(),
        created_by_name: "Admin User".into(),
        account_type: AccountType::Employee,
        account_status: AccountStatus::Active,
    })
    .unwrap();

    repo.reserve_ids("c", 2);
    repo.reserve_ids("h", 5);
    repo.reserve_ids("u", 2);

    let sdk = MetaldeskSdk::builder()
        .repository(Box::new(repo))
        .export_dir(tmp_dir.path())
        .build()
        .unwrap();

    (sdk, tmp_dir)
}
