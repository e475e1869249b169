//! Built-in demo dataset: the partner companies and user accounts the
//! dashboard ships with for local development.
//!
//! Histories are stored oldest-first, so each company's current markup is
//! exactly its latest entry, and the id counters are reserved past the
//! seeded records so later creations don't collide.

use chrono::{DateTime, Utc};

use crate::models::{
    AccountStatus, AccountType, Company, CooperationType, MarkupSnapshot, User,
};
use crate::repository::{InMemoryRepository, Repository};

/// Seed a repository with the demo dataset.
pub fn install(repo: &mut InMemoryRepository) {
    for company in demo_companies() {
        repo.insert_company(company).expect("in-memory insert");
    }
    for user in demo_users() {
        repo.insert_user(user).expect("in-memory insert");
    }
    repo.reserve_ids("c", 6);
    repo.reserve_ids("h", 10);
    repo.reserve_ids("u", 4);
}

pub fn demo_companies() -> Vec<Company> {
    let mut companies = Vec::new();

    let mut c1 = Company::new(
        "c1",
        "Al-Fayed Jewelers",
        CooperationType::Both,
        MarkupSnapshot::ZERO,
        Some("Admin User".into()),
        ts("2025-01-01T10:00:00Z"),
    );
    c1.record_change(
        "h1",
        MarkupSnapshot::new(1.8, 2.2, 0.8, 1.2),
        "Ahmed Hassan",
        ts("2025-01-05T09:15:00Z"),
    );
    c1.record_change(
        "h2",
        MarkupSnapshot::new(2.0, 2.5, 1.0, 1.5),
        "Mohamed Ali",
        ts("2025-01-10T14:20:00Z"),
    );
    c1.record_change(
        "h3",
        MarkupSnapshot::new(2.5, 3.0, 1.5, 2.0),
        "Ahmed Hassan",
        ts("2025-01-15T10:30:00Z"),
    );
    companies.push(c1);

    let mut c2 = Company::new(
        "c2",
        "Cairo Gold Exchange",
        CooperationType::Both,
        MarkupSnapshot::ZERO,
        Some("Admin User".into()),
        ts("2025-01-02T12:00:00Z"),
    );
    c2.record_change(
        "h4",
        MarkupSnapshot::new(2.8, 3.2, 1.8, 2.2),
        "Omar Farouk",
        ts("2025-01-08T11:30:00Z"),
    );
    c2.record_change(
        "h5",
        MarkupSnapshot::new(3.0, 3.5, 2.0, 2.5),
        "Sara Ahmed",
        ts("2025-01-14T16:45:00Z"),
    );
    companies.push(c2);

    let mut c3 = Company::new(
        "c3",
        "Luxor Precious Metals",
        CooperationType::Both,
        MarkupSnapshot::ZERO,
        Some("Admin User".into()),
        ts("2025-01-03T08:30:00Z"),
    );
    c3.record_change(
        "h6",
        MarkupSnapshot::new(2.0, 2.5, 1.0, 1.5),
        "Fatima Nasser",
        ts("2025-01-13T09:00:00Z"),
    );
    companies.push(c3);

    let mut c4 = Company::new(
        "c4",
        "Alexandria Silver Co.",
        CooperationType::Silver,
        MarkupSnapshot::ZERO,
        Some("Admin User".into()),
        ts("2025-01-04T15:00:00Z"),
    );
    c4.record_change(
        "h7",
        MarkupSnapshot::new(0.0, 0.0, 1.5, 2.0),
        "Ahmed Hassan",
        ts("2025-01-07T10:00:00Z"),
    );
    c4.record_change(
        "h8",
        MarkupSnapshot::new(0.0, 0.0, 1.8, 2.3),
        "Youssef Ibrahim",
        ts("2025-01-12T14:30:00Z"),
    );
    companies.push(c4);

    let mut c5 = Company::new(
        "c5",
        "Giza Gold Trading",
        CooperationType::Gold,
        MarkupSnapshot::ZERO,
        Some("Admin User".into()),
        ts("2025-01-05T11:00:00Z"),
    );
    c5.record_change(
        "h9",
        MarkupSnapshot::new(2.8, 3.2, 0.0, 0.0),
        "Layla Mahmoud",
        ts("2025-01-11T11:15:00Z"),
    );
    companies.push(c5);

    let mut c6 = Company::new(
        "c6",
        "Nile Valley Metals",
        CooperationType::Both,
        MarkupSnapshot::ZERO,
        Some("Admin User".into()),
        ts("2025-01-06T09:45:00Z"),
    );
    c6.record_change(
        "h10",
        MarkupSnapshot::new(2.4, 2.9, 1.4, 1.9),
        "Hassan Mostafa",
        ts("2025-01-10T08:45:00Z"),
    );
    companies.push(c6);

    companies
}

pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "u1".into(),
            name: "Admin User".into(),
            email: "admin@metaldesk.example".into(),
            company_id: None,
            created_at: ts("2025-01-01T09:00:00Z"),
            created_by_id: "u1".into(),
            created_by_name: "System".into(),
            account_type: AccountType::Admin,
            account_status: AccountStatus::Active,
        },
        User {
            id: "u2".into(),
            name: "Ahmed Hassan".into(),
            email: "ahmed.hassan@metaldesk.example".into(),
            company_id: None,
            created_at: ts("2025-01-05T11:15:00Z"),
            created_by_id: "u1".into(),
            created_by_name: "Admin User".into(),
            account_type: AccountType::Employee,
            account_status: AccountStatus::Active,
        },
        User {
            id: "u3".into(),
            name: "Sara Ahmed".into(),
            email: "sara.ahmed@metaldesk.example".into(),
            company_id: None,
            created_at: ts("2025-01-08T14:30:00Z"),
            created_by_id: "u1".into(),
            created_by_name: "Admin User".into(),
            account_type: AccountType::Employee,
            account_status: AccountStatus::Active,
        },
        User {
            id: "u4".into(),
            name: "Mohamed Ali".into(),
            email: "mohamed.ali@metaldesk.example".into(),
            company_id: Some("c1".into()),
            created_at: ts("2025-01-10T16:45:00Z"),
            created_by_id: "u2".into(),
            created_by_name: "Ahmed Hassan".into(),
            account_type: AccountType::Employee,
            account_status: AccountStatus::Closed,
        },
    ]
}

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("demo timestamp is valid RFC 3339")
}
