//! Company aggregate tests: creation validation, the markup-change
//! invariant, and the soft lifecycle.

mod common;

use metaldesk_sdk::models::{CompanyPatch, CompanyStatus, CooperationType, NewCompany};
use metaldesk_sdk::MetaldeskError;

use common::snap;

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

#[test]
fn create_assigns_id_and_starts_with_empty_history() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let company = sdk
        .companies()
        .create(NewCompany {
            name: "Aswan Bullion".into(),
            cooperation_type: Some(CooperationType::Both),
            gold_buy: Some(2.1),
            gold_sell: Some(2.6),
            silver_buy: Some(1.1),
            silver_sell: Some(1.6),
            ..NewCompany::default()
        })
        .unwrap();

    assert_eq!(company.id, "c3");
    assert!(company.history().is_empty());
    assert_eq!(company.current_markup(), &snap(2.1, 2.6, 1.1, 1.6));
    assert_eq!(company.company_status, CompanyStatus::Active);
}

#[test]
fn create_rejects_missing_name_and_cooperation_type() {
    let (sdk, _tmp) = common::setup_sample_sdk();
    let before = sdk.companies().list().unwrap().len();

    let err = sdk
        .companies()
        .create(NewCompany {
            name: "   ".into(),
            cooperation_type: None,
            ..NewCompany::default()
        })
        .unwrap_err();

    match err {
        MetaldeskError::Validation(errors) => {
            assert!(errors.has_field("name"));
            assert!(errors.has_field("cooperationType"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(sdk.companies().list().unwrap().len(), before);
}

#[test]
fn create_zeroes_sides_not_covered_by_cooperation_type() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let company = sdk
        .companies()
        .create(NewCompany {
            name: "Giza Gold Trading".into(),
            cooperation_type: Some(CooperationType::Gold),
            gold_buy: Some(2.8),
            gold_sell: Some(3.2),
            // silver values supplied but the partner only trades gold
            silver_buy: Some(9.9),
            silver_sell: Some(9.9),
            ..NewCompany::default()
        })
        .unwrap();

    assert_eq!(company.current_markup(), &snap(2.8, 3.2, 0.0, 0.0));
}

#[test]
fn create_defaults_unset_covered_sides_to_zero() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let company = sdk
        .companies()
        .create(NewCompany {
            name: "Minya Metals".into(),
            cooperation_type: Some(CooperationType::Both),
            gold_buy: Some(2.0),
            ..NewCompany::default()
        })
        .unwrap();

    assert_eq!(company.current_markup(), &snap(2.0, 0.0, 0.0, 0.0));
}

#[test]
fn create_rejects_negative_markup_per_field() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let err = sdk
        .companies()
        .create(NewCompany {
            name: "Bad Rates".into(),
            cooperation_type: Some(CooperationType::Both),
            gold_buy: Some(-1.0),
            silver_sell: Some(-0.5),
            ..NewCompany::default()
        })
        .unwrap_err();

    match err {
        MetaldeskError::Validation(errors) => {
            assert!(errors.has_field("goldBuy"));
            assert!(errors.has_field("silverSell"));
            assert!(!errors.has_field("goldSell"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// record_markup_change
// ---------------------------------------------------------------------------

#[test]
fn record_markup_change_syncs_current_state_with_latest_entry() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let company = sdk
        .companies()
        .record_markup_change("c1", snap(2.6, 3.1, 1.6, 2.1), "Sara Ahmed")
        .unwrap();

    let latest = company.latest_entry().unwrap();
    assert_eq!(company.current_markup(), &latest.snapshot);
    assert_eq!(company.last_updated(), latest.timestamp);
    assert_eq!(latest.changed_by, "Sara Ahmed");

    // the change is visible through a fresh read as well
    let reloaded = sdk.companies().get("c1").unwrap().unwrap();
    assert_eq!(reloaded.current_markup(), &snap(2.6, 3.1, 1.6, 2.1));
    assert_eq!(reloaded.history().len(), 4);
}

#[test]
fn two_revisions_leave_current_at_the_second() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let company = sdk
        .companies()
        .create(NewCompany {
            name: "Fayoum Exchange".into(),
            cooperation_type: Some(CooperationType::Both),
            ..NewCompany::default()
        })
        .unwrap();

    sdk.companies()
        .record_markup_change(&company.id, snap(2.0, 2.5, 1.0, 1.5), "X")
        .unwrap();
    let company = sdk
        .companies()
        .record_markup_change(&company.id, snap(2.5, 3.0, 1.5, 2.0), "Y")
        .unwrap();

    let history = company.history();
    assert_eq!(history.len(), 2);
    assert!(history[0].timestamp <= history[1].timestamp);
    assert_eq!(company.current_markup(), &snap(2.5, 3.0, 1.5, 2.0));
}

#[test]
fn record_markup_change_appends_without_touching_existing_entries() {
    let (sdk, _tmp) = common::setup_sample_sdk();
    let before = sdk.companies().get("c1").unwrap().unwrap();
    let before_entries = before.history().to_vec();

    sdk.companies()
        .record_markup_change("c1", snap(3.0, 3.5, 2.0, 2.5), "Admin User")
        .unwrap();

    let after = sdk.companies().get("c1").unwrap().unwrap();
    assert_eq!(after.history().len(), before_entries.len() + 1);
    assert_eq!(&after.history()[..before_entries.len()], &before_entries[..]);
}

#[test]
fn record_markup_change_allocates_distinct_entry_ids() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let a = sdk
        .companies()
        .record_markup_change("c1", snap(2.6, 3.1, 1.6, 2.1), "X")
        .unwrap();
    let b = sdk
        .companies()
        .record_markup_change("c1", snap(2.7, 3.2, 1.7, 2.2), "X")
        .unwrap();

    let id_a = a.latest_entry().unwrap().id.clone();
    let id_b = b.latest_entry().unwrap().id.clone();
    assert_ne!(id_a, id_b);
}

#[test]
fn record_markup_change_rejects_non_finite_values_without_write() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let err = sdk
        .companies()
        .record_markup_change("c1", snap(f64::NAN, 3.0, 1.5, 2.0), "X")
        .unwrap_err();
    assert!(matches!(err, MetaldeskError::Validation(ref e) if e.has_field("goldBuy")));

    let company = sdk.companies().get("c1").unwrap().unwrap();
    assert_eq!(company.history().len(), 3);
}

#[test]
fn record_markup_change_unknown_company_is_not_found() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let err = sdk
        .companies()
        .record_markup_change("c99", snap(1.0, 1.0, 1.0, 1.0), "X")
        .unwrap_err();
    assert!(matches!(err, MetaldeskError::NotFound(_)));
}

// ---------------------------------------------------------------------------
// update / close
// ---------------------------------------------------------------------------

#[test]
fn update_patches_base_fields_only() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let company = sdk
        .companies()
        .update(
            "c1",
            CompanyPatch {
                tax_number: Some("EG-1234".into()),
                location: Some("Cairo".into()),
                ..CompanyPatch::default()
            },
        )
        .unwrap();

    assert_eq!(company.tax_number.as_deref(), Some("EG-1234"));
    assert_eq!(company.location.as_deref(), Some("Cairo"));
    // markup state untouched
    assert_eq!(company.history().len(), 3);
    assert_eq!(company.current_markup(), &snap(2.5, 3.0, 1.5, 2.0));
}

#[test]
fn update_rejects_blank_name() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let err = sdk
        .companies()
        .update(
            "c1",
            CompanyPatch {
                name: Some("  ".into()),
                ..CompanyPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, MetaldeskError::Validation(ref e) if e.has_field("name")));
}

#[test]
fn close_is_a_soft_removal() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let company = sdk.companies().close("c2").unwrap();
    assert_eq!(company.company_status, CompanyStatus::Closed);

    // still listed, history intact
    let reloaded = sdk.companies().get("c2").unwrap().unwrap();
    assert_eq!(reloaded.company_status, CompanyStatus::Closed);
    assert_eq!(reloaded.history().len(), 2);
}
