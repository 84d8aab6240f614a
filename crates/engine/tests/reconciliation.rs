use chrono::{TimeZone, Utc};

use engine::{
    Engine, EngineError, InvoiceLineItem, InvoiceStatus, MatchResult, SupplierInvoice,
    SupplierInvoicePatch, ThreeWayMatchPatch,
};

fn invoice(id: &str, line_ids: &[&str]) -> SupplierInvoice {
    SupplierInvoice {
        id: id.to_string(),
        invoice_number: format!("INV-{id}"),
        vendor_id: "v1".to_string(),
        purchase_order_id: Some("po1".to_string()),
        status: InvoiceStatus::Pending,
        due_date: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
        line_items: line_ids
            .iter()
            .enumerate()
            .map(|(index, line_id)| InvoiceLineItem {
                id: line_id.to_string(),
                po_line_item_id: Some(format!("po-li{index}")),
                description: format!("line {index}"),
                quantity: 1.0,
                unit_price_minor: 10_000,
            })
            .collect(),
    }
}

#[test]
fn run_creates_one_match_per_invoice_line() {
    let mut engine = Engine::new();
    engine.new_invoice(invoice("inv1", &["li1", "li2"])).unwrap();
    let matched_at = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();

    let matches = engine.run_matches_for_invoice("inv1", matched_at).unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].invoice_line_item_id, "li1");
    assert_eq!(matches[1].invoice_line_item_id, "li2");
    for record in &matches {
        assert_eq!(record.match_result, MatchResult::Matched);
        assert!(!record.requires_review);
        assert!(record.auto_approved);
        assert!(record.match_successful);
        assert_eq!(record.matched_at, matched_at);
    }
    assert_eq!(engine.three_way_matches().len(), 2);
}

#[test]
fn rerunning_reuses_existing_matches() {
    let mut engine = Engine::new();
    engine.new_invoice(invoice("inv1", &["li1", "li2"])).unwrap();

    let first = engine.run_matches_for_invoice("inv1", Utc::now()).unwrap();
    let second = engine.run_matches_for_invoice("inv1", Utc::now()).unwrap();

    let first_ids: Vec<&str> = first.iter().map(|record| record.id.as_str()).collect();
    let second_ids: Vec<&str> = second.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(first_ids, second_ids);
    assert_eq!(engine.three_way_matches().len(), 2);
}

#[test]
fn lines_without_an_id_are_skipped() {
    let mut engine = Engine::new();
    engine.new_invoice(invoice("inv1", &["li1", " ", ""])).unwrap();

    let matches = engine.run_matches_for_invoice("inv1", Utc::now()).unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].invoice_line_item_id, "li1");
}

#[test]
fn run_for_unknown_invoice_fails() {
    let mut engine = Engine::new();

    assert_eq!(
        engine.run_matches_for_invoice("missing", Utc::now()),
        Err(EngineError::KeyNotFound("missing".to_string()))
    );
}

#[test]
fn match_lookup_by_invoice_line() {
    let mut engine = Engine::new();
    engine.new_invoice(invoice("inv1", &["li1"])).unwrap();
    engine.run_matches_for_invoice("inv1", Utc::now()).unwrap();

    let record = engine.match_for_invoice_line("li1").unwrap();
    assert_eq!(record.invoice_line_item_id, "li1");

    assert!(matches!(
        engine.match_for_invoice_line("li9"),
        Err(EngineError::KeyNotFound(_))
    ));
}

#[test]
fn manual_approve_is_terminal() {
    let mut engine = Engine::new();
    engine.new_invoice(invoice("inv1", &["li1"])).unwrap();
    let matches = engine.run_matches_for_invoice("inv1", Utc::now()).unwrap();
    let match_id = matches[0].id.clone();
    let reviewed_at = Utc.with_ymd_and_hms(2026, 2, 3, 10, 0, 0).unwrap();

    let approved = engine
        .manual_approve(&match_id, "rev-1", Some("ok".to_string()), reviewed_at)
        .unwrap();

    assert_eq!(approved.match_result, MatchResult::ManuallyApproved);
    assert!(approved.manually_reviewed);
    assert_eq!(approved.reviewed_by.as_deref(), Some("rev-1"));
    assert_eq!(approved.reviewed_at, Some(reviewed_at));
    assert_eq!(approved.match_notes.as_deref(), Some("ok"));
}

#[test]
fn reapproval_overwrites_the_first_reviewer() {
    let mut engine = Engine::new();
    engine.new_invoice(invoice("inv1", &["li1"])).unwrap();
    let matches = engine.run_matches_for_invoice("inv1", Utc::now()).unwrap();
    let match_id = matches[0].id.clone();

    engine
        .manual_approve(&match_id, "rev-1", Some("first".to_string()), Utc::now())
        .unwrap();
    let second = engine
        .manual_approve(&match_id, "rev-2", Some("second".to_string()), Utc::now())
        .unwrap();

    assert_eq!(second.match_result, MatchResult::ManuallyApproved);
    assert_eq!(second.reviewed_by.as_deref(), Some("rev-2"));
    assert_eq!(second.match_notes.as_deref(), Some("second"));
}

#[test]
fn manual_approve_of_unknown_match_fails() {
    let mut engine = Engine::new();

    assert_eq!(
        engine.manual_approve("missing", "rev-1", None, Utc::now()),
        Err(EngineError::KeyNotFound("missing".to_string()))
    );
}

#[test]
fn requiring_review_surfaces_only_flagged_records() {
    let mut engine = Engine::new();
    engine.new_invoice(invoice("inv1", &["li1", "li2"])).unwrap();
    let matches = engine.run_matches_for_invoice("inv1", Utc::now()).unwrap();

    // The auto path never flags anything.
    assert!(engine.matches_requiring_review().is_empty());

    engine
        .update_three_way_match(
            &matches[0].id,
            ThreeWayMatchPatch {
                requires_review: Some(true),
                match_successful: Some(false),
                match_notes: Some("quantity off".to_string()),
            },
        )
        .unwrap();

    let flagged = engine.matches_requiring_review();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].invoice_line_item_id, "li1");
}

#[test]
fn invoice_status_updates_go_through_the_transition_table() {
    let mut engine = Engine::new();
    engine.new_invoice(invoice("inv1", &["li1"])).unwrap();

    // Pending -> Paid skips the whole pipeline.
    let err = engine
        .update_invoice(
            "inv1",
            SupplierInvoicePatch {
                status: Some(InvoiceStatus::Paid),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidTransition(_)));

    let matched = engine
        .update_invoice(
            "inv1",
            SupplierInvoicePatch {
                status: Some(InvoiceStatus::Matched),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(matched.status, InvoiceStatus::Matched);
}
