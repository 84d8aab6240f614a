use chrono::{TimeZone, Utc};

use engine::{
    Budget, BudgetLineItem, BudgetPatch, BudgetStatus, CostCode, CostCodeRemoval, Engine,
    EngineError,
};

fn budget(id: &str, project_id: &str, total_value_minor: i64) -> Budget {
    let mut budget = Budget::new(project_id.to_string(), total_value_minor);
    budget.id = id.to_string();
    budget
}

fn line_item(id: &str, budget_id: &str, cost_code_id: &str, amounts: (i64, i64, i64)) -> BudgetLineItem {
    let mut item = BudgetLineItem::new(budget_id.to_string(), cost_code_id.to_string(), amounts.0);
    item.id = id.to_string();
    item.committed_minor = amounts.1;
    item.spent_minor = amounts.2;
    item
}

#[test]
fn summary_rolls_line_items_up() {
    let mut engine = Engine::new();
    engine.new_budget(budget("b1", "p1", 1000)).unwrap();
    engine
        .new_budget_line_item(line_item("li1", "b1", "cc1", (400, 100, 50)))
        .unwrap();
    engine
        .new_budget_line_item(line_item("li2", "b1", "cc2", (200, 0, 0)))
        .unwrap();
    // A line item of another budget must not leak into the totals.
    engine.new_budget(budget("b2", "p2", 500)).unwrap();
    engine
        .new_budget_line_item(line_item("li3", "b2", "cc1", (300, 0, 0)))
        .unwrap();

    let summary = engine.budget_summary("b1").unwrap();

    assert_eq!(summary.total_allocated_minor, 600);
    assert_eq!(summary.total_committed_minor, 100);
    assert_eq!(summary.total_spent_minor, 50);
    assert_eq!(summary.unallocated_minor, 400);
}

#[test]
fn summary_is_idempotent() {
    let mut engine = Engine::new();
    engine.new_budget(budget("b1", "p1", 1000)).unwrap();
    engine
        .new_budget_line_item(line_item("li1", "b1", "cc1", (400, 100, 50)))
        .unwrap();

    let first = engine.budget_summary("b1").unwrap();
    let second = engine.budget_summary("b1").unwrap();

    assert_eq!(first, second);
}

#[test]
fn summary_of_empty_budget_is_all_unallocated() {
    let mut engine = Engine::new();
    engine.new_budget(budget("b1", "p1", 1000)).unwrap();

    let summary = engine.budget_summary("b1").unwrap();

    assert_eq!(summary.total_allocated_minor, 0);
    assert_eq!(summary.total_committed_minor, 0);
    assert_eq!(summary.total_spent_minor, 0);
    assert_eq!(summary.unallocated_minor, 1000);
}

#[test]
fn summary_of_unknown_budget_fails() {
    let engine = Engine::new();

    assert_eq!(
        engine.budget_summary("missing"),
        Err(EngineError::KeyNotFound("missing".to_string()))
    );
}

#[test]
fn line_items_for_budget_are_decorated_in_order() {
    let mut engine = Engine::new();
    engine.new_budget(budget("b1", "p1", 1000)).unwrap();
    engine
        .new_budget_line_item(line_item("li1", "b1", "cc1", (400, 100, 50)))
        .unwrap();
    engine
        .new_budget_line_item(line_item("li2", "b1", "cc2", (200, 0, 0)))
        .unwrap();

    let items = engine.line_items_for_budget("b1");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "li1");
    assert_eq!(items[0].available_minor, Some(250));
    assert_eq!(items[0].utilization_percentage, Some(37.5));
    assert_eq!(items[1].id, "li2");
    assert_eq!(items[1].available_minor, Some(200));
    assert_eq!(items[1].utilization_percentage, Some(0.0));
}

#[test]
fn line_item_lookup_by_cost_code() {
    let mut engine = Engine::new();
    engine.new_budget(budget("b1", "p1", 1000)).unwrap();
    engine
        .new_budget_line_item(line_item("li1", "b1", "cc1", (400, 0, 0)))
        .unwrap();

    let item = engine.line_item_for_cost_code("b1", "cc1").unwrap();
    assert_eq!(item.id, "li1");

    assert!(matches!(
        engine.line_item_for_cost_code("b1", "cc2"),
        Err(EngineError::KeyNotFound(_))
    ));
}

#[test]
fn stored_derived_values_survive_reads() {
    let mut engine = Engine::new();
    engine.new_budget(budget("b1", "p1", 1000)).unwrap();
    let mut item = line_item("li1", "b1", "cc1", (100, 0, 0));
    item.available_minor = Some(999);
    engine.new_budget_line_item(item).unwrap();

    let read = engine.budget_line_item("li1").unwrap();

    assert_eq!(read.available_minor, Some(999));
}

#[test]
fn duplicate_id_on_create_is_rejected() {
    let mut engine = Engine::new();
    engine.new_budget(budget("b1", "p1", 1000)).unwrap();

    assert_eq!(
        engine.new_budget(budget("b1", "p2", 500)),
        Err(EngineError::ExistingKey("b1".to_string()))
    );
    assert_eq!(engine.budgets().len(), 1);
}

#[test]
fn budget_approval_records_the_approver() {
    let mut engine = Engine::new();
    engine.new_budget(budget("b1", "p1", 1000)).unwrap();
    let approved_at = Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap();

    let approved = engine.approve_budget("b1", "alice", approved_at).unwrap();

    assert_eq!(approved.status, BudgetStatus::Approved);
    assert_eq!(approved.approved_by.as_deref(), Some("alice"));
    assert_eq!(approved.approved_at, Some(approved_at));
}

#[test]
fn closed_budget_cannot_be_approved() {
    let mut engine = Engine::new();
    let mut closed = budget("b1", "p1", 1000);
    closed.status = BudgetStatus::Closed;
    engine.new_budget(closed).unwrap();

    let err = engine
        .approve_budget("b1", "alice", Utc::now())
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidTransition(_)));
}

#[test]
fn status_updates_go_through_the_transition_table() {
    let mut engine = Engine::new();
    engine.new_budget(budget("b1", "p1", 1000)).unwrap();

    // Draft -> Locked skips approval and must be rejected.
    let err = engine
        .update_budget(
            "b1",
            BudgetPatch {
                status: Some(BudgetStatus::Locked),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidTransition(_)));

    // An identity status in a full-record update is a no-op, not an error.
    let updated = engine
        .update_budget(
            "b1",
            BudgetPatch {
                total_value_minor: Some(1200),
                status: Some(BudgetStatus::Draft),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.total_value_minor, 1200);
    assert_eq!(updated.status, BudgetStatus::Draft);
}

#[test]
fn referenced_cost_code_is_deactivated_not_removed() {
    let mut engine = Engine::new();
    let mut code = CostCode::new(
        "03-100".to_string(),
        "Concrete".to_string(),
        "MATERIALS".to_string(),
    );
    code.id = "cc1".to_string();
    engine.new_cost_code(code).unwrap();
    engine.new_budget(budget("b1", "p1", 1000)).unwrap();
    engine
        .new_budget_line_item(line_item("li1", "b1", "cc1", (400, 0, 0)))
        .unwrap();

    assert_eq!(
        engine.delete_cost_code("cc1").unwrap(),
        CostCodeRemoval::Deactivated
    );
    assert!(!engine.cost_code("cc1").unwrap().active);
}

#[test]
fn unreferenced_cost_code_is_removed() {
    let mut engine = Engine::new();
    let mut code = CostCode::new(
        "03-100".to_string(),
        "Concrete".to_string(),
        "MATERIALS".to_string(),
    );
    code.id = "cc1".to_string();
    engine.new_cost_code(code).unwrap();

    assert_eq!(
        engine.delete_cost_code("cc1").unwrap(),
        CostCodeRemoval::Removed
    );
    assert!(matches!(
        engine.cost_code("cc1"),
        Err(EngineError::KeyNotFound(_))
    ));
}

#[test]
fn fixture_seeds_and_snapshots_round_trip() {
    let mut engine = Engine::new();
    engine
        .load_fixture(
            r#"{
                "budgets": [{"id": "b1", "project_id": "p1", "total_value_minor": 1000}],
                "budget_line_items": [
                    {"id": "li1", "budget_id": "b1", "cost_code_id": "cc1", "allocated_minor": 400}
                ]
            }"#,
        )
        .unwrap();

    let summary = engine.budget_summary("b1").unwrap();
    assert_eq!(summary.total_allocated_minor, 400);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.budgets.len(), 1);
    assert_eq!(snapshot.budget_line_items.len(), 1);
    assert!(snapshot.invoices.is_empty());
}

#[test]
fn malformed_fixture_is_rejected() {
    let mut engine = Engine::new();

    let err = engine.load_fixture("{not json").unwrap_err();

    assert!(matches!(err, EngineError::InvalidInput(_)));
}
