//! Budget API endpoints

use api_types::budget::{
    BudgetApprove, BudgetNew, BudgetStatus, BudgetSummaryView, BudgetUpdate, BudgetView,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;

use crate::{ServerError, server::ServerState};

fn map_status(status: engine::BudgetStatus) -> BudgetStatus {
    match status {
        engine::BudgetStatus::Draft => BudgetStatus::Draft,
        engine::BudgetStatus::Approved => BudgetStatus::Approved,
        engine::BudgetStatus::Locked => BudgetStatus::Locked,
        engine::BudgetStatus::Closed => BudgetStatus::Closed,
    }
}

fn map_status_to_engine(status: BudgetStatus) -> engine::BudgetStatus {
    match status {
        BudgetStatus::Draft => engine::BudgetStatus::Draft,
        BudgetStatus::Approved => engine::BudgetStatus::Approved,
        BudgetStatus::Locked => engine::BudgetStatus::Locked,
        BudgetStatus::Closed => engine::BudgetStatus::Closed,
    }
}

fn view(budget: &engine::Budget) -> BudgetView {
    BudgetView {
        id: budget.id.clone(),
        project_id: budget.project_id.clone(),
        total_value_minor: budget.total_value_minor,
        status: map_status(budget.status),
        approved_by: budget.approved_by.clone(),
        approved_at: budget.approved_at,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<BudgetView>>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(engine.budgets().iter().map(view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<BudgetView>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(view(engine.budget(&id)?)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BudgetNew>,
) -> Result<(StatusCode, Json<BudgetView>), ServerError> {
    let mut budget = engine::Budget::new(payload.project_id, payload.total_value_minor);
    if let Some(id) = payload.id {
        budget.id = id;
    }
    if let Some(status) = payload.status {
        budget.status = map_status_to_engine(status);
    }

    let mut engine = state.engine.write().await;
    let created = engine.new_budget(budget)?;
    Ok((StatusCode::CREATED, Json(view(&created))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BudgetUpdate>,
) -> Result<Json<BudgetView>, ServerError> {
    let patch = engine::BudgetPatch {
        project_id: payload.project_id,
        total_value_minor: payload.total_value_minor,
        status: payload.status.map(map_status_to_engine),
    };

    let mut engine = state.engine.write().await;
    let updated = engine.update_budget(&id, patch)?;
    Ok(Json(view(&updated)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let mut engine = state.engine.write().await;
    engine.delete_budget(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn approve(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BudgetApprove>,
) -> Result<Json<BudgetView>, ServerError> {
    let mut engine = state.engine.write().await;
    let approved = engine.approve_budget(&id, &payload.approved_by, Utc::now())?;
    Ok(Json(view(&approved)))
}

pub async fn summary(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<BudgetSummaryView>, ServerError> {
    let engine = state.engine.read().await;
    let summary = engine.budget_summary(&id)?;

    Ok(Json(BudgetSummaryView {
        budget: view(&summary.budget),
        total_allocated_minor: summary.total_allocated_minor,
        total_committed_minor: summary.total_committed_minor,
        total_spent_minor: summary.total_spent_minor,
        unallocated_minor: summary.unallocated_minor,
    }))
}
