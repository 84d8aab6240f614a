//! Budget line item API endpoints
//!
//! Every read goes through the engine's decoration, so views always carry the
//! derived availability and utilization figures.

use api_types::line_item::{LineItemNew, LineItemUpdate, LineItemView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn view(item: &engine::BudgetLineItem) -> LineItemView {
    LineItemView {
        id: item.id.clone(),
        budget_id: item.budget_id.clone(),
        cost_code_id: item.cost_code_id.clone(),
        allocated_minor: item.allocated_minor,
        committed_minor: item.committed_minor,
        spent_minor: item.spent_minor,
        available_minor: item.available_minor.unwrap_or_else(|| item.available()),
        utilization_percentage: item
            .utilization_percentage
            .unwrap_or_else(|| item.utilization()),
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<LineItemView>>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(engine.budget_line_items().iter().map(view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<LineItemView>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(view(&engine.budget_line_item(&id)?)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<LineItemNew>,
) -> Result<(StatusCode, Json<LineItemView>), ServerError> {
    let mut item = engine::BudgetLineItem::new(
        payload.budget_id,
        payload.cost_code_id,
        payload.allocated_minor,
    );
    if let Some(id) = payload.id {
        item.id = id;
    }
    item.committed_minor = payload.committed_minor;
    item.spent_minor = payload.spent_minor;

    let mut engine = state.engine.write().await;
    let created = engine.new_budget_line_item(item)?;
    Ok((StatusCode::CREATED, Json(view(&created))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<LineItemUpdate>,
) -> Result<Json<LineItemView>, ServerError> {
    let patch = engine::BudgetLineItemPatch {
        budget_id: payload.budget_id,
        cost_code_id: payload.cost_code_id,
        allocated_minor: payload.allocated_minor,
        committed_minor: payload.committed_minor,
        spent_minor: payload.spent_minor,
        available_minor: payload.available_minor,
        utilization_percentage: payload.utilization_percentage,
    };

    let mut engine = state.engine.write().await;
    let updated = engine.update_budget_line_item(&id, patch)?;
    Ok(Json(view(&updated)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let mut engine = state.engine.write().await;
    engine.delete_budget_line_item(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn for_budget(
    State(state): State<ServerState>,
    Path(budget_id): Path<String>,
) -> Result<Json<Vec<LineItemView>>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(
        engine
            .line_items_for_budget(&budget_id)
            .iter()
            .map(view)
            .collect(),
    ))
}

pub async fn for_cost_code(
    State(state): State<ServerState>,
    Path((budget_id, cost_code_id)): Path<(String, String)>,
) -> Result<Json<LineItemView>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(view(
        &engine.line_item_for_cost_code(&budget_id, &cost_code_id)?,
    )))
}
