//! Cost code API endpoints

use api_types::cost_code::{CostCodeNew, CostCodeUpdate, CostCodeView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn view(cost_code: &engine::CostCode) -> CostCodeView {
    CostCodeView {
        id: cost_code.id.clone(),
        code: cost_code.code.clone(),
        name: cost_code.name.clone(),
        category: cost_code.category.clone(),
        active: cost_code.active,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CostCodeView>>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(engine.cost_codes().iter().map(view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<CostCodeView>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(view(engine.cost_code(&id)?)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CostCodeNew>,
) -> Result<(StatusCode, Json<CostCodeView>), ServerError> {
    let mut cost_code = engine::CostCode::new(payload.code, payload.name, payload.category);
    if let Some(id) = payload.id {
        cost_code.id = id;
    }

    let mut engine = state.engine.write().await;
    let created = engine.new_cost_code(cost_code)?;
    Ok((StatusCode::CREATED, Json(view(&created))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CostCodeUpdate>,
) -> Result<Json<CostCodeView>, ServerError> {
    let patch = engine::CostCodePatch {
        code: payload.code,
        name: payload.name,
        category: payload.category,
        active: payload.active,
    };

    let mut engine = state.engine.write().await;
    let updated = engine.update_cost_code(&id, patch)?;
    Ok(Json(view(&updated)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let mut engine = state.engine.write().await;
    engine.delete_cost_code(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
