//! Goods received note API endpoints

use api_types::grn::{GrnLine, GrnNew, GrnUpdate, GrnView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn map_line(line: &engine::GrnLineItem) -> GrnLine {
    GrnLine {
        id: line.id.clone(),
        po_line_item_id: line.po_line_item_id.clone(),
        received_quantity: line.received_quantity,
        rejected_quantity: line.rejected_quantity,
    }
}

fn map_line_to_engine(line: GrnLine) -> engine::GrnLineItem {
    engine::GrnLineItem {
        id: line.id,
        po_line_item_id: line.po_line_item_id,
        received_quantity: line.received_quantity,
        rejected_quantity: line.rejected_quantity,
    }
}

fn view(grn: &engine::Grn) -> GrnView {
    GrnView {
        id: grn.id.clone(),
        grn_number: grn.grn_number.clone(),
        purchase_order_id: grn.purchase_order_id.clone(),
        received_date: grn.received_date,
        line_items: grn.line_items.iter().map(map_line).collect(),
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<GrnView>>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(engine.grns().iter().map(view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<GrnView>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(view(engine.grn(&id)?)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GrnNew>,
) -> Result<(StatusCode, Json<GrnView>), ServerError> {
    let grn = engine::Grn {
        id: payload.id.unwrap_or_default(),
        grn_number: payload.grn_number,
        purchase_order_id: payload.purchase_order_id,
        received_date: payload.received_date,
        line_items: payload.line_items.into_iter().map(map_line_to_engine).collect(),
    };

    let mut engine = state.engine.write().await;
    let created = engine.new_grn(grn)?;
    Ok((StatusCode::CREATED, Json(view(&created))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<GrnUpdate>,
) -> Result<Json<GrnView>, ServerError> {
    let patch = engine::GrnPatch {
        grn_number: payload.grn_number,
        purchase_order_id: payload.purchase_order_id,
        received_date: payload.received_date,
        line_items: payload
            .line_items
            .map(|lines| lines.into_iter().map(map_line_to_engine).collect()),
    };

    let mut engine = state.engine.write().await;
    let updated = engine.update_grn(&id, patch)?;
    Ok(Json(view(&updated)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let mut engine = state.engine.write().await;
    engine.delete_grn(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
