//! Purchase order API endpoints

use api_types::purchase_order::{
    PoLine, PurchaseOrderNew, PurchaseOrderStatus, PurchaseOrderUpdate, PurchaseOrderView,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn map_status(status: engine::PurchaseOrderStatus) -> PurchaseOrderStatus {
    match status {
        engine::PurchaseOrderStatus::Draft => PurchaseOrderStatus::Draft,
        engine::PurchaseOrderStatus::PendingApproval => PurchaseOrderStatus::PendingApproval,
        engine::PurchaseOrderStatus::Approved => PurchaseOrderStatus::Approved,
        engine::PurchaseOrderStatus::PartiallyReceived => PurchaseOrderStatus::PartiallyReceived,
        engine::PurchaseOrderStatus::FullyReceived => PurchaseOrderStatus::FullyReceived,
        engine::PurchaseOrderStatus::Cancelled => PurchaseOrderStatus::Cancelled,
        engine::PurchaseOrderStatus::Closed => PurchaseOrderStatus::Closed,
    }
}

fn map_status_to_engine(status: PurchaseOrderStatus) -> engine::PurchaseOrderStatus {
    match status {
        PurchaseOrderStatus::Draft => engine::PurchaseOrderStatus::Draft,
        PurchaseOrderStatus::PendingApproval => engine::PurchaseOrderStatus::PendingApproval,
        PurchaseOrderStatus::Approved => engine::PurchaseOrderStatus::Approved,
        PurchaseOrderStatus::PartiallyReceived => engine::PurchaseOrderStatus::PartiallyReceived,
        PurchaseOrderStatus::FullyReceived => engine::PurchaseOrderStatus::FullyReceived,
        PurchaseOrderStatus::Cancelled => engine::PurchaseOrderStatus::Cancelled,
        PurchaseOrderStatus::Closed => engine::PurchaseOrderStatus::Closed,
    }
}

fn map_line(line: &engine::PoLineItem) -> PoLine {
    PoLine {
        id: line.id.clone(),
        description: line.description.clone(),
        quantity: line.quantity,
        unit_price_minor: line.unit_price_minor,
        received_quantity: line.received_quantity,
    }
}

fn map_line_to_engine(line: PoLine) -> engine::PoLineItem {
    engine::PoLineItem {
        id: line.id,
        description: line.description,
        quantity: line.quantity,
        unit_price_minor: line.unit_price_minor,
        received_quantity: line.received_quantity,
    }
}

fn view(order: &engine::PurchaseOrder) -> PurchaseOrderView {
    PurchaseOrderView {
        id: order.id.clone(),
        po_number: order.po_number.clone(),
        project_id: order.project_id.clone(),
        vendor_id: order.vendor_id.clone(),
        status: map_status(order.status),
        line_items: order.line_items.iter().map(map_line).collect(),
        total_value_minor: order.total_value_minor,
    }
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<PurchaseOrderView>>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(engine.purchase_orders().iter().map(view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<PurchaseOrderView>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(view(engine.purchase_order(&id)?)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PurchaseOrderNew>,
) -> Result<(StatusCode, Json<PurchaseOrderView>), ServerError> {
    let order = engine::PurchaseOrder {
        id: payload.id.unwrap_or_default(),
        po_number: payload.po_number,
        project_id: payload.project_id,
        vendor_id: payload.vendor_id,
        status: payload
            .status
            .map(map_status_to_engine)
            .unwrap_or_default(),
        line_items: payload.line_items.into_iter().map(map_line_to_engine).collect(),
        total_value_minor: payload.total_value_minor,
    };

    let mut engine = state.engine.write().await;
    let created = engine.new_purchase_order(order)?;
    Ok((StatusCode::CREATED, Json(view(&created))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PurchaseOrderUpdate>,
) -> Result<Json<PurchaseOrderView>, ServerError> {
    let patch = engine::PurchaseOrderPatch {
        po_number: payload.po_number,
        project_id: payload.project_id,
        vendor_id: payload.vendor_id,
        status: payload.status.map(map_status_to_engine),
        line_items: payload
            .line_items
            .map(|lines| lines.into_iter().map(map_line_to_engine).collect()),
        total_value_minor: payload.total_value_minor,
    };

    let mut engine = state.engine.write().await;
    let updated = engine.update_purchase_order(&id, patch)?;
    Ok(Json(view(&updated)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let mut engine = state.engine.write().await;
    engine.delete_purchase_order(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
