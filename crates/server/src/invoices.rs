//! Supplier invoice API endpoints
//!
//! Views stamp the derived `overdue` flag against the wall clock at read
//! time; it is never stored.

use api_types::invoice::{InvoiceLine, InvoiceNew, InvoiceStatus, InvoiceUpdate, InvoiceView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};

use crate::{ServerError, server::ServerState};

fn map_status(status: engine::InvoiceStatus) -> InvoiceStatus {
    match status {
        engine::InvoiceStatus::Pending => InvoiceStatus::Pending,
        engine::InvoiceStatus::Matched => InvoiceStatus::Matched,
        engine::InvoiceStatus::Disputed => InvoiceStatus::Disputed,
        engine::InvoiceStatus::Approved => InvoiceStatus::Approved,
        engine::InvoiceStatus::PaymentProcessing => InvoiceStatus::PaymentProcessing,
        engine::InvoiceStatus::Paid => InvoiceStatus::Paid,
        engine::InvoiceStatus::Rejected => InvoiceStatus::Rejected,
        engine::InvoiceStatus::Cancelled => InvoiceStatus::Cancelled,
    }
}

fn map_status_to_engine(status: InvoiceStatus) -> engine::InvoiceStatus {
    match status {
        InvoiceStatus::Pending => engine::InvoiceStatus::Pending,
        InvoiceStatus::Matched => engine::InvoiceStatus::Matched,
        InvoiceStatus::Disputed => engine::InvoiceStatus::Disputed,
        InvoiceStatus::Approved => engine::InvoiceStatus::Approved,
        InvoiceStatus::PaymentProcessing => engine::InvoiceStatus::PaymentProcessing,
        InvoiceStatus::Paid => engine::InvoiceStatus::Paid,
        InvoiceStatus::Rejected => engine::InvoiceStatus::Rejected,
        InvoiceStatus::Cancelled => engine::InvoiceStatus::Cancelled,
    }
}

fn map_line(line: &engine::InvoiceLineItem) -> InvoiceLine {
    InvoiceLine {
        id: line.id.clone(),
        po_line_item_id: line.po_line_item_id.clone(),
        description: line.description.clone(),
        quantity: line.quantity,
        unit_price_minor: line.unit_price_minor,
    }
}

fn map_line_to_engine(line: InvoiceLine) -> engine::InvoiceLineItem {
    engine::InvoiceLineItem {
        id: line.id,
        po_line_item_id: line.po_line_item_id,
        description: line.description,
        quantity: line.quantity,
        unit_price_minor: line.unit_price_minor,
    }
}

fn view(invoice: &engine::SupplierInvoice, now: DateTime<Utc>) -> InvoiceView {
    InvoiceView {
        id: invoice.id.clone(),
        invoice_number: invoice.invoice_number.clone(),
        vendor_id: invoice.vendor_id.clone(),
        purchase_order_id: invoice.purchase_order_id.clone(),
        status: map_status(invoice.status),
        due_date: invoice.due_date,
        line_items: invoice.line_items.iter().map(map_line).collect(),
        overdue: invoice.is_overdue(now),
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<InvoiceView>>, ServerError> {
    let engine = state.engine.read().await;
    let now = Utc::now();
    Ok(Json(
        engine
            .invoices()
            .iter()
            .map(|invoice| view(invoice, now))
            .collect(),
    ))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<InvoiceView>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(view(engine.invoice(&id)?, Utc::now())))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InvoiceNew>,
) -> Result<(StatusCode, Json<InvoiceView>), ServerError> {
    let invoice = engine::SupplierInvoice {
        id: payload.id.unwrap_or_default(),
        invoice_number: payload.invoice_number,
        vendor_id: payload.vendor_id,
        purchase_order_id: payload.purchase_order_id,
        status: payload
            .status
            .map(map_status_to_engine)
            .unwrap_or_default(),
        due_date: payload.due_date,
        line_items: payload.line_items.into_iter().map(map_line_to_engine).collect(),
    };

    let mut engine = state.engine.write().await;
    let created = engine.new_invoice(invoice)?;
    Ok((StatusCode::CREATED, Json(view(&created, Utc::now()))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InvoiceUpdate>,
) -> Result<Json<InvoiceView>, ServerError> {
    let patch = engine::SupplierInvoicePatch {
        invoice_number: payload.invoice_number,
        vendor_id: payload.vendor_id,
        purchase_order_id: payload.purchase_order_id,
        status: payload.status.map(map_status_to_engine),
        due_date: payload.due_date,
        line_items: payload
            .line_items
            .map(|lines| lines.into_iter().map(map_line_to_engine).collect()),
    };

    let mut engine = state.engine.write().await;
    let updated = engine.update_invoice(&id, patch)?;
    Ok(Json(view(&updated, Utc::now())))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let mut engine = state.engine.write().await;
    engine.delete_invoice(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
