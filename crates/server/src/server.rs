use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use tokio::sync::RwLock;

use std::sync::Arc;

use crate::{Error, budgets, cost_codes, grns, invoices, line_items, matching, purchase_orders};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<RwLock<Engine>>,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/cost-codes", get(cost_codes::list).post(cost_codes::create))
        .route(
            "/cost-codes/{id}",
            get(cost_codes::get)
                .put(cost_codes::update)
                .delete(cost_codes::delete),
        )
        .route("/budgets", get(budgets::list).post(budgets::create))
        .route(
            "/budgets/{id}",
            get(budgets::get).put(budgets::update).delete(budgets::delete),
        )
        .route("/budgets/{id}/summary", get(budgets::summary))
        .route("/budgets/{id}/approve", post(budgets::approve))
        .route(
            "/budget-line-items",
            get(line_items::list).post(line_items::create),
        )
        .route(
            "/budget-line-items/{id}",
            get(line_items::get)
                .put(line_items::update)
                .delete(line_items::delete),
        )
        .route(
            "/budget-line-items/budget/{budget_id}",
            get(line_items::for_budget),
        )
        .route(
            "/budget-line-items/budget/{budget_id}/cost-code/{cost_code_id}",
            get(line_items::for_cost_code),
        )
        .route(
            "/purchase-orders",
            get(purchase_orders::list).post(purchase_orders::create),
        )
        .route(
            "/purchase-orders/{id}",
            get(purchase_orders::get)
                .put(purchase_orders::update)
                .delete(purchase_orders::delete),
        )
        .route("/invoices", get(invoices::list).post(invoices::create))
        .route(
            "/invoices/{id}",
            get(invoices::get)
                .put(invoices::update)
                .delete(invoices::delete),
        )
        .route("/grns", get(grns::list).post(grns::create))
        .route(
            "/grns/{id}",
            get(grns::get).put(grns::update).delete(grns::delete),
        )
        .route("/3-way-matches", get(matching::list))
        .route(
            "/3-way-matches/{id}",
            get(matching::get).put(matching::update),
        )
        .route(
            "/3-way-match/invoice/{invoice_id}",
            post(matching::run_for_invoice),
        )
        .route(
            "/3-way-match/invoice-line/{invoice_line_item_id}",
            get(matching::for_invoice_line),
        )
        .route("/3-way-match/requiring-review", get(matching::requiring_review))
        .route(
            "/3-way-match/{match_id}/manual-approve",
            post(matching::manual_approve),
        )
        .fallback(unsupported_operation)
        .with_state(state)
}

async fn unsupported_operation() -> (StatusCode, Json<Error>) {
    (
        StatusCode::NOT_FOUND,
        Json(Error {
            error: "unsupported operation".to_string(),
        }),
    )
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(RwLock::new(engine)),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
