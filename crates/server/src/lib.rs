use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod budgets;
mod cost_codes;
mod grns;
mod invoices;
mod line_items;
mod matching;
mod purchase_orders;
mod server;

pub mod types {
    pub mod cost_code {
        pub use api_types::cost_code::{CostCodeNew, CostCodeUpdate, CostCodeView};
    }

    pub mod budget {
        pub use api_types::budget::{
            BudgetApprove, BudgetNew, BudgetStatus, BudgetSummaryView, BudgetUpdate, BudgetView,
        };
    }

    pub mod line_item {
        pub use api_types::line_item::{LineItemNew, LineItemUpdate, LineItemView};
    }

    pub mod purchase_order {
        pub use api_types::purchase_order::{
            PoLine, PurchaseOrderNew, PurchaseOrderStatus, PurchaseOrderUpdate, PurchaseOrderView,
        };
    }

    pub mod invoice {
        pub use api_types::invoice::{
            InvoiceLine, InvoiceNew, InvoiceStatus, InvoiceUpdate, InvoiceView,
        };
    }

    pub mod grn {
        pub use api_types::grn::{GrnLine, GrnNew, GrnUpdate, GrnView};
    }

    pub mod three_way_match {
        pub use api_types::three_way_match::{
            ManualApproveParams, MatchResult, MatchUpdate, MatchView,
        };
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
pub(crate) struct Error {
    pub(crate) error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::InvalidTransition(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), err.to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
