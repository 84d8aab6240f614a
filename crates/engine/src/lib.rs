pub use budgets::{Budget, BudgetPatch, BudgetStatus, BudgetSummary};
pub use cost_codes::{CostCode, CostCodePatch, CostCodeRemoval};
pub use error::EngineError;
pub use grns::{Grn, GrnLineItem, GrnPatch};
pub use invoices::{InvoiceLineItem, InvoiceStatus, SupplierInvoice, SupplierInvoicePatch};
pub use line_items::{BudgetLineItem, BudgetLineItemPatch};
pub use matching::{
    MatchResult, PRICE_TOLERANCE_PERCENTAGE, QUANTITY_TOLERANCE_PERCENTAGE, ThreeWayMatch,
    ThreeWayMatchPatch,
};
pub use ops::Fixture;
pub use purchase_orders::{PoLineItem, PurchaseOrder, PurchaseOrderPatch, PurchaseOrderStatus};
pub use store::{Collection, Record};

mod budgets;
mod cost_codes;
mod error;
mod grns;
mod invoices;
mod line_items;
mod matching;
mod ops;
mod purchase_orders;
mod store;

pub type ResultEngine<T> = Result<T, EngineError>;

/// The in-memory construction-finance core.
///
/// Owns one [`Collection`] per entity and exposes synchronous operations over
/// them: plain CRUD, the budget rollups and the three-way-match
/// reconciliation. There is no persistence and no locking; callers serialize
/// access themselves (the HTTP layer holds the engine behind an async
/// read-write lock).
#[derive(Debug, Default)]
pub struct Engine {
    cost_codes: Collection<CostCode>,
    budgets: Collection<Budget>,
    budget_line_items: Collection<BudgetLineItem>,
    purchase_orders: Collection<PurchaseOrder>,
    invoices: Collection<SupplierInvoice>,
    grns: Collection<Grn>,
    three_way_matches: Collection<ThreeWayMatch>,
}

impl Engine {
    /// Return an empty engine. Seed it with [`Engine::load_fixture`] if
    /// needed.
    pub fn new() -> Self {
        Self::default()
    }
}
