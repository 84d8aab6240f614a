use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod cost_code {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CostCodeNew {
        /// Optional caller-supplied id; blank or missing ids are generated.
        pub id: Option<String>,
        pub code: String,
        pub name: String,
        pub category: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CostCodeUpdate {
        pub code: Option<String>,
        pub name: Option<String>,
        pub category: Option<String>,
        pub active: Option<bool>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CostCodeView {
        pub id: String,
        pub code: String,
        pub name: String,
        pub category: String,
        pub active: bool,
    }
}

pub mod budget {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum BudgetStatus {
        #[default]
        Draft,
        Approved,
        Locked,
        Closed,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetNew {
        pub id: Option<String>,
        pub project_id: String,
        pub total_value_minor: i64,
        pub status: Option<BudgetStatus>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetUpdate {
        pub project_id: Option<String>,
        pub total_value_minor: Option<i64>,
        /// Status changes are validated against the budget lifecycle; an
        /// illegal move is rejected, not silently applied.
        pub status: Option<BudgetStatus>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetApprove {
        pub approved_by: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetView {
        pub id: String,
        pub project_id: String,
        pub total_value_minor: i64,
        pub status: BudgetStatus,
        pub approved_by: Option<String>,
        pub approved_at: Option<DateTime<Utc>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetSummaryView {
        #[serde(flatten)]
        pub budget: BudgetView,
        pub total_allocated_minor: i64,
        pub total_committed_minor: i64,
        pub total_spent_minor: i64,
        pub unallocated_minor: i64,
    }
}

pub mod line_item {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LineItemNew {
        pub id: Option<String>,
        pub budget_id: String,
        pub cost_code_id: String,
        #[serde(default)]
        pub allocated_minor: i64,
        #[serde(default)]
        pub committed_minor: i64,
        #[serde(default)]
        pub spent_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LineItemUpdate {
        pub budget_id: Option<String>,
        pub cost_code_id: Option<String>,
        pub allocated_minor: Option<i64>,
        pub committed_minor: Option<i64>,
        pub spent_minor: Option<i64>,
        /// Explicitly stored overrides; once set they win over the derived
        /// figures on every read.
        pub available_minor: Option<i64>,
        pub utilization_percentage: Option<f64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LineItemView {
        pub id: String,
        pub budget_id: String,
        pub cost_code_id: String,
        pub allocated_minor: i64,
        pub committed_minor: i64,
        pub spent_minor: i64,
        pub available_minor: i64,
        /// Percentage of the allocation consumed, rounded to two decimals.
        pub utilization_percentage: f64,
    }
}

pub mod purchase_order {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum PurchaseOrderStatus {
        #[default]
        Draft,
        PendingApproval,
        Approved,
        PartiallyReceived,
        FullyReceived,
        Cancelled,
        Closed,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct PoLine {
        #[serde(default)]
        pub id: String,
        pub description: String,
        #[serde(default)]
        pub quantity: f64,
        #[serde(default)]
        pub unit_price_minor: i64,
        #[serde(default)]
        pub received_quantity: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PurchaseOrderNew {
        pub id: Option<String>,
        pub po_number: String,
        pub project_id: String,
        pub vendor_id: String,
        pub status: Option<PurchaseOrderStatus>,
        #[serde(default)]
        pub line_items: Vec<PoLine>,
        #[serde(default)]
        pub total_value_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PurchaseOrderUpdate {
        pub po_number: Option<String>,
        pub project_id: Option<String>,
        pub vendor_id: Option<String>,
        pub status: Option<PurchaseOrderStatus>,
        pub line_items: Option<Vec<PoLine>>,
        pub total_value_minor: Option<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PurchaseOrderView {
        pub id: String,
        pub po_number: String,
        pub project_id: String,
        pub vendor_id: String,
        pub status: PurchaseOrderStatus,
        pub line_items: Vec<PoLine>,
        pub total_value_minor: i64,
    }
}

pub mod invoice {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum InvoiceStatus {
        #[default]
        Pending,
        Matched,
        Disputed,
        Approved,
        PaymentProcessing,
        Paid,
        Rejected,
        Cancelled,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct InvoiceLine {
        #[serde(default)]
        pub id: String,
        pub po_line_item_id: Option<String>,
        pub description: String,
        #[serde(default)]
        pub quantity: f64,
        #[serde(default)]
        pub unit_price_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct InvoiceNew {
        pub id: Option<String>,
        pub invoice_number: String,
        pub vendor_id: String,
        pub purchase_order_id: Option<String>,
        pub status: Option<InvoiceStatus>,
        pub due_date: DateTime<Utc>,
        #[serde(default)]
        pub line_items: Vec<InvoiceLine>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct InvoiceUpdate {
        pub invoice_number: Option<String>,
        pub vendor_id: Option<String>,
        pub purchase_order_id: Option<String>,
        pub status: Option<InvoiceStatus>,
        pub due_date: Option<DateTime<Utc>>,
        pub line_items: Option<Vec<InvoiceLine>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct InvoiceView {
        pub id: String,
        pub invoice_number: String,
        pub vendor_id: String,
        pub purchase_order_id: Option<String>,
        pub status: InvoiceStatus,
        pub due_date: DateTime<Utc>,
        pub line_items: Vec<InvoiceLine>,
        /// Derived on read: past the due date and not yet paid or cancelled.
        pub overdue: bool,
    }
}

pub mod grn {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct GrnLine {
        #[serde(default)]
        pub id: String,
        pub po_line_item_id: Option<String>,
        #[serde(default)]
        pub received_quantity: f64,
        #[serde(default)]
        pub rejected_quantity: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GrnNew {
        pub id: Option<String>,
        pub grn_number: String,
        pub purchase_order_id: String,
        pub received_date: DateTime<Utc>,
        #[serde(default)]
        pub line_items: Vec<GrnLine>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GrnUpdate {
        pub grn_number: Option<String>,
        pub purchase_order_id: Option<String>,
        pub received_date: Option<DateTime<Utc>>,
        pub line_items: Option<Vec<GrnLine>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GrnView {
        pub id: String,
        pub grn_number: String,
        pub purchase_order_id: String,
        pub received_date: DateTime<Utc>,
        pub line_items: Vec<GrnLine>,
    }
}

pub mod three_way_match {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum MatchResult {
        Matched,
        ManuallyApproved,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MatchView {
        pub id: String,
        pub invoice_line_item_id: String,
        pub po_line_item_id: Option<String>,
        pub grn_line_item_id: Option<String>,
        pub match_result: MatchResult,
        pub requires_review: bool,
        pub auto_approved: bool,
        pub manually_reviewed: bool,
        pub quantity_tolerance_percentage: f64,
        pub price_tolerance_percentage: f64,
        pub match_successful: bool,
        pub matched_at: DateTime<Utc>,
        pub reviewed_by: Option<String>,
        pub reviewed_at: Option<DateTime<Utc>>,
        pub match_notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MatchUpdate {
        pub requires_review: Option<bool>,
        pub match_successful: Option<bool>,
        pub match_notes: Option<String>,
    }

    /// Query parameters of the manual-approve operation.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ManualApproveParams {
        pub reviewer_id: Option<String>,
        pub notes: Option<String>,
    }
}
