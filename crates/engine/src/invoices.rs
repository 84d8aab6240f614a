//! Supplier invoice primitives.
//!
//! An invoice bills against a purchase order. Payment runs through a fixed
//! pipeline: pending invoices are matched (or disputed), matched invoices are
//! approved, approved invoices enter payment processing and end up paid.
//! Whether an invoice is overdue is derived on read, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{EngineError, store::Record};

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

impl InvoiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Matched => "MATCHED",
            Self::Disputed => "DISPUTED",
            Self::Approved => "APPROVED",
            Self::PaymentProcessing => "PAYMENT_PROCESSING",
            Self::Paid => "PAID",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether the status may move to `next`. Identity transitions are
    /// allowed. Disputes can be resolved back to matched; everything else is
    /// forward-only.
    pub fn can_transition_to(self, next: Self) -> bool {
        self == next
            || matches!(
                (self, next),
                (Self::Pending, Self::Matched)
                    | (Self::Pending, Self::Disputed)
                    | (Self::Pending, Self::Rejected)
                    | (Self::Pending, Self::Cancelled)
                    | (Self::Matched, Self::Approved)
                    | (Self::Matched, Self::Disputed)
                    | (Self::Matched, Self::Cancelled)
                    | (Self::Disputed, Self::Matched)
                    | (Self::Disputed, Self::Rejected)
                    | (Self::Disputed, Self::Cancelled)
                    | (Self::Approved, Self::PaymentProcessing)
                    | (Self::Approved, Self::Cancelled)
                    | (Self::PaymentProcessing, Self::Paid)
            )
    }
}

impl TryFrom<&str> for InvoiceStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "MATCHED" => Ok(Self::Matched),
            "DISPUTED" => Ok(Self::Disputed),
            "APPROVED" => Ok(Self::Approved),
            "PAYMENT_PROCESSING" => Ok(Self::PaymentProcessing),
            "PAID" => Ok(Self::Paid),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(EngineError::InvalidInput(format!(
                "invalid invoice status: {other}"
            ))),
        }
    }
}

/// One billed line on an invoice, optionally tied to a purchase order line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub po_line_item_id: Option<String>,
    pub description: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit_price_minor: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupplierInvoice {
    #[serde(default)]
    pub id: String,
    pub invoice_number: String,
    pub vendor_id: String,
    #[serde(default)]
    pub purchase_order_id: Option<String>,
    #[serde(default)]
    pub status: InvoiceStatus,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub line_items: Vec<InvoiceLineItem>,
}

impl SupplierInvoice {
    /// Past its due date and still in a payable state.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date < now
            && !matches!(self.status, InvoiceStatus::Paid | InvoiceStatus::Cancelled)
    }
}

impl Record for SupplierInvoice {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Clone, Debug, Default)]
pub struct SupplierInvoicePatch {
    pub invoice_number: Option<String>,
    pub vendor_id: Option<String>,
    pub purchase_order_id: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub due_date: Option<DateTime<Utc>>,
    pub line_items: Option<Vec<InvoiceLineItem>>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn invoice(status: InvoiceStatus, due_date: DateTime<Utc>) -> SupplierInvoice {
        SupplierInvoice {
            id: "inv1".to_string(),
            invoice_number: "INV-001".to_string(),
            vendor_id: "v1".to_string(),
            purchase_order_id: None,
            status,
            due_date,
            line_items: Vec::new(),
        }
    }

    #[test]
    fn past_due_pending_invoice_is_overdue() {
        let due = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();

        assert!(invoice(InvoiceStatus::Pending, due).is_overdue(now));
    }

    #[test]
    fn paid_and_cancelled_invoices_are_never_overdue() {
        let due = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();

        assert!(!invoice(InvoiceStatus::Paid, due).is_overdue(now));
        assert!(!invoice(InvoiceStatus::Cancelled, due).is_overdue(now));
    }

    #[test]
    fn future_due_date_is_not_overdue() {
        let due = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();

        assert!(!invoice(InvoiceStatus::Pending, due).is_overdue(now));
    }

    #[test]
    fn disputes_can_be_resolved_back_to_matched() {
        assert!(InvoiceStatus::Matched.can_transition_to(InvoiceStatus::Disputed));
        assert!(InvoiceStatus::Disputed.can_transition_to(InvoiceStatus::Matched));
    }

    #[test]
    fn payment_pipeline_is_forward_only() {
        assert!(InvoiceStatus::Pending.can_transition_to(InvoiceStatus::Matched));
        assert!(InvoiceStatus::Matched.can_transition_to(InvoiceStatus::Approved));
        assert!(InvoiceStatus::Approved.can_transition_to(InvoiceStatus::PaymentProcessing));
        assert!(InvoiceStatus::PaymentProcessing.can_transition_to(InvoiceStatus::Paid));

        assert!(!InvoiceStatus::Pending.can_transition_to(InvoiceStatus::Paid));
        assert!(!InvoiceStatus::Paid.can_transition_to(InvoiceStatus::Pending));
        assert!(!InvoiceStatus::PaymentProcessing.can_transition_to(InvoiceStatus::Cancelled));
    }
}
