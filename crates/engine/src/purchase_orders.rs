//! Purchase order primitives.
//!
//! A purchase order commits money with a vendor. The receiving flow drives
//! its status: approved orders move to partially or fully received as goods
//! arrive, and only fully received orders can be closed.

use serde::{Deserialize, Serialize};

use crate::{EngineError, store::Record};

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

impl PurchaseOrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::PendingApproval => "PENDING_APPROVAL",
            Self::Approved => "APPROVED",
            Self::PartiallyReceived => "PARTIALLY_RECEIVED",
            Self::FullyReceived => "FULLY_RECEIVED",
            Self::Cancelled => "CANCELLED",
            Self::Closed => "CLOSED",
        }
    }

    /// Whether the status may move to `next`. Identity transitions are
    /// allowed.
    pub fn can_transition_to(self, next: Self) -> bool {
        self == next
            || matches!(
                (self, next),
                (Self::Draft, Self::PendingApproval)
                    | (Self::Draft, Self::Cancelled)
                    | (Self::PendingApproval, Self::Approved)
                    | (Self::PendingApproval, Self::Cancelled)
                    | (Self::Approved, Self::PartiallyReceived)
                    | (Self::Approved, Self::FullyReceived)
                    | (Self::Approved, Self::Cancelled)
                    | (Self::PartiallyReceived, Self::FullyReceived)
                    | (Self::PartiallyReceived, Self::Cancelled)
                    | (Self::FullyReceived, Self::Closed)
            )
    }
}

impl TryFrom<&str> for PurchaseOrderStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "DRAFT" => Ok(Self::Draft),
            "PENDING_APPROVAL" => Ok(Self::PendingApproval),
            "APPROVED" => Ok(Self::Approved),
            "PARTIALLY_RECEIVED" => Ok(Self::PartiallyReceived),
            "FULLY_RECEIVED" => Ok(Self::FullyReceived),
            "CANCELLED" => Ok(Self::Cancelled),
            "CLOSED" => Ok(Self::Closed),
            other => Err(EngineError::InvalidInput(format!(
                "invalid purchase order status: {other}"
            ))),
        }
    }
}

/// One ordered line on a purchase order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoLineItem {
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

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(default)]
    pub id: String,
    pub po_number: String,
    pub project_id: String,
    pub vendor_id: String,
    #[serde(default)]
    pub status: PurchaseOrderStatus,
    #[serde(default)]
    pub line_items: Vec<PoLineItem>,
    #[serde(default)]
    pub total_value_minor: i64,
}

impl Record for PurchaseOrder {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Clone, Debug, Default)]
pub struct PurchaseOrderPatch {
    pub po_number: Option<String>,
    pub project_id: Option<String>,
    pub vendor_id: Option<String>,
    pub status: Option<PurchaseOrderStatus>,
    pub line_items: Option<Vec<PoLineItem>>,
    pub total_value_minor: Option<i64>,
}
