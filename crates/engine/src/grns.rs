//! Goods received note primitives.
//!
//! A GRN records a delivery against a purchase order, line by line, with the
//! accepted and rejected quantities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrnLineItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub po_line_item_id: Option<String>,
    #[serde(default)]
    pub received_quantity: f64,
    #[serde(default)]
    pub rejected_quantity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grn {
    #[serde(default)]
    pub id: String,
    pub grn_number: String,
    pub purchase_order_id: String,
    pub received_date: DateTime<Utc>,
    #[serde(default)]
    pub line_items: Vec<GrnLineItem>,
}

impl Record for Grn {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Clone, Debug, Default)]
pub struct GrnPatch {
    pub grn_number: Option<String>,
    pub purchase_order_id: Option<String>,
    pub received_date: Option<DateTime<Utc>>,
    pub line_items: Option<Vec<GrnLineItem>>,
}
