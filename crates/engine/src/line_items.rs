//! Budget line item primitives and the derived-figure decoration.
//!
//! A line item allocates a slice of a budget to one cost code and tracks the
//! committed (on order) and spent (invoiced) amounts against it. Availability
//! and utilization are derived lazily on read; a value stored on the record
//! always wins over the recomputation.

use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetLineItem {
    #[serde(default)]
    pub id: String,
    pub budget_id: String,
    pub cost_code_id: String,
    #[serde(default)]
    pub allocated_minor: i64,
    #[serde(default)]
    pub committed_minor: i64,
    #[serde(default)]
    pub spent_minor: i64,
    /// Stored override for the derived availability.
    #[serde(default)]
    pub available_minor: Option<i64>,
    /// Stored override for the derived utilization.
    #[serde(default)]
    pub utilization_percentage: Option<f64>,
}

impl BudgetLineItem {
    pub fn new(budget_id: String, cost_code_id: String, allocated_minor: i64) -> Self {
        Self {
            id: String::new(),
            budget_id,
            cost_code_id,
            allocated_minor,
            committed_minor: 0,
            spent_minor: 0,
            available_minor: None,
            utilization_percentage: None,
        }
    }

    /// Allocation left once commitments and actuals are taken out.
    ///
    /// Not clamped: a negative value means the line is overcommitted.
    pub fn available(&self) -> i64 {
        self.allocated_minor - self.committed_minor - self.spent_minor
    }

    /// Share of the allocation consumed, as a percentage rounded to two
    /// decimals. A zero allocation reads as 0 rather than dividing by zero.
    pub fn utilization(&self) -> f64 {
        if self.allocated_minor > 0 {
            let used = (self.committed_minor + self.spent_minor) as f64;
            round2(used / self.allocated_minor as f64 * 100.0)
        } else {
            0.0
        }
    }

    /// Returns a copy with the derived fields filled in where absent.
    pub fn decorated(&self) -> Self {
        let mut item = self.clone();
        item.available_minor.get_or_insert_with(|| self.available());
        item.utilization_percentage
            .get_or_insert_with(|| self.utilization());
        item
    }
}

impl Record for BudgetLineItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Clone, Debug, Default)]
pub struct BudgetLineItemPatch {
    pub budget_id: Option<String>,
    pub cost_code_id: Option<String>,
    pub allocated_minor: Option<i64>,
    pub committed_minor: Option<i64>,
    pub spent_minor: Option<i64>,
    pub available_minor: Option<i64>,
    pub utilization_percentage: Option<f64>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
