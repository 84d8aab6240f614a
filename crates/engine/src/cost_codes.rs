//! Cost code primitives.
//!
//! A cost code labels what money is spent on (concrete, labour, plant hire).
//! Codes referenced by budget line items are never removed, only deactivated,
//! so historical rollups keep resolving.

use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCode {
    #[serde(default)]
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl CostCode {
    pub fn new(code: String, name: String, category: String) -> Self {
        Self {
            id: String::new(),
            code,
            name,
            category,
            active: true,
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Record for CostCode {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Outcome of a cost code delete request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostCodeRemoval {
    /// The code was unreferenced and has been removed.
    Removed,
    /// The code is referenced by budget line items and was deactivated.
    Deactivated,
}

#[derive(Clone, Debug, Default)]
pub struct CostCodePatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub active: Option<bool>,
}
