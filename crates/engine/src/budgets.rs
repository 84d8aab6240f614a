//! Budget primitives.
//!
//! A budget is the money envelope of a project. Its lifecycle is
//! one-directional: a draft gets approved, an approved budget can be locked
//! against further edits, and locked or approved budgets are eventually
//! closed. Arbitrary status overwrites are rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{EngineError, store::Record};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    #[default]
    Draft,
    Approved,
    Locked,
    Closed,
}

impl BudgetStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Approved => "APPROVED",
            Self::Locked => "LOCKED",
            Self::Closed => "CLOSED",
        }
    }

    /// Whether the status may move to `next`.
    ///
    /// Identity transitions are allowed so full-record updates that leave the
    /// status untouched never fail.
    pub fn can_transition_to(self, next: Self) -> bool {
        self == next
            || matches!(
                (self, next),
                (Self::Draft, Self::Approved)
                    | (Self::Approved, Self::Locked)
                    | (Self::Approved, Self::Closed)
                    | (Self::Locked, Self::Closed)
            )
    }
}

impl TryFrom<&str> for BudgetStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "DRAFT" => Ok(Self::Draft),
            "APPROVED" => Ok(Self::Approved),
            "LOCKED" => Ok(Self::Locked),
            "CLOSED" => Ok(Self::Closed),
            other => Err(EngineError::InvalidInput(format!(
                "invalid budget status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub id: String,
    pub project_id: String,
    #[serde(default)]
    pub total_value_minor: i64,
    #[serde(default)]
    pub status: BudgetStatus,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
}

impl Budget {
    pub fn new(project_id: String, total_value_minor: i64) -> Self {
        Self {
            id: String::new(),
            project_id,
            total_value_minor,
            status: BudgetStatus::Draft,
            approved_by: None,
            approved_at: None,
        }
    }
}

impl Record for Budget {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// A budget together with the rollup of its line items.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetSummary {
    #[serde(flatten)]
    pub budget: Budget,
    pub total_allocated_minor: i64,
    pub total_committed_minor: i64,
    pub total_spent_minor: i64,
    pub unallocated_minor: i64,
}

#[derive(Clone, Debug, Default)]
pub struct BudgetPatch {
    pub project_id: Option<String>,
    pub total_value_minor: Option<i64>,
    pub status: Option<BudgetStatus>,
}
