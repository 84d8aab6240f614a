use chrono::{DateTime, Utc};

use crate::{Budget, BudgetPatch, BudgetStatus, BudgetSummary, Engine, EngineError, ResultEngine};

impl Engine {
    pub fn budgets(&self) -> &[Budget] {
        self.budgets.list()
    }

    pub fn budget(&self, id: &str) -> ResultEngine<&Budget> {
        self.budgets
            .get(id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    pub fn new_budget(&mut self, budget: Budget) -> ResultEngine<Budget> {
        Ok(self.budgets.insert(budget)?.clone())
    }

    pub fn update_budget(&mut self, id: &str, patch: BudgetPatch) -> ResultEngine<Budget> {
        if let Some(next) = patch.status {
            let budget = self.budget(id)?;
            if !budget.status.can_transition_to(next) {
                return Err(EngineError::InvalidTransition(format!(
                    "budget {} -> {}",
                    budget.status.as_str(),
                    next.as_str()
                )));
            }
        }

        Ok(self
            .budgets
            .update(id, |budget| {
                if let Some(project_id) = patch.project_id {
                    budget.project_id = project_id;
                }
                if let Some(total_value_minor) = patch.total_value_minor {
                    budget.total_value_minor = total_value_minor;
                }
                if let Some(status) = patch.status {
                    budget.status = status;
                }
            })?
            .clone())
    }

    pub fn delete_budget(&mut self, id: &str) -> ResultEngine<()> {
        if self.budgets.remove(id) {
            Ok(())
        } else {
            Err(EngineError::KeyNotFound(id.to_string()))
        }
    }

    /// Approves a draft budget, recording who signed it off and when.
    pub fn approve_budget(
        &mut self,
        id: &str,
        approved_by: &str,
        approved_at: DateTime<Utc>,
    ) -> ResultEngine<Budget> {
        let budget = self.budget(id)?;
        if !budget.status.can_transition_to(BudgetStatus::Approved) {
            return Err(EngineError::InvalidTransition(format!(
                "budget {} -> {}",
                budget.status.as_str(),
                BudgetStatus::Approved.as_str()
            )));
        }

        Ok(self
            .budgets
            .update(id, |budget| {
                budget.status = BudgetStatus::Approved;
                budget.approved_by = Some(approved_by.to_string());
                budget.approved_at = Some(approved_at);
            })?
            .clone())
    }

    /// Rolls a budget's line items up into totals.
    ///
    /// Read-only: repeated calls on an unchanged engine return identical
    /// figures. A budget with no line items reports zero totals and its whole
    /// value as unallocated.
    pub fn budget_summary(&self, id: &str) -> ResultEngine<BudgetSummary> {
        let budget = self.budget(id)?;

        let (allocated, committed, spent) = self
            .budget_line_items
            .iter()
            .filter(|item| item.budget_id == id)
            .fold((0i64, 0i64, 0i64), |acc, item| {
                (
                    acc.0 + item.allocated_minor,
                    acc.1 + item.committed_minor,
                    acc.2 + item.spent_minor,
                )
            });

        Ok(BudgetSummary {
            budget: budget.clone(),
            total_allocated_minor: allocated,
            total_committed_minor: committed,
            total_spent_minor: spent,
            unallocated_minor: budget.total_value_minor - allocated,
        })
    }
}
