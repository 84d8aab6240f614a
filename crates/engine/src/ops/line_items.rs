use crate::{BudgetLineItem, BudgetLineItemPatch, Engine, EngineError, ResultEngine};

impl Engine {
    /// All line items, decorated, in insertion order.
    pub fn budget_line_items(&self) -> Vec<BudgetLineItem> {
        self.budget_line_items
            .iter()
            .map(BudgetLineItem::decorated)
            .collect()
    }

    pub fn budget_line_item(&self, id: &str) -> ResultEngine<BudgetLineItem> {
        self.budget_line_items
            .get(id)
            .map(BudgetLineItem::decorated)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    pub fn new_budget_line_item(&mut self, item: BudgetLineItem) -> ResultEngine<BudgetLineItem> {
        Ok(self.budget_line_items.insert(item)?.decorated())
    }

    pub fn update_budget_line_item(
        &mut self,
        id: &str,
        patch: BudgetLineItemPatch,
    ) -> ResultEngine<BudgetLineItem> {
        Ok(self
            .budget_line_items
            .update(id, |item| {
                if let Some(budget_id) = patch.budget_id {
                    item.budget_id = budget_id;
                }
                if let Some(cost_code_id) = patch.cost_code_id {
                    item.cost_code_id = cost_code_id;
                }
                if let Some(allocated_minor) = patch.allocated_minor {
                    item.allocated_minor = allocated_minor;
                }
                if let Some(committed_minor) = patch.committed_minor {
                    item.committed_minor = committed_minor;
                }
                if let Some(spent_minor) = patch.spent_minor {
                    item.spent_minor = spent_minor;
                }
                if let Some(available_minor) = patch.available_minor {
                    item.available_minor = Some(available_minor);
                }
                if let Some(utilization_percentage) = patch.utilization_percentage {
                    item.utilization_percentage = Some(utilization_percentage);
                }
            })?
            .decorated())
    }

    pub fn delete_budget_line_item(&mut self, id: &str) -> ResultEngine<()> {
        if self.budget_line_items.remove(id) {
            Ok(())
        } else {
            Err(EngineError::KeyNotFound(id.to_string()))
        }
    }

    /// Line items of one budget, decorated, in insertion order.
    ///
    /// An unknown budget id simply yields an empty list; budget ids on line
    /// items are by-value references, not enforced keys.
    pub fn line_items_for_budget(&self, budget_id: &str) -> Vec<BudgetLineItem> {
        self.budget_line_items
            .iter()
            .filter(|item| item.budget_id == budget_id)
            .map(BudgetLineItem::decorated)
            .collect()
    }

    /// The one line item of a budget carrying a given cost code.
    pub fn line_item_for_cost_code(
        &self,
        budget_id: &str,
        cost_code_id: &str,
    ) -> ResultEngine<BudgetLineItem> {
        self.budget_line_items
            .iter()
            .find(|item| item.budget_id == budget_id && item.cost_code_id == cost_code_id)
            .map(BudgetLineItem::decorated)
            .ok_or_else(|| EngineError::KeyNotFound(format!("{budget_id}/{cost_code_id}")))
    }
}
