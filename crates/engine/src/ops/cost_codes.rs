use crate::{CostCode, CostCodePatch, CostCodeRemoval, Engine, EngineError, ResultEngine};

impl Engine {
    pub fn cost_codes(&self) -> &[CostCode] {
        self.cost_codes.list()
    }

    pub fn cost_code(&self, id: &str) -> ResultEngine<&CostCode> {
        self.cost_codes
            .get(id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    pub fn new_cost_code(&mut self, cost_code: CostCode) -> ResultEngine<CostCode> {
        Ok(self.cost_codes.insert(cost_code)?.clone())
    }

    pub fn update_cost_code(&mut self, id: &str, patch: CostCodePatch) -> ResultEngine<CostCode> {
        Ok(self
            .cost_codes
            .update(id, |cost_code| {
                if let Some(code) = patch.code {
                    cost_code.code = code;
                }
                if let Some(name) = patch.name {
                    cost_code.name = name;
                }
                if let Some(category) = patch.category {
                    cost_code.category = category;
                }
                if let Some(active) = patch.active {
                    cost_code.active = active;
                }
            })?
            .clone())
    }

    /// Removes a cost code, or deactivates it when budget line items still
    /// reference it so historical rollups keep resolving.
    pub fn delete_cost_code(&mut self, id: &str) -> ResultEngine<CostCodeRemoval> {
        if !self.cost_codes.contains(id) {
            return Err(EngineError::KeyNotFound(id.to_string()));
        }

        let referenced = self
            .budget_line_items
            .iter()
            .any(|item| item.cost_code_id == id);
        if referenced {
            self.cost_codes.update(id, CostCode::deactivate)?;
            Ok(CostCodeRemoval::Deactivated)
        } else {
            self.cost_codes.remove(id);
            Ok(CostCodeRemoval::Removed)
        }
    }
}
