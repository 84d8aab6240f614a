use crate::{Engine, EngineError, Grn, GrnPatch, ResultEngine};

impl Engine {
    pub fn grns(&self) -> &[Grn] {
        self.grns.list()
    }

    pub fn grn(&self, id: &str) -> ResultEngine<&Grn> {
        self.grns
            .get(id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    pub fn new_grn(&mut self, grn: Grn) -> ResultEngine<Grn> {
        Ok(self.grns.insert(grn)?.clone())
    }

    pub fn update_grn(&mut self, id: &str, patch: GrnPatch) -> ResultEngine<Grn> {
        Ok(self
            .grns
            .update(id, |grn| {
                if let Some(grn_number) = patch.grn_number {
                    grn.grn_number = grn_number;
                }
                if let Some(purchase_order_id) = patch.purchase_order_id {
                    grn.purchase_order_id = purchase_order_id;
                }
                if let Some(received_date) = patch.received_date {
                    grn.received_date = received_date;
                }
                if let Some(line_items) = patch.line_items {
                    grn.line_items = line_items;
                }
            })?
            .clone())
    }

    pub fn delete_grn(&mut self, id: &str) -> ResultEngine<()> {
        if self.grns.remove(id) {
            Ok(())
        } else {
            Err(EngineError::KeyNotFound(id.to_string()))
        }
    }
}
