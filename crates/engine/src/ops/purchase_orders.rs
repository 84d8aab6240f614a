use crate::{Engine, EngineError, PurchaseOrder, PurchaseOrderPatch, ResultEngine};

impl Engine {
    pub fn purchase_orders(&self) -> &[PurchaseOrder] {
        self.purchase_orders.list()
    }

    pub fn purchase_order(&self, id: &str) -> ResultEngine<&PurchaseOrder> {
        self.purchase_orders
            .get(id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    pub fn new_purchase_order(&mut self, order: PurchaseOrder) -> ResultEngine<PurchaseOrder> {
        Ok(self.purchase_orders.insert(order)?.clone())
    }

    pub fn update_purchase_order(
        &mut self,
        id: &str,
        patch: PurchaseOrderPatch,
    ) -> ResultEngine<PurchaseOrder> {
        if let Some(next) = patch.status {
            let order = self.purchase_order(id)?;
            if !order.status.can_transition_to(next) {
                return Err(EngineError::InvalidTransition(format!(
                    "purchase order {} -> {}",
                    order.status.as_str(),
                    next.as_str()
                )));
            }
        }

        Ok(self
            .purchase_orders
            .update(id, |order| {
                if let Some(po_number) = patch.po_number {
                    order.po_number = po_number;
                }
                if let Some(project_id) = patch.project_id {
                    order.project_id = project_id;
                }
                if let Some(vendor_id) = patch.vendor_id {
                    order.vendor_id = vendor_id;
                }
                if let Some(status) = patch.status {
                    order.status = status;
                }
                if let Some(line_items) = patch.line_items {
                    order.line_items = line_items;
                }
                if let Some(total_value_minor) = patch.total_value_minor {
                    order.total_value_minor = total_value_minor;
                }
            })?
            .clone())
    }

    pub fn delete_purchase_order(&mut self, id: &str) -> ResultEngine<()> {
        if self.purchase_orders.remove(id) {
            Ok(())
        } else {
            Err(EngineError::KeyNotFound(id.to_string()))
        }
    }
}
