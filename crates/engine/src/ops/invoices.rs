use crate::{Engine, EngineError, ResultEngine, SupplierInvoice, SupplierInvoicePatch};

impl Engine {
    pub fn invoices(&self) -> &[SupplierInvoice] {
        self.invoices.list()
    }

    pub fn invoice(&self, id: &str) -> ResultEngine<&SupplierInvoice> {
        self.invoices
            .get(id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    pub fn new_invoice(&mut self, invoice: SupplierInvoice) -> ResultEngine<SupplierInvoice> {
        Ok(self.invoices.insert(invoice)?.clone())
    }

    pub fn update_invoice(
        &mut self,
        id: &str,
        patch: SupplierInvoicePatch,
    ) -> ResultEngine<SupplierInvoice> {
        if let Some(next) = patch.status {
            let invoice = self.invoice(id)?;
            if !invoice.status.can_transition_to(next) {
                return Err(EngineError::InvalidTransition(format!(
                    "invoice {} -> {}",
                    invoice.status.as_str(),
                    next.as_str()
                )));
            }
        }

        Ok(self
            .invoices
            .update(id, |invoice| {
                if let Some(invoice_number) = patch.invoice_number {
                    invoice.invoice_number = invoice_number;
                }
                if let Some(vendor_id) = patch.vendor_id {
                    invoice.vendor_id = vendor_id;
                }
                if let Some(purchase_order_id) = patch.purchase_order_id {
                    invoice.purchase_order_id = Some(purchase_order_id);
                }
                if let Some(status) = patch.status {
                    invoice.status = status;
                }
                if let Some(due_date) = patch.due_date {
                    invoice.due_date = due_date;
                }
                if let Some(line_items) = patch.line_items {
                    invoice.line_items = line_items;
                }
            })?
            .clone())
    }

    pub fn delete_invoice(&mut self, id: &str) -> ResultEngine<()> {
        if self.invoices.remove(id) {
            Ok(())
        } else {
            Err(EngineError::KeyNotFound(id.to_string()))
        }
    }
}
