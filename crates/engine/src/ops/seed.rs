//! Seed data loading and snapshotting.

use serde::{Deserialize, Serialize};

use crate::{
    Budget, BudgetLineItem, CostCode, Engine, EngineError, Grn, PurchaseOrder, ResultEngine,
    SupplierInvoice, ThreeWayMatch,
};

/// A full engine state, used to seed a fresh instance from a JSON document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub cost_codes: Vec<CostCode>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub budget_line_items: Vec<BudgetLineItem>,
    #[serde(default)]
    pub purchase_orders: Vec<PurchaseOrder>,
    #[serde(default)]
    pub invoices: Vec<SupplierInvoice>,
    #[serde(default)]
    pub grns: Vec<Grn>,
    #[serde(default)]
    pub three_way_matches: Vec<ThreeWayMatch>,
}

impl Engine {
    /// Replaces every collection with the contents of a JSON fixture.
    ///
    /// Fixture records go through the same insert path as API creates, so a
    /// duplicate id in the document is rejected.
    pub fn load_fixture(&mut self, raw: &str) -> ResultEngine<()> {
        let fixture: Fixture = serde_json::from_str(raw)
            .map_err(|err| EngineError::InvalidInput(format!("invalid fixture: {err}")))?;

        self.cost_codes.replace(fixture.cost_codes)?;
        self.budgets.replace(fixture.budgets)?;
        self.budget_line_items.replace(fixture.budget_line_items)?;
        self.purchase_orders.replace(fixture.purchase_orders)?;
        self.invoices.replace(fixture.invoices)?;
        self.grns.replace(fixture.grns)?;
        self.three_way_matches.replace(fixture.three_way_matches)?;
        Ok(())
    }

    /// Clones the current state into a [`Fixture`].
    pub fn snapshot(&self) -> Fixture {
        Fixture {
            cost_codes: self.cost_codes.list().to_vec(),
            budgets: self.budgets.list().to_vec(),
            budget_line_items: self.budget_line_items.list().to_vec(),
            purchase_orders: self.purchase_orders.list().to_vec(),
            invoices: self.invoices.list().to_vec(),
            grns: self.grns.list().to_vec(),
            three_way_matches: self.three_way_matches.list().to_vec(),
        }
    }
}
