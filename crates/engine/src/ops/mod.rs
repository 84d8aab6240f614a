mod budgets;
mod cost_codes;
mod grns;
mod invoices;
mod line_items;
mod matching;
mod purchase_orders;
mod seed;

pub use seed::Fixture;
