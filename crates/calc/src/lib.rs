//! Document calculator.
//!
//! Keeps the derived monetary fields of a quotation or invoice consistent
//! with its line items, tax rate, and (for invoices) amount paid. Pure
//! functions over borrowed data; callers own all state.

pub mod document;

pub use document::{
    DocumentTotals, ItemEdit, add_item, apply_item_edit, recompute_totals, remove_item,
};
