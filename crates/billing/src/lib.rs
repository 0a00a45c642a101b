//! Financial document records: line items, quotations, invoices.
//!
//! Derived monetary fields (`subtotal`, `tax_amount`, `total`, `balance`) are
//! kept consistent by `ledgerly-calc`; this crate only defines the shapes and
//! small status/date predicates.

pub mod invoice;
pub mod item;
pub mod quotation;

pub use invoice::{Invoice, InvoiceId, InvoiceStatus};
pub use item::{LineItem, LineItemId};
pub use quotation::{Quotation, QuotationId, QuotationStatus};
