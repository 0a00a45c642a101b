//! List ordering and search.
//!
//! Declaratively named sort strategies plus case-insensitive substring
//! search over record collections. Unknown sort keys degrade to identity
//! ordering (fail open): a stale dropdown value must never break a list
//! view. Inputs are never mutated; every operation returns a new vector.

pub mod registry;
pub mod sort;

pub use registry::{CustomerField, InvoiceField, QuotationField};
pub use sort::{Listable, SortDirection, SortSpec, SortValue, filter, sort, sort_and_filter};
