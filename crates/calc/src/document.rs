use serde::{Deserialize, Serialize};

use ledgerly_billing::LineItem;
use ledgerly_core::{DomainError, DomainResult};

/// A single edit to one field of a line item.
///
/// Quantity and price edits re-derive the row amount; description edits
/// leave the numbers untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemEdit {
    Description(String),
    Quantity(f64),
    Price(f64),
}

/// Derived monetary fields of a document.
///
/// `balance` is present only in invoice context (an amount paid was
/// supplied). It may be negative on overpayment; the calculator never clamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub balance: Option<f64>,
}

/// Apply one field edit to a line item, returning the updated row.
///
/// Rejects non-finite quantity or price so malformed input never reaches the
/// totals. Negative values are not checked here; the form boundary owns
/// range validation.
pub fn apply_item_edit(item: &LineItem, edit: &ItemEdit) -> DomainResult<LineItem> {
    let mut next = item.clone();
    match edit {
        ItemEdit::Description(text) => {
            next.description = text.clone();
        }
        ItemEdit::Quantity(quantity) => {
            if !quantity.is_finite() {
                return Err(DomainError::non_finite("quantity", *quantity));
            }
            next.quantity = *quantity;
            next.amount = next.quantity * next.price;
        }
        ItemEdit::Price(price) => {
            if !price.is_finite() {
                return Err(DomainError::non_finite("price", *price));
            }
            next.price = *price;
            next.amount = next.quantity * next.price;
        }
    }
    Ok(next)
}

/// Re-derive subtotal, tax, total, and (in invoice context) balance.
///
/// Must run after every item add/remove/edit and after every tax-rate or
/// amount-paid change. Idempotent and side-effect-free; an empty item list
/// yields all-zero totals. Tax rates outside [0, 1] pass through unclamped.
pub fn recompute_totals(
    items: &[LineItem],
    tax_rate: f64,
    amount_paid: Option<f64>,
) -> DomainResult<DocumentTotals> {
    if !tax_rate.is_finite() {
        return Err(DomainError::non_finite("tax_rate", tax_rate));
    }
    if let Some(paid) = amount_paid {
        if !paid.is_finite() {
            return Err(DomainError::non_finite("amount_paid", paid));
        }
    }

    let subtotal: f64 = items.iter().map(|item| item.amount).sum();
    let tax_amount = subtotal * tax_rate;
    let total = subtotal + tax_amount;
    let balance = amount_paid.map(|paid| total - paid);

    Ok(DocumentTotals {
        subtotal,
        tax_amount,
        total,
        balance,
    })
}

/// Append the form's default row (one unit at zero price).
///
/// Totals are not recomputed here; callers follow up with
/// [`recompute_totals`].
pub fn add_item(items: &[LineItem]) -> Vec<LineItem> {
    let mut next = items.to_vec();
    next.push(LineItem::blank());
    next
}

/// Remove the row at `index`.
///
/// A document always keeps at least one line item, so removal from a
/// single-row list is an identity copy. An out-of-range index is also an
/// identity copy.
pub fn remove_item(items: &[LineItem], index: usize) -> Vec<LineItem> {
    let mut next = items.to_vec();
    if next.len() > 1 && index < next.len() {
        next.remove(index);
    }
    next
}
