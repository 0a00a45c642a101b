use serde::{Deserialize, Serialize};

use ledgerly_core::{Entity, RecordId};

/// Line item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(pub RecordId);

impl LineItemId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One row of a quotation or invoice.
///
/// Invariant: `amount == quantity * price` after any completed edit. The
/// invariant may be violated only transiently inside a single edit, before
/// `ledgerly-calc` recomputes the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub description: String,
    pub quantity: f64,
    pub price: f64,
    pub amount: f64,
}

impl LineItem {
    /// Default row appended by the editing form: one unit at zero price.
    pub fn blank() -> Self {
        Self {
            id: LineItemId::new(RecordId::new()),
            description: String::new(),
            quantity: 1.0,
            price: 0.0,
            amount: 0.0,
        }
    }
}

impl Entity for LineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
