use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ledgerly_core::{DomainError, Entity, RecordId};
use ledgerly_parties::{Customer, CustomerId};

use crate::item::LineItem;
use crate::quotation::QuotationId;

/// Invoice identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub RecordId);

impl InvoiceId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Invoice status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    /// Display name, also the search haystack for status text matches.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Cancelled => "Cancelled",
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draft" => Ok(InvoiceStatus::Draft),
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            "cancelled" => Ok(InvoiceStatus::Cancelled),
            other => Err(DomainError::validation(format!(
                "unknown invoice status: {other}"
            ))),
        }
    }
}

/// An invoice with its line items and derived totals.
///
/// Invariants: the quotation invariants plus `balance == total -
/// amount_paid`. Balance may go negative on overpayment and is never clamped,
/// so callers can detect the overpayment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub number: String,
    pub date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub customer_id: CustomerId,
    /// Resolved by the fetch collaborator; the engine only reads the name.
    pub customer: Customer,
    /// Back-reference when the invoice was raised from a quotation.
    pub quotation_id: Option<QuotationId>,
    pub items: Vec<LineItem>,
    /// Fraction in [0, 1]; out-of-range values are a form-boundary concern.
    pub tax_rate: f64,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub amount_paid: f64,
    pub balance: f64,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
}

impl Invoice {
    /// Whether anything is still owed. Aging reports only consider these.
    pub fn is_outstanding(&self) -> bool {
        self.balance > 0.0
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
