use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ledgerly_core::{DomainError, Entity, RecordId};
use ledgerly_parties::{Customer, CustomerId};

use crate::item::LineItem;

/// Quotation identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuotationId(pub RecordId);

impl QuotationId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for QuotationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Quotation status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotationStatus {
    Draft,
    Sent,
    Accepted,
    Declined,
    Expired,
}

impl QuotationStatus {
    /// Display name, also the search haystack for status text matches.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuotationStatus::Draft => "Draft",
            QuotationStatus::Sent => "Sent",
            QuotationStatus::Accepted => "Accepted",
            QuotationStatus::Declined => "Declined",
            QuotationStatus::Expired => "Expired",
        }
    }
}

impl core::fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for QuotationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draft" => Ok(QuotationStatus::Draft),
            "sent" => Ok(QuotationStatus::Sent),
            "accepted" => Ok(QuotationStatus::Accepted),
            "declined" => Ok(QuotationStatus::Declined),
            "expired" => Ok(QuotationStatus::Expired),
            other => Err(DomainError::validation(format!(
                "unknown quotation status: {other}"
            ))),
        }
    }
}

/// A quotation with its line items and derived totals.
///
/// Invariants: `subtotal == Σ items.amount`, `tax_amount == subtotal *
/// tax_rate`, `total == subtotal + tax_amount`. `ledgerly-calc` re-derives
/// these after every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: QuotationId,
    pub number: String,
    pub date: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub customer_id: CustomerId,
    /// Resolved by the fetch collaborator; the engine only reads the name.
    pub customer: Customer,
    pub items: Vec<LineItem>,
    /// Fraction in [0, 1]; out-of-range values are a form-boundary concern.
    pub tax_rate: f64,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub status: QuotationStatus,
    pub notes: Option<String>,
}

impl Quotation {
    /// Whether the validity window has passed as of `today`.
    pub fn is_expired(&self, today: DateTime<Utc>) -> bool {
        self.valid_until < today
    }
}

impl Entity for Quotation {
    type Id = QuotationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
