use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ledgerly_core::{DomainError, DomainResult, Entity, RecordId};

/// Customer identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub RecordId);

impl CustomerId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A customer referenced by quotations and invoices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Build a customer, rejecting blank names.
    ///
    /// The fetch collaborator may still assemble records literally; this
    /// constructor is for the editing boundary.
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            email: email.into(),
            phone: None,
            address: None,
            created_at,
        })
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
