//! Per-entity sort registries and accessors.
//!
//! Keys and captions mirror the list-view dropdowns: each entity exposes a
//! fixed table of named strategies, and a typed accessor per sortable field.

use ledgerly_billing::{Invoice, Quotation};
use ledgerly_parties::Customer;

use crate::sort::{Listable, SortDirection, SortSpec, SortValue};

/// Sortable customer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Name,
    Email,
    CreatedAt,
}

const CUSTOMER_SORTS: &[SortSpec<CustomerField>] = &[
    SortSpec {
        key: "nameAsc",
        label: "Name (A-Z)",
        field: Some(CustomerField::Name),
        direction: SortDirection::Asc,
    },
    SortSpec {
        key: "nameDesc",
        label: "Name (Z-A)",
        field: Some(CustomerField::Name),
        direction: SortDirection::Desc,
    },
    SortSpec {
        key: "emailAsc",
        label: "Email (A-Z)",
        field: Some(CustomerField::Email),
        direction: SortDirection::Asc,
    },
    SortSpec {
        key: "emailDesc",
        label: "Email (Z-A)",
        field: Some(CustomerField::Email),
        direction: SortDirection::Desc,
    },
    SortSpec {
        key: "newest",
        label: "Newest First",
        field: Some(CustomerField::CreatedAt),
        direction: SortDirection::Desc,
    },
    SortSpec {
        key: "oldest",
        label: "Oldest First",
        field: Some(CustomerField::CreatedAt),
        direction: SortDirection::Asc,
    },
];

impl Listable for Customer {
    type Field = CustomerField;

    fn sort_specs() -> &'static [SortSpec<CustomerField>] {
        CUSTOMER_SORTS
    }

    fn sort_value(&self, field: CustomerField) -> Option<SortValue<'_>> {
        match field {
            CustomerField::Name => Some(SortValue::Text(&self.name)),
            CustomerField::Email => Some(SortValue::Text(&self.email)),
            CustomerField::CreatedAt => Some(SortValue::Instant(self.created_at)),
        }
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut haystacks = vec![self.name.as_str(), self.email.as_str()];
        if let Some(phone) = &self.phone {
            haystacks.push(phone);
        }
        if let Some(address) = &self.address {
            haystacks.push(address);
        }
        haystacks
    }
}

/// Sortable invoice fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceField {
    Number,
    Date,
    DueDate,
    Total,
    Status,
}

const INVOICE_SORTS: &[SortSpec<InvoiceField>] = &[
    SortSpec {
        key: "numberAsc",
        label: "Number (A-Z)",
        field: Some(InvoiceField::Number),
        direction: SortDirection::Asc,
    },
    SortSpec {
        key: "numberDesc",
        label: "Number (Z-A)",
        field: Some(InvoiceField::Number),
        direction: SortDirection::Desc,
    },
    SortSpec {
        key: "dateDesc",
        label: "Newest First",
        field: Some(InvoiceField::Date),
        direction: SortDirection::Desc,
    },
    SortSpec {
        key: "dateAsc",
        label: "Oldest First",
        field: Some(InvoiceField::Date),
        direction: SortDirection::Asc,
    },
    SortSpec {
        key: "dueDateAsc",
        label: "Due Date (Ascending)",
        field: Some(InvoiceField::DueDate),
        direction: SortDirection::Asc,
    },
    SortSpec {
        key: "dueDateDesc",
        label: "Due Date (Descending)",
        field: Some(InvoiceField::DueDate),
        direction: SortDirection::Desc,
    },
    SortSpec {
        key: "totalDesc",
        label: "Total (High to Low)",
        field: Some(InvoiceField::Total),
        direction: SortDirection::Desc,
    },
    SortSpec {
        key: "totalAsc",
        label: "Total (Low to High)",
        field: Some(InvoiceField::Total),
        direction: SortDirection::Asc,
    },
    SortSpec {
        key: "statusAsc",
        label: "Status (A-Z)",
        field: Some(InvoiceField::Status),
        direction: SortDirection::Asc,
    },
    SortSpec {
        key: "statusDesc",
        label: "Status (Z-A)",
        field: Some(InvoiceField::Status),
        direction: SortDirection::Desc,
    },
];

impl Listable for Invoice {
    type Field = InvoiceField;

    fn sort_specs() -> &'static [SortSpec<InvoiceField>] {
        INVOICE_SORTS
    }

    fn sort_value(&self, field: InvoiceField) -> Option<SortValue<'_>> {
        match field {
            InvoiceField::Number => Some(SortValue::Text(&self.number)),
            InvoiceField::Date => Some(SortValue::Instant(self.date)),
            InvoiceField::DueDate => Some(SortValue::Instant(self.due_date)),
            InvoiceField::Total => Some(SortValue::Number(self.total)),
            InvoiceField::Status => Some(SortValue::Text(self.status.as_str())),
        }
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut haystacks = vec![
            self.number.as_str(),
            self.customer.name.as_str(),
            self.status.as_str(),
        ];
        if let Some(notes) = &self.notes {
            haystacks.push(notes);
        }
        haystacks
    }
}

/// Sortable quotation fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotationField {
    Number,
    Date,
    ValidUntil,
    Total,
    Status,
}

const QUOTATION_SORTS: &[SortSpec<QuotationField>] = &[
    SortSpec {
        key: "numberAsc",
        label: "Number (A-Z)",
        field: Some(QuotationField::Number),
        direction: SortDirection::Asc,
    },
    SortSpec {
        key: "numberDesc",
        label: "Number (Z-A)",
        field: Some(QuotationField::Number),
        direction: SortDirection::Desc,
    },
    SortSpec {
        key: "dateDesc",
        label: "Newest First",
        field: Some(QuotationField::Date),
        direction: SortDirection::Desc,
    },
    SortSpec {
        key: "dateAsc",
        label: "Oldest First",
        field: Some(QuotationField::Date),
        direction: SortDirection::Asc,
    },
    SortSpec {
        key: "validUntilAsc",
        label: "Valid Until (Ascending)",
        field: Some(QuotationField::ValidUntil),
        direction: SortDirection::Asc,
    },
    SortSpec {
        key: "validUntilDesc",
        label: "Valid Until (Descending)",
        field: Some(QuotationField::ValidUntil),
        direction: SortDirection::Desc,
    },
    SortSpec {
        key: "totalDesc",
        label: "Total (High to Low)",
        field: Some(QuotationField::Total),
        direction: SortDirection::Desc,
    },
    SortSpec {
        key: "totalAsc",
        label: "Total (Low to High)",
        field: Some(QuotationField::Total),
        direction: SortDirection::Asc,
    },
    SortSpec {
        key: "statusAsc",
        label: "Status (A-Z)",
        field: Some(QuotationField::Status),
        direction: SortDirection::Asc,
    },
    SortSpec {
        key: "statusDesc",
        label: "Status (Z-A)",
        field: Some(QuotationField::Status),
        direction: SortDirection::Desc,
    },
];

impl Listable for Quotation {
    type Field = QuotationField;

    fn sort_specs() -> &'static [SortSpec<QuotationField>] {
        QUOTATION_SORTS
    }

    fn sort_value(&self, field: QuotationField) -> Option<SortValue<'_>> {
        match field {
            QuotationField::Number => Some(SortValue::Text(&self.number)),
            QuotationField::Date => Some(SortValue::Instant(self.date)),
            QuotationField::ValidUntil => Some(SortValue::Instant(self.valid_until)),
            QuotationField::Total => Some(SortValue::Number(self.total)),
            QuotationField::Status => Some(SortValue::Text(self.status.as_str())),
        }
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut haystacks = vec![
            self.number.as_str(),
            self.customer.name.as_str(),
            self.status.as_str(),
        ];
        if let Some(notes) = &self.notes {
            haystacks.push(notes);
        }
        haystacks
    }
}
