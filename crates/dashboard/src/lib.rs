//! Dashboard aggregation.
//!
//! Folds invoice/quotation/customer collections into the view models the
//! dashboard renders: summary statistics, a trailing-6-month revenue series,
//! a status histogram, top customers by revenue, a monthly invoice-vs-
//! quotation comparison, and aging buckets of outstanding balance.
//!
//! Every reduction is stateless and takes "today" as a parameter; nothing
//! here reads the clock or mutates its inputs.

pub mod aggregate;

pub use aggregate::{
    AgingBucket, CustomerRevenue, Dashboard, MonthlyActivity, RevenueMonth, StatusCount,
    SummaryStats, TOP_CUSTOMER_LIMIT, aging_buckets, build, monthly_comparison, revenue_by_month,
    status_histogram, summary_stats, top_customers_by_revenue,
};
