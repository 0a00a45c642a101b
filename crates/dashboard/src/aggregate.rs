use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use ledgerly_billing::{Invoice, InvoiceStatus, Quotation};
use ledgerly_parties::Customer;

/// How many customers the revenue leaderboard keeps.
pub const TOP_CUSTOMER_LIMIT: usize = 5;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const AGING_RANGES: [&str; 5] = ["Current", "1-30 Days", "31-60 Days", "61-90 Days", "90+ Days"];

const SECONDS_PER_DAY: i64 = 86_400;

/// Headline numbers across all three collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_invoices: usize,
    pub total_quotations: usize,
    pub total_customers: usize,
    pub total_revenue: f64,
    /// Σ invoice.balance; overpayments make this smaller, not clamped.
    pub outstanding_balance: f64,
    pub average_invoice_value: f64,
}

/// One point of the trailing-6-month revenue series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueMonth {
    pub month: String,
    pub revenue: f64,
}

/// One bar of the status histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: InvoiceStatus,
    pub count: u64,
}

/// One row of the top-customers leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRevenue {
    pub customer_name: String,
    pub total_revenue: f64,
}

/// One point of the invoice-vs-quotation comparison series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyActivity {
    pub month: String,
    pub invoice_count: u64,
    pub quotation_count: u64,
}

/// One band of the aging report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgingBucket {
    pub range: String,
    pub amount: f64,
}

/// All six dashboard views over one data snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub stats: SummaryStats,
    pub revenue_by_month: Vec<RevenueMonth>,
    pub status_histogram: Vec<StatusCount>,
    pub top_customers: Vec<CustomerRevenue>,
    pub monthly_comparison: Vec<MonthlyActivity>,
    pub aging_buckets: Vec<AgingBucket>,
}

/// Whole calendar months between `date` and `today` (0 = same month).
///
/// Negative for dates after `today`'s month.
fn month_diff(today: DateTime<Utc>, date: DateTime<Utc>) -> i32 {
    (today.year() - date.year()) * 12 + today.month0() as i32 - date.month0() as i32
}

/// Labels of the 6 calendar months ending at `today`'s month, oldest first.
fn trailing_month_labels(today: DateTime<Utc>) -> [String; 6] {
    core::array::from_fn(|idx| {
        let month = (today.month0() as i32 - 5 + idx as i32).rem_euclid(12);
        MONTH_LABELS[month as usize].to_string()
    })
}

/// Bucket index for the trailing-6-month window, `None` outside it.
///
/// Out-of-window dates are excluded entirely, never clamped to an edge
/// bucket.
fn month_bucket(today: DateTime<Utc>, date: DateTime<Utc>) -> Option<usize> {
    let diff = month_diff(today, date);
    if (0..6).contains(&diff) {
        Some((5 - diff) as usize)
    } else {
        None
    }
}

/// Headline statistics for the dashboard cards.
pub fn summary_stats(
    invoices: &[Invoice],
    quotations: &[Quotation],
    customers: &[Customer],
) -> SummaryStats {
    let total_revenue: f64 = invoices.iter().map(|inv| inv.total).sum();
    let outstanding_balance: f64 = invoices.iter().map(|inv| inv.balance).sum();
    let average_invoice_value = if invoices.is_empty() {
        0.0
    } else {
        total_revenue / invoices.len() as f64
    };

    SummaryStats {
        total_invoices: invoices.len(),
        total_quotations: quotations.len(),
        total_customers: customers.len(),
        total_revenue,
        outstanding_balance,
        average_invoice_value,
    }
}

/// Invoice revenue bucketed into the 6 calendar months ending at `today`,
/// oldest first.
pub fn revenue_by_month(invoices: &[Invoice], today: DateTime<Utc>) -> Vec<RevenueMonth> {
    let mut revenue = [0.0f64; 6];
    for invoice in invoices {
        if let Some(bucket) = month_bucket(today, invoice.date) {
            revenue[bucket] += invoice.total;
        }
    }

    trailing_month_labels(today)
        .into_iter()
        .zip(revenue)
        .map(|(month, revenue)| RevenueMonth { month, revenue })
        .collect()
}

/// Count of invoices per status, in first-seen order.
///
/// Statuses with zero occurrences do not appear. A linear scan keeps the
/// order deterministic; there are at most five distinct statuses.
pub fn status_histogram(invoices: &[Invoice]) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = Vec::new();
    for invoice in invoices {
        match counts.iter_mut().find(|entry| entry.status == invoice.status) {
            Some(entry) => entry.count += 1,
            None => counts.push(StatusCount {
                status: invoice.status,
                count: 1,
            }),
        }
    }
    counts
}

/// Customers ranked by summed invoice totals, descending, truncated to
/// `limit`.
///
/// Grouping is by display name; ties keep first-seen group order (the sort
/// is stable).
pub fn top_customers_by_revenue(invoices: &[Invoice], limit: usize) -> Vec<CustomerRevenue> {
    let mut groups: Vec<CustomerRevenue> = Vec::new();
    for invoice in invoices {
        match groups
            .iter_mut()
            .find(|group| group.customer_name == invoice.customer.name)
        {
            Some(group) => group.total_revenue += invoice.total,
            None => groups.push(CustomerRevenue {
                customer_name: invoice.customer.name.clone(),
                total_revenue: invoice.total,
            }),
        }
    }

    groups.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    groups.truncate(limit);
    groups
}

/// Invoice and quotation counts over the same trailing-6-month window,
/// bucketed independently and merged by month index.
pub fn monthly_comparison(
    invoices: &[Invoice],
    quotations: &[Quotation],
    today: DateTime<Utc>,
) -> Vec<MonthlyActivity> {
    let mut invoice_counts = [0u64; 6];
    let mut quotation_counts = [0u64; 6];

    for invoice in invoices {
        if let Some(bucket) = month_bucket(today, invoice.date) {
            invoice_counts[bucket] += 1;
        }
    }
    for quotation in quotations {
        if let Some(bucket) = month_bucket(today, quotation.date) {
            quotation_counts[bucket] += 1;
        }
    }

    trailing_month_labels(today)
        .into_iter()
        .zip(invoice_counts.into_iter().zip(quotation_counts))
        .map(|(month, (invoice_count, quotation_count))| MonthlyActivity {
            month,
            invoice_count,
            quotation_count,
        })
        .collect()
}

/// Outstanding balance grouped into fixed aging bands.
///
/// Only invoices still owing (`balance > 0`) contribute; paid and overpaid
/// invoices are excluded entirely. All five bands always appear, zero or
/// not. Days past due is the floor of the due-date offset, so an invoice
/// due later today is still "Current".
pub fn aging_buckets(invoices: &[Invoice], today: DateTime<Utc>) -> Vec<AgingBucket> {
    let mut amounts = [0.0f64; 5];

    for invoice in invoices {
        if !invoice.is_outstanding() {
            continue;
        }

        let days_past_due = today
            .signed_duration_since(invoice.due_date)
            .num_seconds()
            .div_euclid(SECONDS_PER_DAY);

        let band = if days_past_due <= 0 {
            0
        } else if days_past_due <= 30 {
            1
        } else if days_past_due <= 60 {
            2
        } else if days_past_due <= 90 {
            3
        } else {
            4
        };
        amounts[band] += invoice.balance;
    }

    AGING_RANGES
        .iter()
        .zip(amounts)
        .map(|(range, amount)| AgingBucket {
            range: (*range).to_string(),
            amount,
        })
        .collect()
}

/// Build every dashboard view over one snapshot.
pub fn build(
    invoices: &[Invoice],
    quotations: &[Quotation],
    customers: &[Customer],
    today: DateTime<Utc>,
) -> Dashboard {
    tracing::debug!(
        invoices = invoices.len(),
        quotations = quotations.len(),
        customers = customers.len(),
        "building dashboard snapshot"
    );

    Dashboard {
        stats: summary_stats(invoices, quotations, customers),
        revenue_by_month: revenue_by_month(invoices, today),
        status_histogram: status_histogram(invoices),
        top_customers: top_customers_by_revenue(invoices, TOP_CUSTOMER_LIMIT),
        monthly_comparison: monthly_comparison(invoices, quotations, today),
        aging_buckets: aging_buckets(invoices, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use ledgerly_billing::{InvoiceId, LineItem, QuotationId, QuotationStatus};
    use ledgerly_core::RecordId;
    use ledgerly_parties::CustomerId;

    fn test_customer(name: &str) -> Customer {
        Customer {
            id: CustomerId::new(RecordId::new()),
            name: name.to_string(),
            email: "billing@example.test".to_string(),
            phone: None,
            address: None,
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn test_invoice(
        customer_name: &str,
        date: DateTime<Utc>,
        total: f64,
        balance: f64,
        status: InvoiceStatus,
    ) -> Invoice {
        let customer = test_customer(customer_name);
        Invoice {
            id: InvoiceId::new(RecordId::new()),
            number: "INV-0001".to_string(),
            date,
            due_date: date + Duration::days(30),
            customer_id: customer.id,
            customer,
            quotation_id: None,
            items: vec![LineItem::blank()],
            tax_rate: 0.2,
            subtotal: total,
            tax_amount: 0.0,
            total,
            amount_paid: total - balance,
            balance,
            status,
            notes: None,
        }
    }

    fn test_quotation(date: DateTime<Utc>) -> Quotation {
        let customer = test_customer("Acme Ltd");
        Quotation {
            id: QuotationId::new(RecordId::new()),
            number: "Q-0001".to_string(),
            date,
            valid_until: date + Duration::days(30),
            customer_id: customer.id,
            customer,
            items: vec![LineItem::blank()],
            tax_rate: 0.2,
            subtotal: 0.0,
            tax_amount: 0.0,
            total: 0.0,
            status: QuotationStatus::Sent,
            notes: None,
        }
    }

    fn june_15() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn summary_stats_totals_and_average() {
        let today = june_15();
        let invoices = vec![
            test_invoice("A", today, 1000.0, 400.0, InvoiceStatus::Pending),
            test_invoice("B", today, 2000.0, 0.0, InvoiceStatus::Paid),
        ];
        let quotations = vec![test_quotation(today)];
        let customers = vec![test_customer("A"), test_customer("B"), test_customer("C")];

        let stats = summary_stats(&invoices, &quotations, &customers);
        assert_eq!(stats.total_invoices, 2);
        assert_eq!(stats.total_quotations, 1);
        assert_eq!(stats.total_customers, 3);
        assert_eq!(stats.total_revenue, 3000.0);
        assert_eq!(stats.outstanding_balance, 400.0);
        assert_eq!(stats.average_invoice_value, 1500.0);
    }

    #[test]
    fn summary_stats_guard_empty_invoices() {
        let stats = summary_stats(&[], &[], &[]);
        assert_eq!(stats.average_invoice_value, 0.0);
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.outstanding_balance, 0.0);
    }

    #[test]
    fn overpayment_reduces_outstanding_sum() {
        let today = june_15();
        let invoices = vec![
            test_invoice("A", today, 100.0, 100.0, InvoiceStatus::Pending),
            // Overpaid by 30: negative balance flows into the sum unclamped.
            test_invoice("B", today, 100.0, -30.0, InvoiceStatus::Paid),
        ];
        let stats = summary_stats(&invoices, &[], &[]);
        assert_eq!(stats.outstanding_balance, 70.0);
    }

    #[test]
    fn revenue_lands_in_expected_bucket() {
        // Today is June; an April invoice is two months back, bucket 3.
        let today = june_15();
        let april = Utc.with_ymd_and_hms(2024, 4, 10, 0, 0, 0).unwrap();
        let invoices = vec![test_invoice("A", april, 750.0, 0.0, InvoiceStatus::Paid)];

        let series = revenue_by_month(&invoices, today);
        assert_eq!(series.len(), 6);
        let labels: Vec<&str> = series.iter().map(|point| point.month.as_str()).collect();
        assert_eq!(labels, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(series[3].revenue, 750.0);
        let rest: f64 = series
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != 3)
            .map(|(_, point)| point.revenue)
            .sum();
        assert_eq!(rest, 0.0);
    }

    #[test]
    fn revenue_excludes_out_of_window_dates() {
        let today = june_15();
        let invoices = vec![
            // Seven months back: outside the window, dropped entirely.
            test_invoice(
                "A",
                Utc.with_ymd_and_hms(2023, 11, 1, 0, 0, 0).unwrap(),
                500.0,
                0.0,
                InvoiceStatus::Paid,
            ),
            // Next month: negative month diff, also dropped.
            test_invoice(
                "B",
                Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap(),
                500.0,
                0.0,
                InvoiceStatus::Paid,
            ),
        ];
        let series = revenue_by_month(&invoices, today);
        let total: f64 = series.iter().map(|point| point.revenue).sum();
        assert_eq!(total, 0.0);
    }

    #[test]
    fn revenue_window_wraps_year_boundary() {
        let today = Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap();
        let november = Utc.with_ymd_and_hms(2024, 11, 5, 0, 0, 0).unwrap();
        let invoices = vec![test_invoice("A", november, 320.0, 0.0, InvoiceStatus::Paid)];

        let series = revenue_by_month(&invoices, today);
        let labels: Vec<&str> = series.iter().map(|point| point.month.as_str()).collect();
        assert_eq!(labels, vec!["Aug", "Sep", "Oct", "Nov", "Dec", "Jan"]);
        assert_eq!(series[3].revenue, 320.0);
    }

    #[test]
    fn histogram_counts_in_first_seen_order() {
        let today = june_15();
        let invoices = vec![
            test_invoice("A", today, 1.0, 0.0, InvoiceStatus::Pending),
            test_invoice("B", today, 1.0, 0.0, InvoiceStatus::Paid),
            test_invoice("C", today, 1.0, 0.0, InvoiceStatus::Pending),
        ];
        let histogram = status_histogram(&invoices);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram[0].status, InvoiceStatus::Pending);
        assert_eq!(histogram[0].count, 2);
        assert_eq!(histogram[1].status, InvoiceStatus::Paid);
        assert_eq!(histogram[1].count, 1);
    }

    #[test]
    fn histogram_of_empty_input_is_empty() {
        assert!(status_histogram(&[]).is_empty());
    }

    #[test]
    fn top_customers_groups_and_ranks() {
        let today = june_15();
        let invoices = vec![
            test_invoice("A", today, 500.0, 0.0, InvoiceStatus::Paid),
            test_invoice("B", today, 1500.0, 0.0, InvoiceStatus::Paid),
            test_invoice("A", today, 700.0, 0.0, InvoiceStatus::Paid),
        ];
        let top = top_customers_by_revenue(&invoices, TOP_CUSTOMER_LIMIT);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].customer_name, "B");
        assert_eq!(top[0].total_revenue, 1500.0);
        assert_eq!(top[1].customer_name, "A");
        assert_eq!(top[1].total_revenue, 1200.0);
    }

    #[test]
    fn top_customers_truncates_and_breaks_ties_by_first_seen() {
        let today = june_15();
        let names = ["A", "B", "C", "D", "E", "F"];
        let invoices: Vec<Invoice> = names
            .iter()
            .map(|name| test_invoice(name, today, 100.0, 0.0, InvoiceStatus::Paid))
            .collect();

        let top = top_customers_by_revenue(&invoices, 5);
        assert_eq!(top.len(), 5);
        let ranked: Vec<&str> = top.iter().map(|row| row.customer_name.as_str()).collect();
        assert_eq!(ranked, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn comparison_counts_both_series() {
        let today = june_15();
        let april = Utc.with_ymd_and_hms(2024, 4, 3, 0, 0, 0).unwrap();
        let may = Utc.with_ymd_and_hms(2024, 5, 3, 0, 0, 0).unwrap();
        let invoices = vec![
            test_invoice("A", april, 1.0, 0.0, InvoiceStatus::Paid),
            test_invoice("B", may, 1.0, 0.0, InvoiceStatus::Paid),
        ];
        let quotations = vec![test_quotation(may), test_quotation(may)];

        let series = monthly_comparison(&invoices, &quotations, today);
        assert_eq!(series.len(), 6);
        assert_eq!(series[3].invoice_count, 1);
        assert_eq!(series[4].invoice_count, 1);
        assert_eq!(series[4].quotation_count, 2);
        assert_eq!(series[5].invoice_count, 0);
        assert_eq!(series[5].quotation_count, 0);
    }

    #[test]
    fn aging_assigns_45_days_past_due_to_second_band() {
        let today = june_15();
        let mut invoice = test_invoice("A", today, 100.0, 100.0, InvoiceStatus::Overdue);
        invoice.due_date = today - Duration::days(45);

        let buckets = aging_buckets(&[invoice], today);
        let ranges: Vec<&str> = buckets.iter().map(|b| b.range.as_str()).collect();
        assert_eq!(
            ranges,
            vec!["Current", "1-30 Days", "31-60 Days", "61-90 Days", "90+ Days"]
        );
        assert_eq!(buckets[2].amount, 100.0);
        for (idx, bucket) in buckets.iter().enumerate() {
            if idx != 2 {
                assert_eq!(bucket.amount, 0.0);
            }
        }
    }

    #[test]
    fn aging_band_edges() {
        let today = june_15();
        let cases = [
            // Due later today: floor of a negative offset, still Current.
            (today + Duration::hours(6), 0),
            (today - Duration::days(1), 1),
            (today - Duration::days(30), 1),
            (today - Duration::days(31), 2),
            (today - Duration::days(60), 2),
            (today - Duration::days(90), 3),
            (today - Duration::days(91), 4),
        ];
        for (due_date, expected_band) in cases {
            let mut invoice = test_invoice("A", today, 50.0, 50.0, InvoiceStatus::Overdue);
            invoice.due_date = due_date;
            let buckets = aging_buckets(&[invoice], today);
            for (idx, bucket) in buckets.iter().enumerate() {
                let expected = if idx == expected_band { 50.0 } else { 0.0 };
                assert_eq!(
                    bucket.amount, expected,
                    "due {due_date} should land in band {expected_band}"
                );
            }
        }
    }

    #[test]
    fn aging_skips_settled_and_overpaid_invoices() {
        let today = june_15();
        let mut paid = test_invoice("A", today, 100.0, 0.0, InvoiceStatus::Paid);
        paid.due_date = today - Duration::days(200);
        let mut overpaid = test_invoice("B", today, 100.0, -40.0, InvoiceStatus::Paid);
        overpaid.due_date = today - Duration::days(200);

        let buckets = aging_buckets(&[paid, overpaid], today);
        let total: f64 = buckets.iter().map(|b| b.amount).sum();
        assert_eq!(total, 0.0);
        assert_eq!(buckets.len(), 5);
    }

    #[test]
    fn build_bundles_all_views() {
        let today = june_15();
        let invoices = vec![test_invoice("A", today, 100.0, 100.0, InvoiceStatus::Pending)];
        let quotations = vec![test_quotation(today)];
        let customers = vec![test_customer("A")];

        let dashboard = build(&invoices, &quotations, &customers, today);
        assert_eq!(dashboard.stats, summary_stats(&invoices, &quotations, &customers));
        assert_eq!(dashboard.revenue_by_month, revenue_by_month(&invoices, today));
        assert_eq!(dashboard.status_histogram, status_histogram(&invoices));
        assert_eq!(
            dashboard.top_customers,
            top_customers_by_revenue(&invoices, TOP_CUSTOMER_LIMIT)
        );
        assert_eq!(
            dashboard.monthly_comparison,
            monthly_comparison(&invoices, &quotations, today)
        );
        assert_eq!(dashboard.aging_buckets, aging_buckets(&invoices, today));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        // Integer balances keep sums exact in any accumulation order.
        fn invoices_with_integer_balances() -> impl Strategy<Value = Vec<Invoice>> {
            proptest::collection::vec((-500i32..2_000, 0i64..400), 0..24).prop_map(|rows| {
                rows.into_iter()
                    .map(|(balance, days_overdue)| {
                        let today = june_15();
                        let mut invoice = test_invoice(
                            "A",
                            today,
                            f64::from(balance.max(0)),
                            f64::from(balance),
                            InvoiceStatus::Pending,
                        );
                        invoice.due_date = today - Duration::days(days_overdue);
                        invoice
                    })
                    .collect()
            })
        }

        proptest! {
            #[test]
            fn aging_conserves_positive_balance_total(invoices in invoices_with_integer_balances()) {
                let buckets = aging_buckets(&invoices, june_15());
                prop_assert_eq!(buckets.len(), 5);

                let bucketed: f64 = buckets.iter().map(|b| b.amount).sum();
                let owed: f64 = invoices
                    .iter()
                    .filter(|inv| inv.balance > 0.0)
                    .map(|inv| inv.balance)
                    .sum();
                prop_assert_eq!(bucketed, owed);
            }

            #[test]
            fn histogram_counts_sum_to_invoice_count(invoices in invoices_with_integer_balances()) {
                let histogram = status_histogram(&invoices);
                let counted: u64 = histogram.iter().map(|entry| entry.count).sum();
                prop_assert_eq!(counted as usize, invoices.len());
            }
        }
    }
}
