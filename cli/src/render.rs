//! Plain-text rendering of a dashboard snapshot

use sales_dashboard_core_rs::DashboardSnapshot;
use std::fmt;

/// Format a whole-unit amount with thousands separators: `1234567` -> `$1,234,567`.
pub fn format_currency(amount: i64) -> String {
    format!("${}", group_thousands(amount))
}

pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Totals, series, category mix and one page of orders, formatted for a terminal.
pub struct DashboardTable<'a> {
    snapshot: &'a DashboardSnapshot,
    page: usize,
    page_size: usize,
}

impl<'a> DashboardTable<'a> {
    pub fn new(snapshot: &'a DashboardSnapshot, page: usize, page_size: usize) -> Self {
        Self {
            snapshot,
            page,
            page_size,
        }
    }
}

impl fmt::Display for DashboardTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot;
        let totals = &snapshot.totals;

        writeln!(f, "Sales Dashboard - {} (generation {})", snapshot.timeframe, snapshot.generation)?;
        writeln!(f)?;
        writeln!(f, "  Total Revenue      {}", format_currency(totals.revenue))?;
        writeln!(f, "  Total Orders       {}", group_thousands(totals.orders))?;
        writeln!(f, "  Total Customers    {}", group_thousands(totals.customers))?;
        writeln!(f, "  Avg Order Value    {}", format_currency(totals.rounded_avg_order_value()))?;
        writeln!(f)?;

        writeln!(f, "{:<8} {:>10} {:>7} {:>10}", "Date", "Revenue", "Orders", "Customers")?;
        for day in &snapshot.series {
            writeln!(
                f,
                "{:<8} {:>10} {:>7} {:>10}",
                day.label,
                format_currency(day.revenue),
                day.orders,
                day.customers
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Sales by Category")?;
        for category in &snapshot.categories {
            writeln!(f, "  {}: {}%", category.name, category.value)?;
        }
        writeln!(f)?;

        let orders = snapshot.order_page(self.page, self.page_size);
        writeln!(
            f,
            "Recent Orders (page {} of {}, {} total)",
            orders.page + 1,
            orders.total_pages.max(1),
            orders.total_orders
        )?;
        writeln!(
            f,
            "{:<9} {:<15} {:<15} {:>8} {:<10} {}",
            "Order", "Customer", "Product", "Amount", "Status", "Date"
        )?;
        for order in orders.orders {
            writeln!(
                f,
                "{:<9} {:<15} {:<15} {:>8} {:<10} {}",
                order.id(),
                order.customer(),
                order.product(),
                format_currency(order.amount()),
                order.status(),
                order.date()
            )?;
        }
        Ok(())
    }
}

/// Render one page of the dashboard to a string.
pub fn render_table(snapshot: &DashboardSnapshot, page: usize, page_size: usize) -> String {
    DashboardTable::new(snapshot, page, page_size).to_string()
}
