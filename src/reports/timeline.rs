//! Time-of-day and over-time distribution reports.

use chrono::{NaiveDate, Timelike};
use rust_decimal::Decimal;

use crate::model::Dataset;
use crate::reports::error::ReportResult;
use crate::reports::helpers::{line_revenue, lookup_order, lookup_pizza, round_money, GroupedSums};
use crate::reports::rows::{DailyCumulative, HourlyOrders};

/// Order counts per hour of the day, ascending by hour.
///
/// Only hours with at least one order appear, matching a grouped count
/// over present rows. Reads orders only, so it cannot fail.
pub fn orders_by_hour(data: &Dataset) -> Vec<HourlyOrders> {
    let mut by_hour: GroupedSums<u32, u64> = GroupedSums::new();
    for order in &data.orders {
        by_hour.add(order.time.hour(), 1);
    }

    let mut rows = by_hour.into_vec();
    rows.sort_by_key(|&(hour, _)| hour);

    rows.into_iter()
        .map(|(hour, orders)| HourlyOrders { hour, orders })
        .collect()
}

/// Running revenue total per order date, ascending by date.
///
/// Daily revenue is aggregated exactly and accumulated before rounding, so
/// the final cumulative value always equals the 2-decimal total revenue.
pub fn cumulative_revenue_by_date(data: &Dataset) -> ReportResult<Vec<DailyCumulative>> {
    let orders = data.orders_by_id();
    let pizzas = data.pizzas_by_id();

    let mut by_date: GroupedSums<NaiveDate, Decimal> = GroupedSums::new();
    for line in &data.order_lines {
        let order = lookup_order(line, &orders)?;
        let pizza = lookup_pizza(line, &pizzas)?;
        by_date.add(order.date, line_revenue(line, pizza));
    }

    let mut rows = by_date.into_vec();
    rows.sort_by_key(|&(date, _)| date);

    let mut running = Decimal::ZERO;
    Ok(rows
        .into_iter()
        .map(|(date, revenue)| {
            running += revenue;
            DailyCumulative {
                date,
                cumulative_revenue: round_money(running),
            }
        })
        .collect())
}
