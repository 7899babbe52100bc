//! Dataset-wide scalar reports.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::Dataset;
use crate::reports::error::ReportResult;
use crate::reports::helpers::{line_revenue, lookup_order, lookup_pizza, round_money, GroupedSums};

/// Total number of orders placed.
pub fn total_orders(data: &Dataset) -> u64 {
    data.orders.len() as u64
}

/// Total revenue across all order lines, rounded to 2 decimal places.
///
/// Revenue is the sum over every order line of quantity x unit price of the
/// referenced catalog pizza. An empty dataset yields zero.
pub fn total_revenue(data: &Dataset) -> ReportResult<Decimal> {
    let pizzas = data.pizzas_by_id();

    let mut total = Decimal::ZERO;
    for line in &data.order_lines {
        let pizza = lookup_pizza(line, &pizzas)?;
        total += line_revenue(line, pizza);
    }

    Ok(round_money(total))
}

/// Average number of pizzas ordered per day, rounded to the nearest whole.
///
/// Days are order dates that actually carry at least one order line; the
/// mean is the total quantity divided by the number of such days. An empty
/// dataset yields zero rather than an undefined average.
pub fn avg_pizzas_per_day(data: &Dataset) -> ReportResult<Decimal> {
    let orders = data.orders_by_id();

    let mut per_day: GroupedSums<NaiveDate, u64> = GroupedSums::new();
    for line in &data.order_lines {
        let order = lookup_order(line, &orders)?;
        per_day.add(order.date, u64::from(line.quantity));
    }

    let days = per_day.into_vec();
    if days.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let total: u64 = days.iter().map(|&(_, qty)| qty).sum();
    let mean = Decimal::from(total) / Decimal::from(days.len() as u64);

    Ok(mean.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}
