//! Top-N and single-winner reports.

use rust_decimal::Decimal;

use crate::model::{Dataset, Pizza};
use crate::reports::error::ReportResult;
use crate::reports::helpers::{line_revenue, lookup_pizza, lookup_type, round_money, GroupedSums};
use crate::reports::rows::{PriciestPizza, SizeQuantity, TypeQuantity, TypeRevenue};

/// The highest-priced catalog pizza, with its type name.
///
/// Returns `None` for an empty catalog. When several pizzas share the top
/// price, the first one in catalog order wins; the report contract leaves
/// the tie-break open, so any stable choice is conformant.
pub fn highest_priced_pizza(data: &Dataset) -> ReportResult<Option<PriciestPizza>> {
    let types = data.types_by_id();

    let mut best: Option<&Pizza> = None;
    for pizza in &data.pizzas {
        if best.map_or(true, |b| pizza.price > b.price) {
            best = Some(pizza);
        }
    }

    let Some(pizza) = best else {
        return Ok(None);
    };
    let pizza_type = lookup_type(pizza, &types)?;

    Ok(Some(PriciestPizza {
        name: pizza_type.name.clone(),
        price: pizza.price,
    }))
}

/// The size with the highest total quantity ordered.
///
/// Returns `None` when there are no order lines. Ties resolve to the size
/// seen first in order-line order.
pub fn most_common_size(data: &Dataset) -> ReportResult<Option<SizeQuantity>> {
    let pizzas = data.pizzas_by_id();

    let mut by_size: GroupedSums<String, u64> = GroupedSums::new();
    for line in &data.order_lines {
        let pizza = lookup_pizza(line, &pizzas)?;
        by_size.add(pizza.size.clone(), u64::from(line.quantity));
    }

    let mut rows = by_size.into_vec();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(rows
        .into_iter()
        .next()
        .map(|(size, quantity)| SizeQuantity { size, quantity }))
}

/// Pizza types ranked by total quantity ordered, descending, truncated to
/// `limit` (the standard report uses 5).
pub fn top_types_by_quantity(data: &Dataset, limit: usize) -> ReportResult<Vec<TypeQuantity>> {
    let pizzas = data.pizzas_by_id();
    let types = data.types_by_id();

    let mut by_type: GroupedSums<String, u64> = GroupedSums::new();
    for line in &data.order_lines {
        let pizza = lookup_pizza(line, &pizzas)?;
        let pizza_type = lookup_type(pizza, &types)?;
        by_type.add(pizza_type.name.clone(), u64::from(line.quantity));
    }

    let mut rows = by_type.into_vec();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.truncate(limit);

    Ok(rows
        .into_iter()
        .map(|(name, quantity)| TypeQuantity { name, quantity })
        .collect())
}

/// Pizza types ranked by total revenue, descending, truncated to `limit`
/// (the standard report uses 3). Revenues are rounded to 2 decimal places
/// after aggregation.
pub fn top_types_by_revenue(data: &Dataset, limit: usize) -> ReportResult<Vec<TypeRevenue>> {
    let pizzas = data.pizzas_by_id();
    let types = data.types_by_id();

    let mut by_type: GroupedSums<String, Decimal> = GroupedSums::new();
    for line in &data.order_lines {
        let pizza = lookup_pizza(line, &pizzas)?;
        let pizza_type = lookup_type(pizza, &types)?;
        by_type.add(pizza_type.name.clone(), line_revenue(line, pizza));
    }

    let mut rows = by_type.into_vec();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.truncate(limit);

    Ok(rows
        .into_iter()
        .map(|(name, revenue)| TypeRevenue {
            name,
            revenue: round_money(revenue),
        })
        .collect())
}
