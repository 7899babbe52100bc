//! Per-category breakdowns and in-category ranking.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::model::Dataset;
use crate::reports::error::ReportResult;
use crate::reports::helpers::{line_revenue, lookup_pizza, lookup_type, round_money, GroupedSums};
use crate::reports::rows::{CategoryQuantity, CategoryShare, CategoryTypeCount, RankedTypeRevenue};

/// Total quantity ordered per category, descending.
pub fn quantity_by_category(data: &Dataset) -> ReportResult<Vec<CategoryQuantity>> {
    let pizzas = data.pizzas_by_id();
    let types = data.types_by_id();

    let mut by_category: GroupedSums<String, u64> = GroupedSums::new();
    for line in &data.order_lines {
        let pizza = lookup_pizza(line, &pizzas)?;
        let pizza_type = lookup_type(pizza, &types)?;
        by_category.add(pizza_type.category.clone(), u64::from(line.quantity));
    }

    let mut rows = by_category.into_vec();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(rows
        .into_iter()
        .map(|(category, quantity)| CategoryQuantity { category, quantity })
        .collect())
}

/// Number of distinct pizza type names per category.
///
/// Reads the catalog only, so it needs no joins and cannot fail. Categories
/// appear in first-seen catalog order; the report contract imposes none.
pub fn type_count_by_category(data: &Dataset) -> Vec<CategoryTypeCount> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut by_category: GroupedSums<String, u64> = GroupedSums::new();

    for pizza_type in &data.pizza_types {
        if seen.insert((pizza_type.category.as_str(), pizza_type.name.as_str())) {
            by_category.add(pizza_type.category.clone(), 1);
        }
    }

    by_category
        .into_vec()
        .into_iter()
        .map(|(category, types)| CategoryTypeCount { category, types })
        .collect()
}

/// Each category's percentage of total revenue, rounded to 2 decimal
/// places, descending.
///
/// When total revenue is zero (all prices zero, or no order lines at all)
/// every present category reports 0.00 instead of faulting on the division.
pub fn revenue_share_by_category(data: &Dataset) -> ReportResult<Vec<CategoryShare>> {
    let pizzas = data.pizzas_by_id();
    let types = data.types_by_id();

    let mut by_category: GroupedSums<String, Decimal> = GroupedSums::new();
    for line in &data.order_lines {
        let pizza = lookup_pizza(line, &pizzas)?;
        let pizza_type = lookup_type(pizza, &types)?;
        by_category.add(pizza_type.category.clone(), line_revenue(line, pizza));
    }

    let mut rows = by_category.into_vec();
    // Sorting on raw revenue rather than the rounded percentage keeps
    // near-ties ordered the same way the revenue itself would be.
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    let total: Decimal = rows.iter().map(|&(_, revenue)| revenue).sum();

    Ok(rows
        .into_iter()
        .map(|(category, revenue)| {
            let pct = if total.is_zero() {
                Decimal::ZERO
            } else {
                revenue / total * Decimal::ONE_HUNDRED
            };
            CategoryShare {
                category,
                revenue_pct: round_money(pct),
            }
        })
        .collect())
}

/// The top `limit` pizza types per category by revenue (the standard report
/// uses 3), with competition ranks.
///
/// Within a category, types sort descending by revenue; equal revenues
/// share a rank and the next distinct revenue skips the tied positions
/// (1, 1, 3). Rows with rank above `limit` are dropped. Categories appear
/// in first-seen order.
pub fn top_types_per_category(
    data: &Dataset,
    limit: usize,
) -> ReportResult<Vec<RankedTypeRevenue>> {
    let pizzas = data.pizzas_by_id();
    let types = data.types_by_id();

    let mut by_type: GroupedSums<(String, String), Decimal> = GroupedSums::new();
    for line in &data.order_lines {
        let pizza = lookup_pizza(line, &pizzas)?;
        let pizza_type = lookup_type(pizza, &types)?;
        by_type.add(
            (pizza_type.category.clone(), pizza_type.name.clone()),
            line_revenue(line, pizza),
        );
    }

    // category -> [(name, revenue)] in first-seen order on both levels
    let mut category_order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<(String, Decimal)>> = HashMap::new();
    for ((category, name), revenue) in by_type.into_vec() {
        if !groups.contains_key(&category) {
            category_order.push(category.clone());
        }
        groups
            .entry(category)
            .or_default()
            .push((name, revenue));
    }

    let mut out = Vec::new();
    for category in category_order {
        let mut group = groups.remove(&category).unwrap_or_default();
        group.sort_by(|a, b| b.1.cmp(&a.1));

        let mut rank = 0u32;
        let mut prev: Option<Decimal> = None;
        for (position, (name, revenue)) in group.into_iter().enumerate() {
            if prev != Some(revenue) {
                rank = position as u32 + 1;
                prev = Some(revenue);
            }
            if rank as usize > limit {
                break;
            }
            out.push(RankedTypeRevenue {
                category: category.clone(),
                name,
                revenue: round_money(revenue),
                rank,
            });
        }
    }

    Ok(out)
}
