//! Shared join and aggregation plumbing for the report functions.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::AddAssign;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::{Order, OrderLine, Pizza, PizzaType};
use crate::reports::error::{ReportError, ReportResult};

/// Round a monetary value to 2 decimal places, half away from zero.
pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Resolve an order line's pizza through the catalog index.
pub(crate) fn lookup_pizza<'a>(
    line: &OrderLine,
    pizzas: &HashMap<&str, &'a Pizza>,
) -> ReportResult<&'a Pizza> {
    pizzas
        .get(line.pizza_id.as_str())
        .copied()
        .ok_or_else(|| ReportError::UnknownPizza {
            order_line: line.id,
            pizza_id: line.pizza_id.clone(),
        })
}

/// Resolve a pizza's type through the catalog index.
pub(crate) fn lookup_type<'a>(
    pizza: &Pizza,
    types: &HashMap<&str, &'a PizzaType>,
) -> ReportResult<&'a PizzaType> {
    types
        .get(pizza.type_id.as_str())
        .copied()
        .ok_or_else(|| ReportError::UnknownPizzaType {
            pizza_id: pizza.id.clone(),
            type_id: pizza.type_id.clone(),
        })
}

/// Resolve an order line's parent order.
pub(crate) fn lookup_order<'a>(
    line: &OrderLine,
    orders: &HashMap<u64, &'a Order>,
) -> ReportResult<&'a Order> {
    orders
        .get(&line.order_id)
        .copied()
        .ok_or(ReportError::UnknownOrder {
            order_line: line.id,
            order_id: line.order_id,
        })
}

/// Revenue contributed by one order line: quantity x unit price.
pub(crate) fn line_revenue(line: &OrderLine, pizza: &Pizza) -> Decimal {
    Decimal::from(line.quantity) * pizza.price
}

/// Accumulates sums per group key, preserving first-seen key order.
///
/// Every grouped report uses this so that ties in a later sort resolve
/// deterministically by input order (stable sort + first-seen grouping).
pub(crate) struct GroupedSums<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> GroupedSums<K, V>
where
    K: Eq + Hash + Clone,
    V: AddAssign + Copy + Default,
{
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, key: K, value: V) {
        let i = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.clone(), i);
                self.entries.push((key, V::default()));
                i
            }
        };
        self.entries[i].1 += value;
    }

    /// Consume the accumulator, yielding (key, sum) pairs in first-seen order.
    pub(crate) fn into_vec(self) -> Vec<(K, V)> {
        self.entries
    }
}
