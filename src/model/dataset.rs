// src/model/dataset.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Order, OrderLine, Pizza, PizzaType};

/// The four entity collections every report reads.
///
/// Populated in bulk by an external loader before any report runs; the
/// reporting system performs no writes. Reports take the dataset by shared
/// reference, so callers may run them in any order (or in parallel) without
/// coordination.
///
/// Referential integrity (order lines pointing at existing orders and
/// pizzas, pizzas pointing at existing types) is the loader's contract and
/// is not validated here; a report that hits a dangling reference surfaces
/// it as a fatal [`ReportError`](crate::reports::ReportError).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub orders: Vec<Order>,
    pub order_lines: Vec<OrderLine>,
    pub pizzas: Vec<Pizza>,
    pub pizza_types: Vec<PizzaType>,
}

impl Dataset {
    pub fn new(
        orders: Vec<Order>,
        order_lines: Vec<OrderLine>,
        pizzas: Vec<Pizza>,
        pizza_types: Vec<PizzaType>,
    ) -> Self {
        Self {
            orders,
            order_lines,
            pizzas,
            pizza_types,
        }
    }

    /// Deserialize a dataset from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the dataset to JSON.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Catalog lookup: pizza id -> pizza.
    ///
    /// Built per call; reports that join through the catalog build it once
    /// up front rather than scanning the catalog per order line.
    pub fn pizzas_by_id(&self) -> HashMap<&str, &Pizza> {
        self.pizzas.iter().map(|p| (p.id.as_str(), p)).collect()
    }

    /// Catalog lookup: pizza type id -> pizza type.
    pub fn types_by_id(&self) -> HashMap<&str, &PizzaType> {
        self.pizza_types
            .iter()
            .map(|t| (t.id.as_str(), t))
            .collect()
    }

    /// Order lookup: order id -> order.
    pub fn orders_by_id(&self) -> HashMap<u64, &Order> {
        self.orders.iter().map(|o| (o.id, o)).collect()
    }
}
