// src/model/order.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single customer purchase event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    /// Calendar date the order was placed.
    pub date: NaiveDate,
    /// Time-of-day the order was placed.
    pub time: NaiveTime,
}

/// One line item within an order.
///
/// Many lines per order; each references exactly one catalog pizza.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: u64,
    /// The order this line belongs to.
    pub order_id: u64,
    /// Catalog key of the pizza ordered.
    pub pizza_id: String,
    /// Number of pizzas on this line (always >= 1 in loader-validated data).
    pub quantity: u32,
}
