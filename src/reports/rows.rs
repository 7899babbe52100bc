// src/reports/rows.rs
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// The highest-priced catalog pizza, joined to its type name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriciestPizza {
    pub name: String,
    pub price: Decimal,
}

/// Total quantity ordered for one size label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeQuantity {
    pub size: String,
    pub quantity: u64,
}

/// Total quantity ordered for one pizza type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeQuantity {
    pub name: String,
    pub quantity: u64,
}

/// Total quantity ordered for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryQuantity {
    pub category: String,
    pub quantity: u64,
}

/// Order count for one hour of the day (0-23).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyOrders {
    pub hour: u32,
    pub orders: u64,
}

/// Number of distinct pizza types in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTypeCount {
    pub category: String,
    pub types: u64,
}

/// Total revenue for one pizza type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeRevenue {
    pub name: String,
    pub revenue: Decimal,
}

/// One category's share of total revenue, as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub revenue_pct: Decimal,
}

/// Running revenue total up to and including one order date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyCumulative {
    pub date: NaiveDate,
    pub cumulative_revenue: Decimal,
}

/// A pizza type ranked by revenue within its category.
///
/// Ranks follow competition semantics: equal revenues share a rank and the
/// next distinct revenue skips the tied positions (1, 1, 3).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTypeRevenue {
    pub category: String,
    pub name: String,
    pub revenue: Decimal,
    pub rank: u32,
}
