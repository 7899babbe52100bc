//! The reporting query set.
//!
//! Thirteen read-only aggregate reports over a [`Dataset`](crate::model::Dataset),
//! grouped by shape:
//!
//! - [`totals`]: dataset-wide scalars (order count, revenue, per-day average)
//! - [`rankings`]: top-N lists and single-winner lookups
//! - [`categories`]: per-category breakdowns and in-category ranking
//! - [`timeline`]: time-of-day and over-time distributions
//!
//! Reports are independent and stateless; none depends on another's output
//! except through the shared base collections. Every function is pure and
//! deterministic for a given input order: grouped keys keep first-seen
//! order and descending sorts are stable, so ties never reshuffle.

pub mod categories;
pub mod error;
mod helpers;
pub mod rankings;
pub mod rows;
pub mod timeline;
pub mod totals;

pub use categories::{
    quantity_by_category, revenue_share_by_category, top_types_per_category,
    type_count_by_category,
};
pub use error::{ReportError, ReportResult};
pub use rankings::{
    highest_priced_pizza, most_common_size, top_types_by_quantity, top_types_by_revenue,
};
pub use rows::{
    CategoryQuantity, CategoryShare, CategoryTypeCount, DailyCumulative, HourlyOrders,
    PriciestPizza, RankedTypeRevenue, SizeQuantity, TypeQuantity, TypeRevenue,
};
pub use timeline::{cumulative_revenue_by_date, orders_by_hour};
pub use totals::{avg_pizzas_per_day, total_orders, total_revenue};
