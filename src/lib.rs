//! # Pizzeria Reports
//!
//! Descriptive business reporting over a pizzeria order dataset.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Dataset (loaded externally)              │
//! │     (orders, order lines, pizza catalog, pizza types)    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [reports]
//! ┌─────────────────────────────────────────────────────────┐
//! │              Aggregate report functions                  │
//! │   (totals, rankings, category breakdowns, timelines)     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │            Result tables (serializable rows)             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Every report is a pure function over an immutable [`model::Dataset`]:
//! no shared state, no ordering requirements between reports, no writes.
//! Monetary values use exact decimal arithmetic throughout.

pub mod model;
pub mod reports;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::model::{Dataset, Order, OrderLine, Pizza, PizzaType};
    pub use crate::reports::{
        avg_pizzas_per_day, cumulative_revenue_by_date, highest_priced_pizza, most_common_size,
        orders_by_hour, quantity_by_category, revenue_share_by_category, top_types_by_quantity,
        top_types_by_revenue, top_types_per_category, total_orders, total_revenue,
        type_count_by_category,
    };
    pub use crate::reports::{
        CategoryQuantity, CategoryShare, CategoryTypeCount, DailyCumulative, HourlyOrders,
        PriciestPizza, RankedTypeRevenue, ReportError, ReportResult, SizeQuantity, TypeQuantity,
        TypeRevenue,
    };
}

// Also export at crate root for convenience
pub use model::Dataset;
pub use reports::{ReportError, ReportResult};
