//! Entity types for the pizzeria order dataset.
//!
//! Four entities, all externally loaded and read-only from the reporting
//! system's point of view:
//!
//! - [`Order`]: one customer purchase event (date and time-of-day)
//! - [`OrderLine`]: one line item within an order
//! - [`Pizza`]: a priced, sized catalog entry for a pizza type
//! - [`PizzaType`]: the named, categorized pizza definition
//!
//! [`Dataset`] bundles the four collections and is the single input every
//! report function takes.

pub mod catalog;
pub mod dataset;
pub mod order;

pub use catalog::{Pizza, PizzaType};
pub use dataset::Dataset;
pub use order::{Order, OrderLine};
