// src/model/catalog.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable size-variant of a pizza type.
///
/// One [`PizzaType`] has multiple `Pizza` rows, one per size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    /// Catalog key referenced by order lines.
    pub id: String,
    /// The pizza type this variant belongs to.
    pub type_id: String,
    /// Size label (e.g., "S", "M", "L").
    pub size: String,
    /// Unit price; never negative in loader-validated data.
    pub price: Decimal,
}

/// The named, categorized pizza definition, independent of size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaType {
    pub id: String,
    /// Display name (e.g., "The Hawaiian Pizza").
    pub name: String,
    /// Coarse grouping label (e.g., "Classic", "Veggie").
    pub category: String,
}
