//! Error types for the reporting layer.

use thiserror::Error;

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur while computing a report.
///
/// All variants are precondition violations: the loader guarantees
/// referential integrity, so a dangling reference means the dataset was
/// assembled incorrectly and the report is surfaced as failed rather than
/// silently dropping rows. Arithmetic edge cases (zero total revenue, empty
/// dataset) are defined results, never errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// An order line references a pizza absent from the catalog.
    #[error("order line {order_line} references unknown pizza '{pizza_id}'")]
    UnknownPizza { order_line: u64, pizza_id: String },

    /// A pizza references a type absent from the catalog.
    #[error("pizza '{pizza_id}' references unknown pizza type '{type_id}'")]
    UnknownPizzaType { pizza_id: String, type_id: String },

    /// An order line references an order that does not exist.
    #[error("order line {order_line} references unknown order {order_id}")]
    UnknownOrder { order_line: u64, order_id: u64 },
}
