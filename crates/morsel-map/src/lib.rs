//! Column reconciliation.
//!
//! Maps the headers of one sales extract onto the canonical fields
//! (`product`, `quantity`, `price`, `region`) using an ordered synonym table.
//! A file that cannot resolve all four fields is rejected as a whole.

#![deny(unsafe_code)]

mod error;
mod reconcile;

pub use error::ReconcileError;
pub use reconcile::{CanonicalColumnMap, CanonicalRow, ColumnReconciler, ResolvedColumn};
