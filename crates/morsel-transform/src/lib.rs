//! Sales row transformation.
//!
//! This crate turns reconciled input tables into output rows:
//!
//! - **normalization**: product matching and tolerant numeric parsing
//! - **rows**: filter to the target product and derive `sales`
//! - **frame**: the combined output table as a Polars DataFrame
//! - **aggregate**: ordered concatenation of per-file results

pub mod aggregate;
pub mod error;
pub mod frame;
pub mod normalization;
pub mod rows;

pub use aggregate::Aggregator;
pub use error::{Result, TransformError};
pub use frame::SalesFrame;
pub use normalization::{clean_numeric, is_target_product, parse_quantity, parse_tolerant_f64};
pub use rows::RowTransformer;
