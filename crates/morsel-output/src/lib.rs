//! Output generation for consolidated sales data.
//!
//! - **CSV**: the `sales,region,price` file analysts consume
//! - **Run report**: optional JSON summary of per-file outcomes

mod csv;
mod error;
mod report;

pub use csv::write_sales_csv;
pub use error::{OutputError, Result};
pub use report::{RunReport, write_run_report};
