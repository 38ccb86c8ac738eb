//! Sales frame: the combined output table backed by a Polars DataFrame.

use std::path::PathBuf;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use morsel_model::{OUTPUT_COLUMNS, SalesRecord};

use crate::error::Result;

/// Consolidated `sales,region,price` rows with their source files.
#[derive(Debug, Clone)]
pub struct SalesFrame {
    /// Columns are `OUTPUT_COLUMNS` in order.
    pub data: DataFrame,
    /// Files that contributed rows, in contribution order.
    pub source_files: Vec<PathBuf>,
}

impl SalesFrame {
    /// Build a frame from transformed records.
    pub fn from_records(records: &[SalesRecord]) -> Result<Self> {
        Ok(Self {
            data: build_sales_dataframe(records)?,
            source_files: Vec::new(),
        })
    }

    /// Returns the number of records in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

fn build_sales_dataframe(records: &[SalesRecord]) -> Result<DataFrame> {
    let [sales_name, region_name, price_name] = OUTPUT_COLUMNS;
    let sales: Vec<f64> = records.iter().map(|record| record.sales).collect();
    let regions: Vec<String> = records.iter().map(|record| record.region.clone()).collect();
    let prices: Vec<f64> = records.iter().map(|record| record.price).collect();
    let columns: Vec<Column> = vec![
        Series::new(sales_name.into(), sales).into_column(),
        Series::new(region_name.into(), regions).into_column(),
        Series::new(price_name.into(), prices).into_column(),
    ];
    Ok(DataFrame::new(columns)?)
}
