//! Row filtering, price cleaning, and sales derivation.

use tracing::trace;

use morsel_ingest::RawTable;
use morsel_map::{CanonicalColumnMap, CanonicalRow};
use morsel_model::{CanonicalField, SalesRecord, TARGET_PRODUCT};

use crate::error::{Result, TransformError};
use crate::normalization::{
    is_target_product, normalize_product, parse_quantity, parse_tolerant_f64,
};

/// Turns canonical rows into [`SalesRecord`]s for one target product.
#[derive(Debug, Clone)]
pub struct RowTransformer {
    target_product: String,
}

impl Default for RowTransformer {
    fn default() -> Self {
        Self::new(TARGET_PRODUCT)
    }
}

impl RowTransformer {
    pub fn new(target_product: &str) -> Self {
        Self {
            target_product: normalize_product(target_product),
        }
    }

    pub fn target_product(&self) -> &str {
        &self.target_product
    }

    /// Transforms every row of a reconciled table.
    ///
    /// Rows for other products are dropped. For each kept row the price is
    /// cleaned with [`parse_tolerant_f64`], quantity is read with
    /// [`parse_quantity`] so its sign survives, and `sales = quantity * price`.
    /// The first unparseable value fails the whole table. An empty result means nothing matched the target.
    pub fn transform_table(
        &self,
        table: &RawTable,
        map: &CanonicalColumnMap,
    ) -> Result<Vec<SalesRecord>> {
        let mut records = Vec::new();
        for (idx, cells) in table.rows.iter().enumerate() {
            let row = map.row(cells);
            if let Some(record) = self.transform_row(idx + 1, &row)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Transforms one row; `None` when the product does not match.
    pub fn transform_row(
        &self,
        row_number: usize,
        row: &CanonicalRow<'_>,
    ) -> Result<Option<SalesRecord>> {
        if !is_target_product(row.product, &self.target_product) {
            return Ok(None);
        }
        let price = parse_field(
            row_number,
            CanonicalField::Price,
            row.price,
            parse_tolerant_f64,
        )?;
        let quantity = parse_field(
            row_number,
            CanonicalField::Quantity,
            row.quantity,
            parse_quantity,
        )?;
        let record = SalesRecord {
            sales: quantity * price,
            region: row.region.to_string(),
            price,
        };
        trace!(
            row = row_number,
            sales = record.sales,
            price = record.price,
            "kept row"
        );
        Ok(Some(record))
    }
}

fn parse_field(
    row: usize,
    field: CanonicalField,
    raw: &str,
    parse: fn(&str) -> Option<f64>,
) -> Result<f64> {
    parse(raw).ok_or_else(|| TransformError::Unparseable {
        row,
        field,
        value: raw.to_string(),
    })
}
