//! Value normalization applied to kept rows.

pub mod numeric;
pub mod product;

pub use numeric::{clean_numeric, parse_quantity, parse_tolerant_f64};
pub use product::{is_target_product, normalize_product};
