//! Canonical sales fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One of the four semantic columns every usable input file must expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalField {
    Product,
    Quantity,
    Price,
    Region,
}

impl CanonicalField {
    /// All canonical fields in declaration order.
    pub const ALL: [CanonicalField; 4] = [
        CanonicalField::Product,
        CanonicalField::Quantity,
        CanonicalField::Price,
        CanonicalField::Region,
    ];

    /// Index of this field within [`CanonicalField::ALL`].
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Product => 0,
            Self::Quantity => 1,
            Self::Price => 2,
            Self::Region => 3,
        }
    }

    /// Canonical column name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Quantity => "quantity",
            Self::Price => "price",
            Self::Region => "region",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

/// Joins field names for diagnostics (e.g. "price, region").
pub fn join_fields(fields: &[CanonicalField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
