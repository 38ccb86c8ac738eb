//! Header reconciliation against the synonym table.

use morsel_model::{CanonicalField, SynonymTable};

use crate::error::ReconcileError;

/// Where a canonical field was found in a file's header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub field: CanonicalField,
    /// Normalized header that matched.
    pub source: String,
    /// Position of that header in the row.
    pub index: usize,
}

/// Mapping from every canonical field to an actual column of one file.
///
/// Only built when all four fields resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalColumnMap {
    columns: Vec<ResolvedColumn>,
}

/// One data row restricted to the canonical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalRow<'a> {
    pub product: &'a str,
    pub quantity: &'a str,
    pub price: &'a str,
    pub region: &'a str,
}

impl CanonicalColumnMap {
    pub fn get(&self, field: CanonicalField) -> &ResolvedColumn {
        // Columns are stored in `CanonicalField::ALL` order.
        &self.columns[field.position()]
    }

    pub fn index(&self, field: CanonicalField) -> usize {
        self.get(field).index
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedColumn> {
        self.columns.iter()
    }

    /// Renames a row's cells to canonical fields, dropping everything else.
    pub fn row<'a>(&self, cells: &'a [String]) -> CanonicalRow<'a> {
        let cell = |field: CanonicalField| {
            cells
                .get(self.index(field))
                .map_or("", String::as_str)
        };
        CanonicalRow {
            product: cell(CanonicalField::Product),
            quantity: cell(CanonicalField::Quantity),
            price: cell(CanonicalField::Price),
            region: cell(CanonicalField::Region),
        }
    }

    /// Headers not claimed by any canonical field, in file order.
    pub fn unmapped_columns<'a>(&self, headers: &'a [String]) -> Vec<&'a str> {
        headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.columns.iter().any(|column| column.index == *idx))
            .map(|(_, header)| header.as_str())
            .collect()
    }
}

/// Resolves canonical fields against normalized headers.
#[derive(Debug, Clone, Default)]
pub struct ColumnReconciler {
    synonyms: SynonymTable,
}

impl ColumnReconciler {
    pub fn new(synonyms: SynonymTable) -> Self {
        Self { synonyms }
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Builds the canonical map for one file.
    ///
    /// For each field the synonyms are tried in order and the first one
    /// present among `headers` wins. Headers must already be normalized.
    /// If any field is left unresolved the whole file is rejected; no
    /// partial map is returned.
    pub fn reconcile(&self, headers: &[String]) -> Result<CanonicalColumnMap, ReconcileError> {
        let mut columns = Vec::with_capacity(CanonicalField::ALL.len());
        let mut missing = Vec::new();

        for field in CanonicalField::ALL {
            let found = self.synonyms.synonyms(field).iter().find_map(|synonym| {
                headers
                    .iter()
                    .position(|header| header == synonym)
                    .map(|index| ResolvedColumn {
                        field,
                        source: synonym.clone(),
                        index,
                    })
            });
            match found {
                Some(column) => columns.push(column),
                None => missing.push(field),
            }
        }

        if missing.is_empty() {
            Ok(CanonicalColumnMap { columns })
        } else {
            Err(ReconcileError::MissingFields { missing })
        }
    }
}
