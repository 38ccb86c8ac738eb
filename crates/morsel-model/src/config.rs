//! Fixed strings and the column synonym table.
//!
//! Everything the pipeline treats as a constant lives here so that the filter
//! target and accepted header spellings can change without touching the
//! pipeline stages themselves.

use crate::error::{ModelError, Result};
use crate::field::CanonicalField;

/// Product name kept by the row filter, already trimmed and lower-cased.
pub const TARGET_PRODUCT: &str = "pink morsel";

/// Default directory scanned for input files.
pub const DEFAULT_INPUT_DIR: &str = "data";

/// Default glob pattern, relative to the input directory.
pub const DEFAULT_PATTERN: &str = "*.csv";

/// Default destination of the consolidated file.
pub const DEFAULT_OUTPUT_PATH: &str = "formatted_data.csv";

/// Output column order.
pub const OUTPUT_COLUMNS: [&str; 3] = ["sales", "region", "price"];

/// Accepted header spellings per canonical field, tried in order.
///
/// Synonym sets of different fields must not overlap.
pub const DEFAULT_SYNONYMS: &[(CanonicalField, &[&str])] = &[
    (
        CanonicalField::Product,
        &["product", "item", "товар", "продукт"],
    ),
    (
        CanonicalField::Quantity,
        &["quantity", "количество", "qty", "amount"],
    ),
    (CanonicalField::Price, &["price", "цена", "стоимость"]),
    (
        CanonicalField::Region,
        &["region", "регион", "area", "zone"],
    ),
];

/// Normalizes a column name for synonym lookup: trimmed and lower-cased.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_lowercase()
}

/// A synonym shared by two canonical fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymOverlap {
    pub synonym: String,
    pub first: CanonicalField,
    pub second: CanonicalField,
}

/// Ordered runtime synonym table.
///
/// Iteration follows [`CanonicalField::ALL`]; each field's synonyms keep their
/// declared order, with extensions appended after the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymTable {
    entries: Vec<(CanonicalField, Vec<String>)>,
}

impl Default for SynonymTable {
    fn default() -> Self {
        let entries = DEFAULT_SYNONYMS
            .iter()
            .map(|(field, synonyms)| {
                (
                    *field,
                    synonyms.iter().map(|s| normalize_column_name(s)).collect(),
                )
            })
            .collect();
        Self { entries }
    }
}

impl SynonymTable {
    /// Appends synonyms to a field. Already known spellings are ignored.
    pub fn extend<I, S>(&mut self, field: CanonicalField, synonyms: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let slot = self.slot_mut(field);
        for synonym in synonyms {
            let normalized = normalize_column_name(synonym.as_ref());
            if normalized.is_empty() {
                return Err(ModelError::EmptySynonym {
                    field: field.to_string(),
                });
            }
            if !slot.contains(&normalized) {
                slot.push(normalized);
            }
        }
        Ok(())
    }

    /// Builder form of [`SynonymTable::extend`].
    pub fn with_synonyms<I, S>(mut self, field: CanonicalField, synonyms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extend(field, synonyms)?;
        Ok(self)
    }

    /// Synonyms for a field in lookup order.
    pub fn synonyms(&self, field: CanonicalField) -> &[String] {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, synonyms)| synonyms.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &[String])> {
        self.entries
            .iter()
            .map(|(field, synonyms)| (*field, synonyms.as_slice()))
    }

    /// Lists spellings accepted by more than one field.
    ///
    /// Reconciliation does not consult this; config loaders use it to warn.
    pub fn overlaps(&self) -> Vec<SynonymOverlap> {
        let mut overlaps = Vec::new();
        for (index, (first, synonyms)) in self.entries.iter().enumerate() {
            for (second, others) in self.entries.iter().skip(index + 1) {
                for synonym in synonyms {
                    if others.contains(synonym) {
                        overlaps.push(SynonymOverlap {
                            synonym: synonym.clone(),
                            first: *first,
                            second: *second,
                        });
                    }
                }
            }
        }
        overlaps
    }

    fn slot_mut(&mut self, field: CanonicalField) -> &mut Vec<String> {
        let index = match self.entries.iter().position(|(f, _)| *f == field) {
            Some(index) => index,
            None => {
                self.entries.push((field, Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }
}
