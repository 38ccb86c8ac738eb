//! In-memory table for a single input file.

/// Rows of one input file keyed by normalized column names.
///
/// Headers are trimmed and lower-cased at parse time; every row has exactly
/// `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Field delimiter the file was parsed with.
    pub delimiter: u8,
}

impl RawTable {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_table_is_empty() {
        let table = RawTable {
            headers: vec!["item".into(), "qty".into()],
            rows: Vec::new(),
            delimiter: b',',
        };
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn counts_data_rows_only() {
        let table = RawTable {
            headers: vec!["item".into(), "qty".into()],
            rows: vec![
                vec!["a".into(), "1".into()],
                vec!["b".into(), "2".into()],
            ],
            delimiter: b';',
        };
        assert!(!table.is_empty());
        assert_eq!(table.len(), 2);
    }
}
