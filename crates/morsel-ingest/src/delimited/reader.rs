//! Delimited text reading with delimiter detection.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::trace;

use morsel_model::normalize_column_name;

use crate::error::{IngestError, Result};

use super::delimiter::detect_delimiter;
use super::table::RawTable;

/// Reads one input file into a [`RawTable`].
///
/// The first non-blank line is the header. Column names are normalized with
/// [`normalize_column_name`]; data cells are kept verbatim. Short rows are
/// padded with empty cells and long rows truncated to the header width.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_raw_table(&text, path)
}

/// Parses already-loaded text; `path` is only used in errors.
pub fn parse_raw_table(text: &str, path: &Path) -> Result<RawTable> {
    // Skip BOM if present
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let delimiter = detect_delimiter(text);
    trace!(path = %path.display(), delimiter = %char::from(delimiter).escape_default(), "detected delimiter");

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => {
                headers = Some(record.iter().map(normalize_column_name).collect());
            }
            Some(header) => {
                let mut row = Vec::with_capacity(header.len());
                for idx in 0..header.len() {
                    row.push(record.get(idx).unwrap_or("").to_string());
                }
                rows.push(row);
            }
        }
    }

    let Some(headers) = headers else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    Ok(RawTable {
        headers,
        rows,
        delimiter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_normalizes_headers_only() {
        let file = create_temp_csv(" Item ,QTY,Price,Zone\nPink Morsel ,4,$3.00, East \n");
        let table = read_raw_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["item", "qty", "price", "zone"]);
        assert_eq!(table.rows, vec![vec!["Pink Morsel ", "4", "$3.00", " East "]]);
        assert_eq!(table.delimiter, b',');
    }

    #[test]
    fn test_read_semicolon_file() {
        let file = create_temp_csv("product;quantity;price;region\npink morsel;2;1,50;north\n");
        let table = read_raw_table(file.path()).unwrap();

        assert_eq!(table.delimiter, b';');
        assert_eq!(table.rows[0], vec!["pink morsel", "2", "1,50", "north"]);
    }

    #[test]
    fn test_read_with_bom_and_blank_lines() {
        let file = create_temp_csv("\u{feff}product,price\n\n a,1\n,\nb,2\n");
        let table = read_raw_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["product", "price"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_read_pads_short_rows() {
        let file = create_temp_csv("a,b,c\n1\n1,2,3,4\n");
        let table = read_raw_table(file.path()).unwrap();

        assert_eq!(table.rows[0], vec!["1", "", ""]);
        assert_eq!(table.rows[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_read_empty_file() {
        let file = create_temp_csv("");
        let result = read_raw_table(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_raw_table(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileRead { .. })));
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let file = create_temp_csv("product,quantity,price,region\n");
        let table = read_raw_table(file.path()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.headers.len(), 4);
    }
}
