// file: src/converter/reader.rs
// description: decodes delimited text into ordered header-keyed rows
// reference: https://docs.rs/csv

use crate::error::{ConvertError, Result};
use crate::models::Row;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

/// Reads a header row followed by data rows. Rows may be shorter or longer
/// than the header: missing cells become blank, surplus cells are dropped.
#[derive(Debug, Default)]
pub struct TableReader;

impl TableReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_bytes(&self, bytes: &[u8]) -> Result<Vec<Row>> {
        let content = std::str::from_utf8(bytes).map_err(|e| {
            ConvertError::malformed(format!(
                "input is not valid UTF-8 text (byte {}): {}",
                e.valid_up_to(),
                e
            ))
        })?;

        self.read_str(content)
    }

    pub fn read_str(&self, content: &str) -> Result<Vec<Row>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(Trim::None)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| ConvertError::malformed(format!("failed to read header row: {}", e)))?
            .clone();

        if headers.is_empty() {
            return Err(ConvertError::malformed("missing header row"));
        }

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                ConvertError::malformed(format!("failed to parse row {}: {}", index + 1, e))
            })?;

            if record.len() > headers.len() {
                debug!(
                    "Row {} has {} cells for {} columns, ignoring the surplus",
                    index + 1,
                    record.len(),
                    headers.len()
                );
            }

            rows.push(Self::build_row(&headers, &record));
        }

        Ok(rows)
    }

    fn build_row(headers: &StringRecord, record: &StringRecord) -> Row {
        let mut row = Row::with_capacity(headers.len());

        for (idx, header) in headers.iter().enumerate() {
            let value = record
                .get(idx)
                .filter(|cell| !cell.trim().is_empty())
                .map(str::to_string);
            // Repeated headers keep their first position and last value.
            row.insert(header.to_string(), value);
        }

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cells(row: &Row) -> Vec<(&str, Option<&str>)> {
        row.iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
            .collect()
    }

    #[test]
    fn test_blank_cells_become_none() {
        let rows = TableReader::new().read_str("name,age\nAlice,30\nBob,\n").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(cells(&rows[0]), vec![("name", Some("Alice")), ("age", Some("30"))]);
        assert_eq!(cells(&rows[1]), vec![("name", Some("Bob")), ("age", None)]);
    }

    #[test]
    fn test_whitespace_only_cell_is_blank_but_values_are_untrimmed() {
        let rows = TableReader::new().read_str("a,b\n  , x \n").unwrap();
        assert_eq!(cells(&rows[0]), vec![("a", None), ("b", Some(" x "))]);
    }

    #[test]
    fn test_quoted_fields() {
        let rows = TableReader::new()
            .read_str("title,notes\n\"Hello, world\",\"line one\nline two\"\n")
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["title"].as_deref(), Some("Hello, world"));
        assert_eq!(rows[0]["notes"].as_deref(), Some("line one\nline two"));
    }

    #[test]
    fn test_ragged_rows() {
        let rows = TableReader::new().read_str("a,b,c\n1\n1,2,3,4\n").unwrap();

        assert_eq!(cells(&rows[0]), vec![("a", Some("1")), ("b", None), ("c", None)]);
        assert_eq!(
            cells(&rows[1]),
            vec![("a", Some("1")), ("b", Some("2")), ("c", Some("3"))]
        );
    }

    #[test]
    fn test_duplicate_headers_keep_last_value() {
        let rows = TableReader::new().read_str("a,b,a\n1,2,3\n").unwrap();
        assert_eq!(cells(&rows[0]), vec![("a", Some("3")), ("b", Some("2"))]);
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        let rows = TableReader::new().read_str("name,age\n").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_header_is_malformed() {
        let err = TableReader::new().read_str("").unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let err = TableReader::new()
            .read_bytes(b"name\n\xff\xfe\xfd\n")
            .unwrap_err();
        assert!(err.is_malformed_input());
    }
}
