use std::collections::BTreeMap;

/// One CSV data line, keyed by column name.
pub type Row = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub row: usize,
    pub column: String,
}

impl CellKey {
    pub fn new(row: usize, column: impl Into<String>) -> Self {
        Self {
            row,
            column: column.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    RowOutOfRange { row: usize, len: usize },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::RowOutOfRange { row, len } => {
                write!(f, "row {row} is out of range for a table of {len} rows")
            }
        }
    }
}

impl std::error::Error for TableError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces headers and rows together. Mode and validation results are not touched.
    pub fn load_from_parsed_rows(&mut self, headers: Vec<String>, rows: Vec<Row>) {
        self.headers = headers;
        self.rows = rows;
    }

    pub fn set_cell(&mut self, row: usize, column: &str, value: String) -> Result<(), TableError> {
        let len = self.rows.len();
        let record = self
            .rows
            .get_mut(row)
            .ok_or(TableError::RowOutOfRange { row, len })?;
        record.insert(column.to_string(), value);
        Ok(())
    }

    pub fn get_cell(&self, row: usize, column: &str) -> &str {
        self.rows
            .get(row)
            .and_then(|record| record.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Required names absent from the header list, in the order they were given.
    pub fn missing_headers(&self, required: &[String]) -> Vec<String> {
        required
            .iter()
            .filter(|field| !self.headers.contains(field))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TableState {
        let mut table = TableState::new();
        let mut row = Row::new();
        row.insert("Email".to_string(), "jane@x.com".to_string());
        table.load_from_parsed_rows(vec!["Email".to_string(), "Phone".to_string()], vec![row]);
        table
    }

    #[test]
    fn missing_keys_read_as_empty() {
        let table = sample();
        assert_eq!(table.get_cell(0, "Email"), "jane@x.com");
        assert_eq!(table.get_cell(0, "Phone"), "", "absent key should read as empty");
        assert_eq!(table.get_cell(7, "Email"), "", "absent row should read as empty");
    }

    #[test]
    fn set_cell_creates_missing_key() {
        let mut table = sample();
        table
            .set_cell(0, "Phone", "555-123-4567".to_string())
            .expect("row 0 should be writable");
        assert_eq!(table.get_cell(0, "Phone"), "555-123-4567");
    }

    #[test]
    fn set_cell_rejects_out_of_range_row() {
        let mut table = sample();
        let err = table
            .set_cell(1, "Email", "x".to_string())
            .expect_err("row 1 does not exist");
        assert_eq!(err, TableError::RowOutOfRange { row: 1, len: 1 });
        assert_eq!(table.row_count(), 1, "no row should be created");
    }

    #[test]
    fn load_replaces_everything() {
        let mut table = sample();
        table.load_from_parsed_rows(vec!["Name".to_string()], Vec::new());
        assert_eq!(table.headers(), ["Name".to_string()]);
        assert!(table.is_empty());
    }

    #[test]
    fn missing_headers_keeps_required_order() {
        let table = sample();
        let required = vec![
            "Patient Name".to_string(),
            "Email".to_string(),
            "Phone".to_string(),
            "Referring Provider".to_string(),
        ];
        assert_eq!(
            table.missing_headers(&required),
            vec!["Patient Name".to_string(), "Referring Provider".to_string()]
        );
        assert!(table.missing_headers(&["Email".to_string()]).is_empty());
    }
}
