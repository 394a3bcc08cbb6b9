use crate::domain::entities::table::Row;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Zero-based data row, `None` when the problem is not tied to a row.
    pub row: Option<usize>,
    pub message: String,
}

impl std::fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.row {
            Some(row) => write!(f, "{} (row {})", self.message, row + 1),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    Read(String),
    Parse(Vec<ParseIssue>),
}

impl IngestError {
    pub fn first_issue(&self) -> Option<&ParseIssue> {
        match self {
            IngestError::Parse(issues) => issues.first(),
            IngestError::Read(_) => None,
        }
    }
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::Read(message) => write!(f, "failed to read csv: {message}"),
            IngestError::Parse(issues) => match issues.first() {
                Some(issue) => write!(f, "{issue}"),
                None => write!(f, "csv could not be parsed"),
            },
        }
    }
}

impl std::error::Error for IngestError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl ParsedCsv {
    /// Column names of the first data row, in header order.
    pub fn effective_headers(&self) -> Vec<String> {
        let Some(first) = self.rows.first() else {
            return Vec::new();
        };
        self.headers
            .iter()
            .filter(|header| first.contains_key(*header))
            .cloned()
            .collect()
    }
}

pub trait CsvIngestor: Send + Sync {
    fn ingest(&self, bytes: &[u8]) -> Result<ParsedCsv, IngestError>;
}
