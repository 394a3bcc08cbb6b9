use crate::domain::entities::log::LogRecorder;
use crate::domain::entities::table::TableState;
use crate::domain::rules::validation::FieldRules;
use crate::usecase::ports::ingest::{IngestError, ParsedCsv};

pub const WRONG_EXTENSION: &str = "Please upload a .csv file.";
pub const READ_FAILED: &str = "Failed to parse CSV.";
pub const NO_DATA: &str = "CSV uploaded but contains no data.";
pub const WRONG_FILE: &str = "Might have uploaded wrong file, check the fields again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Rejected,
    Loaded { rows: usize },
    Empty,
    Failed,
    Stale,
}

/// Extension check is case-sensitive: `data.CSV` is rejected.
pub fn is_csv_file_name(file_name: &str) -> bool {
    file_name.ends_with(".csv")
}

/// Writes the outcome of one ingestion into the table and the console.
/// Failed and empty ingests leave headers and rows as they were.
pub fn apply_ingest_result(
    table: &mut TableState,
    logs: &mut LogRecorder,
    rules: &FieldRules,
    file_name: &str,
    result: Result<ParsedCsv, IngestError>,
) -> UploadOutcome {
    let parsed = match result {
        Ok(parsed) => parsed,
        Err(IngestError::Read(reason)) => {
            tracing::warn!(file = file_name, %reason, "csv could not be read");
            logs.error(READ_FAILED);
            return UploadOutcome::Failed;
        }
        Err(err @ IngestError::Parse(_)) => {
            let message = err
                .first_issue()
                .map(|issue| issue.message.clone())
                .unwrap_or_else(|| err.to_string());
            logs.error(format!("CSV parsing error: {message}"));
            return UploadOutcome::Failed;
        }
    };

    if parsed.rows.is_empty() {
        logs.warning(NO_DATA);
        return UploadOutcome::Empty;
    }

    let headers = parsed.effective_headers();
    let has_all_headers = rules
        .required_fields
        .iter()
        .all(|field| headers.contains(field));
    if !has_all_headers {
        logs.warning(WRONG_FILE);
    }

    let row_count = parsed.rows.len();
    table.load_from_parsed_rows(headers, parsed.rows);
    logs.info(format!(
        "Loaded {row_count} {} from {file_name}.",
        if row_count == 1 { "row" } else { "rows" }
    ));
    UploadOutcome::Loaded { rows: row_count }
}
