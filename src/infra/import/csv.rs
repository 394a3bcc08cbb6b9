use std::collections::HashSet;

use csv::{ReaderBuilder, StringRecord};

use crate::domain::entities::table::Row;
use crate::usecase::ports::ingest::{CsvIngestor, IngestError, ParseIssue, ParsedCsv};

/// Header-row CSV reader. Short rows are kept with their trailing columns absent;
/// rows longer than the header are reported as parse issues.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFileIngestor;

impl CsvIngestor for CsvFileIngestor {
    fn ingest(&self, bytes: &[u8]) -> Result<ParsedCsv, IngestError> {
        parse_csv_bytes(bytes)
    }
}

pub fn parse_csv_bytes(bytes: &[u8]) -> Result<ParsedCsv, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let raw_headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => {
            return Err(IngestError::Parse(vec![ParseIssue {
                row: None,
                message: format!("failed to read csv header: {err}"),
            }]))
        }
    };
    let headers = dedupe_headers(&raw_headers);

    let mut rows = Vec::new();
    let mut issues = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                if err.is_io_error() {
                    return Err(IngestError::Read(err.to_string()));
                }
                issues.push(ParseIssue {
                    row: Some(row_idx),
                    message: format!("failed to parse csv record: {err}"),
                });
                continue;
            }
        };

        if record.len() > headers.len() {
            issues.push(ParseIssue {
                row: Some(row_idx),
                message: format!(
                    "Too many fields: expected {} fields but parsed {}",
                    headers.len(),
                    record.len()
                ),
            });
            continue;
        }

        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    if let Some(issue) = scan_quotes(bytes) {
        issues.push(issue);
    }

    if !issues.is_empty() {
        tracing::debug!(count = issues.len(), "csv ingest found parse issues");
        return Err(IngestError::Parse(issues));
    }

    tracing::debug!(columns = headers.len(), rows = rows.len(), "csv ingested");
    Ok(ParsedCsv { headers, rows })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    AfterQuote,
}

/// The csv reader silently swallows the rest of the input after an unclosed quote and
/// glues text after a closing quote onto the field. Both are reported here instead.
/// Quotes inside an unquoted field are literal text.
fn scan_quotes(bytes: &[u8]) -> Option<ParseIssue> {
    // record 0 is the header line; empty lines are not counted, matching the reader
    let mut record = 0_usize;
    let mut has_content = false;
    let mut quote_record = 0_usize;
    let mut state = QuoteState::FieldStart;

    let mut input = bytes.iter().copied().peekable();
    while let Some(byte) = input.next() {
        state = match (state, byte) {
            (QuoteState::Quoted, b'"') => {
                if input.peek() == Some(&b'"') {
                    input.next();
                    QuoteState::Quoted
                } else {
                    QuoteState::AfterQuote
                }
            }
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (_, b',') => {
                has_content = true;
                QuoteState::FieldStart
            }
            (_, b'\n' | b'\r') => {
                if has_content {
                    record += 1;
                }
                has_content = false;
                QuoteState::FieldStart
            }
            (QuoteState::FieldStart, b'"') => {
                has_content = true;
                quote_record = record;
                QuoteState::Quoted
            }
            (QuoteState::AfterQuote, _) => {
                return Some(ParseIssue {
                    row: record.checked_sub(1),
                    message: "Trailing quote on quoted field is malformed".to_string(),
                });
            }
            (QuoteState::FieldStart | QuoteState::Unquoted, _) => {
                has_content = true;
                QuoteState::Unquoted
            }
        };
    }

    (state == QuoteState::Quoted).then(|| ParseIssue {
        row: quote_record.checked_sub(1),
        message: "Quoted field unterminated".to_string(),
    })
}

/// Repeated header names get `_1`, `_2`, ... suffixes so every column keeps its own key.
fn dedupe_headers(raw: &StringRecord) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut headers = Vec::with_capacity(raw.len());
    for name in raw.iter() {
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{name}_{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let parsed = parse_csv_bytes(
            b"Patient Name,Email,Phone,Referring Provider\n\"Jane Doe\",\"jane@x.com\",\"555-123-4567\",\"Dr. Lee\"\n",
        )
        .expect("well-formed csv should parse");

        assert_eq!(parsed.headers.len(), 4);
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].get("Patient Name").map(String::as_str), Some("Jane Doe"));
        assert_eq!(parsed.effective_headers(), parsed.headers);
    }

    #[test]
    fn skips_blank_lines() {
        let parsed = parse_csv_bytes(b"name,city\n\nAlice,Paris\n\nBob,Tokyo\n")
            .expect("blank lines should be skipped");
        assert_eq!(parsed.rows.len(), 2);
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let parsed = parse_csv_bytes(b"name,city\n").expect("header only should parse");
        assert!(parsed.rows.is_empty());
        assert!(parsed.effective_headers().is_empty());
    }

    #[test]
    fn short_rows_leave_keys_absent() {
        let parsed = parse_csv_bytes(b"name,city\nAlice\n").expect("short rows are tolerated");
        assert_eq!(parsed.rows[0].len(), 1);
        assert!(!parsed.rows[0].contains_key("city"));
        assert_eq!(parsed.effective_headers(), vec!["name".to_string()]);
    }

    #[test]
    fn long_rows_are_parse_issues() {
        let err = parse_csv_bytes(b"name,city\nAlice,Paris,extra\n")
            .expect_err("extra fields should fail");
        let issue = err.first_issue().expect("should carry an issue");
        assert_eq!(issue.row, Some(0));
        assert_eq!(issue.message, "Too many fields: expected 2 fields but parsed 3");
    }

    #[test]
    fn invalid_utf8_is_a_parse_issue() {
        let err = parse_csv_bytes(b"name,city\nAl\xffce,Paris\n").expect_err("bad utf-8 should fail");
        assert!(matches!(err, IngestError::Parse(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn unterminated_quote_is_a_parse_issue() {
        let err = parse_csv_bytes(b"Patient Name,Email\n\"Jane,jane@x.com\nJohn,john@x.com\n")
            .expect_err("an unclosed quote should fail");
        let issue = err.first_issue().expect("should carry an issue");
        assert_eq!(issue.row, Some(0));
        assert_eq!(issue.message, "Quoted field unterminated");
    }

    #[test]
    fn unterminated_quote_in_header_has_no_row() {
        let err = parse_csv_bytes(b"\"name,city\nAlice,Paris\n").expect_err("should fail");
        assert_eq!(err.first_issue().map(|issue| issue.row), Some(None));
    }

    #[test]
    fn text_after_closing_quote_is_a_parse_issue() {
        let err = parse_csv_bytes(b"name,city\nAlice,Paris\n\n\"Bob\"by,Tokyo\n")
            .expect_err("text after a closing quote should fail");
        let issue = err.first_issue().expect("should carry an issue");
        assert_eq!(issue.row, Some(1), "blank lines are not counted");
        assert_eq!(issue.message, "Trailing quote on quoted field is malformed");
    }

    #[test]
    fn well_formed_quoting_is_accepted() {
        let parsed = parse_csv_bytes(
            b"name,note\r\n\"Alice\",\"said \"\"hi\"\"\"\r\n\"Bob\",\"two\nlines\"\r\nCarol,5\" tall\r\n",
        )
        .expect("escaped, multi-line and bare quotes should parse");
        assert_eq!(parsed.rows.len(), 3);
        assert_eq!(parsed.rows[0].get("note").map(String::as_str), Some("said \"hi\""));
        assert_eq!(parsed.rows[1].get("note").map(String::as_str), Some("two\nlines"));
        assert_eq!(parsed.rows[2].get("note").map(String::as_str), Some("5\" tall"));
    }

    #[test]
    fn duplicate_headers_are_renamed() {
        let parsed = parse_csv_bytes(b"a,a,a\n1,2,3\n").expect("duplicates should parse");
        assert_eq!(parsed.headers, vec!["a", "a_1", "a_2"]);
        assert_eq!(parsed.rows[0].get("a_2").map(String::as_str), Some("3"));
    }
}
