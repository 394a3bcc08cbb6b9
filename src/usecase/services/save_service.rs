use crate::domain::entities::log::LogRecorder;
use crate::domain::entities::table::TableState;
use crate::domain::rules::validation::{validate, FieldRules, ValidationErrorMap};

pub const FILL_ALL_FIELDS: &str = "Fill all fields before saving.";
pub const SAVED: &str = "Data saved successfully!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    MissingHeaders(Vec<String>),
    Invalid { error_count: usize },
    Saved,
}

pub fn missing_headers_message(rules: &FieldRules) -> String {
    format!(
        "Re-check if these exist or not: {}",
        rules.required_fields.join(", ")
    )
}

/// Clears the console, then validates. The error map is only replaced when validation runs.
pub fn run_save(
    table: &TableState,
    errors: &mut ValidationErrorMap,
    logs: &mut LogRecorder,
    rules: &FieldRules,
) -> SaveOutcome {
    logs.clear();

    let missing = table.missing_headers(&rules.required_fields);
    if !missing.is_empty() {
        tracing::debug!(?missing, "save blocked by missing headers");
        logs.error(missing_headers_message(rules));
        return SaveOutcome::MissingHeaders(missing);
    }

    let report = validate(table, rules);
    *errors = report.errors;

    if report.has_issue {
        logs.error(FILL_ALL_FIELDS);
        SaveOutcome::Invalid {
            error_count: errors.len(),
        }
    } else {
        logs.success(SAVED);
        SaveOutcome::Saved
    }
}
