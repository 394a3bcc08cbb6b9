use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::entities::table::{CellKey, TableState};

pub const MISSING_FIELD: &str = "Missing field";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const INVALID_PHONE: &str = "Invalid phone number";

/// Whitespace as browsers match `\s`: includes U+FEFF, excludes U+0085.
const BROWSER_SPACE: &str = concat!(
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}",
);

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{BROWSER_SPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern should compile")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+?[0-9]{1,3}[- ]?)?\(?[0-9]{3}\)?[- ]?[0-9]{3}[- ]?[0-9]{4}$")
        .expect("phone pattern should compile")
});

pub type ValidationErrorMap = BTreeMap<CellKey, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRules {
    pub required_fields: Vec<String>,
    pub email_field: String,
    pub phone_field: String,
}

impl Default for FieldRules {
    fn default() -> Self {
        Self {
            required_fields: vec![
                "Patient Name".to_string(),
                "Email".to_string(),
                "Phone".to_string(),
                "Referring Provider".to_string(),
            ],
            email_field: "Email".to_string(),
            phone_field: "Phone".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: ValidationErrorMap,
    pub has_issue: bool,
}

fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Scans every row against the required and format rules. The map is rebuilt from scratch.
pub fn validate(table: &TableState, rules: &FieldRules) -> ValidationReport {
    let mut errors = ValidationErrorMap::new();

    for (row_idx, row) in table.rows().iter().enumerate() {
        for field in &rules.required_fields {
            let present = row.get(field).is_some_and(|value| !value.is_empty());
            if !present {
                errors.insert(CellKey::new(row_idx, field.as_str()), MISSING_FIELD.to_string());
            }
        }

        if let Some(email) = row.get(&rules.email_field).filter(|v| !v.is_empty()) {
            if !is_valid_email(email) {
                errors.insert(
                    CellKey::new(row_idx, rules.email_field.as_str()),
                    INVALID_EMAIL.to_string(),
                );
            }
        }

        if let Some(phone) = row.get(&rules.phone_field).filter(|v| !v.is_empty()) {
            if !is_valid_phone(phone) {
                errors.insert(
                    CellKey::new(row_idx, rules.phone_field.as_str()),
                    INVALID_PHONE.to_string(),
                );
            }
        }
    }

    let has_issue = !errors.is_empty();
    ValidationReport { errors, has_issue }
}
