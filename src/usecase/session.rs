use crate::domain::entities::log::LogRecorder;
use crate::domain::entities::table::{TableError, TableState};
use crate::domain::rules::validation::{FieldRules, ValidationErrorMap};
use crate::usecase::ports::ingest::{CsvIngestor, IngestError, ParsedCsv};
use crate::usecase::services::edit_service::apply_cell_edit;
use crate::usecase::services::import_service::{
    apply_ingest_result, is_csv_file_name, UploadOutcome, WRONG_EXTENSION,
};
use crate::usecase::services::save_service::{run_save, SaveOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    Viewing,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    ReadOnly,
    Table(TableError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::ReadOnly => write!(f, "cells are read-only outside edit mode"),
            SessionError::Table(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<TableError> for SessionError {
    fn from(value: TableError) -> Self {
        SessionError::Table(value)
    }
}

/// Handed out when an upload starts; only the newest ticket may write its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u64,
    file_name: String,
}

impl UploadTicket {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Single-document editing session. Every UI handler mutates it through `&mut Session`.
#[derive(Debug, Clone, Default)]
pub struct Session {
    rules: FieldRules,
    table: TableState,
    errors: ValidationErrorMap,
    logs: LogRecorder,
    phase: SessionPhase,
    file_name: Option<String>,
    upload_generation: u64,
}

impl Session {
    pub fn new(rules: FieldRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        self.phase != SessionPhase::NotStarted
    }

    pub fn is_editing(&self) -> bool {
        self.phase == SessionPhase::Editing
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn errors(&self) -> &ValidationErrorMap {
        &self.errors
    }

    pub fn logs(&self) -> &LogRecorder {
        &self.logs
    }

    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    /// Viewing -> Editing clears the console; Editing -> Viewing keeps it.
    pub fn toggle_mode(&mut self) -> SessionPhase {
        self.phase = match self.phase {
            SessionPhase::NotStarted => SessionPhase::NotStarted,
            SessionPhase::Viewing => {
                self.logs.clear();
                SessionPhase::Editing
            }
            SessionPhase::Editing => SessionPhase::Viewing,
        };
        tracing::debug!(phase = ?self.phase, "mode toggled");
        self.phase
    }

    pub fn edit_cell(
        &mut self,
        row: usize,
        column: &str,
        value: String,
    ) -> Result<(), SessionError> {
        apply_cell_edit(&mut self.table, self.phase, row, column, value)
    }

    pub fn begin_upload(&mut self, file_name: &str) -> Option<UploadTicket> {
        if !is_csv_file_name(file_name) {
            self.logs.error(WRONG_EXTENSION);
            return None;
        }

        if self.phase == SessionPhase::NotStarted {
            self.phase = SessionPhase::Viewing;
        }
        self.file_name = Some(file_name.to_string());
        self.upload_generation += 1;
        tracing::info!(file = file_name, generation = self.upload_generation, "upload started");

        Some(UploadTicket {
            generation: self.upload_generation,
            file_name: file_name.to_string(),
        })
    }

    pub fn finish_upload(
        &mut self,
        ticket: &UploadTicket,
        result: Result<ParsedCsv, IngestError>,
    ) -> UploadOutcome {
        if ticket.generation != self.upload_generation {
            tracing::warn!(
                file = ticket.file_name.as_str(),
                generation = ticket.generation,
                newest = self.upload_generation,
                "ignoring result of superseded upload"
            );
            return UploadOutcome::Stale;
        }

        apply_ingest_result(
            &mut self.table,
            &mut self.logs,
            &self.rules,
            &ticket.file_name,
            result,
        )
    }

    pub fn upload(
        &mut self,
        file_name: &str,
        bytes: &[u8],
        ingestor: &dyn CsvIngestor,
    ) -> UploadOutcome {
        let Some(ticket) = self.begin_upload(file_name) else {
            return UploadOutcome::Rejected;
        };
        let result = ingestor.ingest(bytes);
        self.finish_upload(&ticket, result)
    }

    pub fn save(&mut self) -> SaveOutcome {
        let outcome = run_save(&self.table, &mut self.errors, &mut self.logs, &self.rules);
        tracing::info!(?outcome, "save finished");
        outcome
    }
}
