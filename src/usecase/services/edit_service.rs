use crate::domain::entities::table::TableState;
use crate::usecase::session::{SessionError, SessionPhase};

/// Cell writes are only accepted while editing; no validation runs here.
pub fn apply_cell_edit(
    table: &mut TableState,
    phase: SessionPhase,
    row: usize,
    column: &str,
    value: String,
) -> Result<(), SessionError> {
    if phase != SessionPhase::Editing {
        return Err(SessionError::ReadOnly);
    }
    table.set_cell(row, column, value)?;
    Ok(())
}
