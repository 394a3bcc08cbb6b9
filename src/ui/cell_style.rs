use crate::usecase::session::SessionPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTone {
    Invalid,
    Empty,
    Editable,
    ReadOnly,
}

impl CellTone {
    pub fn style(self) -> String {
        let (background, border, color) = match self {
            CellTone::Invalid => ("#ffe5e5", "1px solid red", "#333"),
            CellTone::Empty => ("#fcd8d6", "1px solid #ccc", "#333"),
            CellTone::Editable => ("#fff9db", "1px solid #ccc", "#333"),
            CellTone::ReadOnly => ("#e3f5ff", "1px solid #ccc", "#666"),
        };
        format!(
            "width: 100%; box-sizing: border-box; font-size: 1.3rem; padding: 6px 8px; background-color: {background}; border: {border}; color: {color};"
        )
    }
}

/// A recorded validation error wins over emptiness, emptiness over mode.
pub fn cell_tone(has_error: bool, is_empty: bool, editing: bool) -> CellTone {
    if has_error {
        CellTone::Invalid
    } else if is_empty {
        CellTone::Empty
    } else if editing {
        CellTone::Editable
    } else {
        CellTone::ReadOnly
    }
}

pub fn accent_color(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Editing => "#f6ce60",
        SessionPhase::NotStarted | SessionPhase::Viewing => "#90e0ef",
    }
}

pub fn container_class(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Editing => "container-edit mode-transition",
        SessionPhase::NotStarted | SessionPhase::Viewing => "container-read mode-transition",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_takes_precedence() {
        assert_eq!(cell_tone(true, true, true), CellTone::Invalid);
        assert_eq!(cell_tone(true, false, false), CellTone::Invalid);
    }

    #[test]
    fn empty_beats_mode() {
        assert_eq!(cell_tone(false, true, true), CellTone::Empty);
        assert_eq!(cell_tone(false, true, false), CellTone::Empty);
    }

    #[test]
    fn mode_decides_filled_cells() {
        assert_eq!(cell_tone(false, false, true), CellTone::Editable);
        assert_eq!(cell_tone(false, false, false), CellTone::ReadOnly);
        assert!(CellTone::Invalid.style().contains("1px solid red"));
    }
}
