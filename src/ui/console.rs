use crate::domain::entities::log::{LogEntry, LogKind};

pub const EMPTY_CONSOLE: &str = "No messages yet.";

pub fn log_color(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Error => "#b20000",
        LogKind::Warning => "#a67c00",
        LogKind::Info | LogKind::Success => "green",
    }
}

pub fn console_line(entry: &LogEntry) -> String {
    format!("● [{}] {}", entry.time_label(), entry.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::log::LogRecorder;

    #[test]
    fn line_carries_time_and_message() {
        let mut logs = LogRecorder::new();
        logs.warning("check the fields");
        let entry = &logs.entries()[0];
        let line = console_line(entry);
        assert!(line.starts_with("● ["), "unexpected line: {line}");
        assert!(line.ends_with("] check the fields"), "unexpected line: {line}");
        assert_eq!(log_color(entry.kind), "#a67c00");
    }
}
