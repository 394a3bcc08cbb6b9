use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKind {
    Info,
    Warning,
    Error,
    Success,
}

impl LogKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LogKind::Info => "info",
            LogKind::Warning => "warning",
            LogKind::Error => "error",
            LogKind::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub kind: LogKind,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Append-only console messages shown next to the table in edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogRecorder {
    entries: Vec<LogEntry>,
}

const CONSOLE_TARGET: &str = "referral_sheet::console";

impl LogRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, kind: LogKind, message: impl Into<String>) {
        let message = message.into();
        match kind {
            LogKind::Error => {
                tracing::error!(target: CONSOLE_TARGET, kind = kind.as_str(), "{message}")
            }
            LogKind::Warning => {
                tracing::warn!(target: CONSOLE_TARGET, kind = kind.as_str(), "{message}")
            }
            LogKind::Info | LogKind::Success => {
                tracing::info!(target: CONSOLE_TARGET, kind = kind.as_str(), "{message}")
            }
        }
        self.entries.push(LogEntry {
            kind,
            message,
            timestamp: Local::now(),
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(LogKind::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.log(LogKind::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(LogKind::Error, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.log(LogKind::Success, message);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, kind: LogKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_insertion_order() {
        let mut logs = LogRecorder::new();
        logs.warning("first");
        logs.error("second");
        logs.success("third");

        let messages: Vec<&str> = logs.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["first", "second", "third"]);
        assert_eq!(logs.count(LogKind::Error), 1);
        assert!(
            logs.entries()[0].timestamp <= logs.entries()[2].timestamp,
            "timestamps should not go backwards"
        );
    }

    #[test]
    fn clear_empties_the_sequence() {
        let mut logs = LogRecorder::new();
        logs.info("loaded");
        logs.clear();
        assert!(logs.is_empty());
        assert_eq!(logs.len(), 0);
    }

    #[test]
    fn time_label_is_clock_time() {
        let mut logs = LogRecorder::new();
        logs.info("loaded");
        let label = logs.entries()[0].time_label();
        assert_eq!(label.len(), 8, "expected HH:MM:SS, got {label}");
        assert_eq!(label.matches(':').count(), 2);
    }
}
