use chrono::{DateTime, Utc};

/// Maximum number of messages kept in the status log
const MAX_LOG_MESSAGES: usize = 100;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log message with timestamp
#[derive(Debug, Clone)]
pub struct LogMessage {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
}

/// Bounded history of status messages shown in the status bar
#[derive(Debug, Clone, Default)]
pub struct StatusLog {
    messages: Vec<LogMessage>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a log message
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        self.messages.push(LogMessage {
            timestamp: Utc::now(),
            level,
            message: message.into(),
        });

        // Keep only the last MAX_LOG_MESSAGES messages
        if self.messages.len() > MAX_LOG_MESSAGES {
            let excess = self.messages.len() - MAX_LOG_MESSAGES;
            self.messages.drain(..excess);
        }
    }

    pub fn latest(&self) -> Option<&LogMessage> {
        self.messages.last()
    }

    /// Get recent log messages (last N)
    pub fn recent(&self, count: usize) -> &[LogMessage] {
        let start = self.messages.len().saturating_sub(count);
        &self.messages[start..]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
