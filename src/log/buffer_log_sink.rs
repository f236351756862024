use std::sync::Mutex;

use crate::log::{log_level::LogLevel, log_sink::LogSink};

/// In-memory sink that collects every line it receives.
///
/// Used by tests and by UI surfaces that want to show the last trace lines
/// without going through a file. Lines are stored in arrival order.
#[derive(Debug, Default)]
pub struct BufferLogSink {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl BufferLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns everything collected so far.
    pub fn take_lines(&self) -> Vec<(LogLevel, String)> {
        match self.lines.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            // A poisoned lock only happens if a writer panicked mid-push;
            // the collected lines are still more useful than nothing.
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for BufferLogSink {
    fn log(&self, level: LogLevel, msg: &str, _target: &'static str) {
        if let Ok(mut guard) = self.lines.lock() {
            guard.push((level, msg.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn collects_in_order() {
        let sink = BufferLogSink::new();
        sink.log(LogLevel::Debug, "first", "test::target");
        sink.log(LogLevel::Warn, "second", "test::target");

        let lines = sink.take_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], (LogLevel::Debug, "first".to_string()));
        assert_eq!(lines[1], (LogLevel::Warn, "second".to_string()));
    }

    #[test]
    fn take_lines_drains() {
        let sink = BufferLogSink::new();
        sink.log(LogLevel::Info, "only", "test::target");
        assert_eq!(sink.take_lines().len(), 1);
        assert!(sink.is_empty());
    }
}
