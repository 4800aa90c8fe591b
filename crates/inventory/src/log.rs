//! Log sink the store reports through.
//!
//! The store never talks to a global logger directly; it is handed a
//! [`StockLog`] so tests can capture what was emitted and assert on severity.

use std::cell::RefCell;
use std::rc::Rc;

use stockroom_core::{Severity, StockError};

/// One record emitted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    /// Error kind for warnings/errors (see [`StockError::kind`]).
    pub kind: Option<&'static str>,
    pub message: String,
}

/// Destination for store log records.
pub trait StockLog {
    fn record(&self, record: LogRecord);

    fn info(&self, message: String) {
        self.record(LogRecord {
            severity: Severity::Info,
            kind: None,
            message,
        });
    }

    fn failure(&self, err: &StockError) {
        self.record(LogRecord {
            severity: err.severity(),
            kind: Some(err.kind()),
            message: err.to_string(),
        });
    }
}

impl<L> StockLog for &L
where
    L: StockLog + ?Sized,
{
    fn record(&self, record: LogRecord) {
        (**self).record(record)
    }
}

impl<L> StockLog for Rc<L>
where
    L: StockLog + ?Sized,
{
    fn record(&self, record: LogRecord) {
        (**self).record(record)
    }
}

/// Forwards records to `tracing` at the matching level.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingLog;

impl StockLog for TracingLog {
    fn record(&self, record: LogRecord) {
        let message = record.message;
        match (record.severity, record.kind) {
            (Severity::Info, _) => tracing::info!("{message}"),
            (Severity::Warning, Some(kind)) => tracing::warn!(kind = kind, "{message}"),
            (Severity::Warning, None) => tracing::warn!("{message}"),
            (Severity::Error, Some(kind)) => tracing::error!(kind = kind, "{message}"),
            (Severity::Error, None) => tracing::error!("{message}"),
        }
    }
}

/// In-memory sink for tests.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: RefCell<Vec<LogRecord>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.borrow().clone()
    }

    /// Records at exactly `severity`.
    pub fn at(&self, severity: Severity) -> Vec<LogRecord> {
        self.records
            .borrow()
            .iter()
            .filter(|r| r.severity == severity)
            .cloned()
            .collect()
    }

    /// Kinds of all warning/error records, in emission order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.records.borrow().iter().filter_map(|r| r.kind).collect()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl StockLog for MemoryLog {
    fn record(&self, record: LogRecord) {
        self.records.borrow_mut().push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_carries_kind_and_severity() {
        let log = MemoryLog::new();
        log.failure(&StockError::item_not_found("orange"));
        log.info("Saved data to inventory.json".to_string());

        let records = log.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].severity, Severity::Warning);
        assert_eq!(records[0].kind, Some("item_not_found"));
        assert_eq!(records[1].severity, Severity::Info);
        assert_eq!(records[1].kind, None);
    }

    #[test]
    fn shared_handles_write_to_same_sink() {
        let log = Rc::new(MemoryLog::new());
        let handle = Rc::clone(&log);
        handle.info("one".to_string());
        (&*log).info("two".to_string());
        assert_eq!(log.at(Severity::Info).len(), 2);
    }
}
