use log::{Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Messages kept before the oldest are dropped
const LOG_CAPACITY: usize = 100;

pub type LogBuffer = Arc<Mutex<Vec<String>>>;

/// Collects `log` records into a buffer the log panel drains on every frame.
pub struct TuiLogger {
    log_buffer: LogBuffer,
}

impl TuiLogger {
    pub fn new() -> (Self, LogBuffer) {
        let log_buffer = Arc::new(Mutex::new(Vec::new()));
        (
            TuiLogger {
                log_buffer: log_buffer.clone(),
            },
            log_buffer,
        )
    }
}

impl Log for TuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("blackjack")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let msg = format!("{}", record.args());
            if let Ok(mut buffer) = self.log_buffer.lock() {
                buffer.push(msg);
                if buffer.len() > LOG_CAPACITY {
                    buffer.remove(0);
                }
            }
        }
    }

    fn flush(&self) {}
}
