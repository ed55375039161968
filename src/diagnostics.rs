//! Lock-guarded diagnostic log.
//!
//! The serial console is the only resource besides the reading slot that
//! more than one task may reach. [`DiagnosticLog`] wraps any [`LineSink`]
//! in a mutex so a message (possibly several lines) goes out without being
//! interleaved with another writer.
//!
//! A poisoned lock is recovered rather than propagated: a panic in one
//! writer must not silence diagnostics for the rest of the system.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::app::ports::LineSink;

/// Fixed message written when the DHT22 returns NaN.
pub const SENSOR_FAILURE_LINE: &str = "[Sensor] failed to read DHT22";

/// Shared, cloneable handle to a mutex-guarded line sink.
pub struct DiagnosticLog<S: LineSink> {
    sink: Arc<Mutex<S>>,
}

impl<S: LineSink> Clone for DiagnosticLog<S> {
    fn clone(&self) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
        }
    }
}

impl<S: LineSink> DiagnosticLog<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    /// Write one line under the lock.
    pub fn write_line(&self, line: &str) {
        self.lock().write_line(line);
    }

    /// Write several lines under a single lock acquisition.
    pub fn write_lines(&self, lines: &[&str]) {
        let mut sink = self.lock();
        for line in lines {
            sink.write_line(line);
        }
    }

    /// Run `f` with exclusive access to the sink (tests, flushing).
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        self.sink
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
