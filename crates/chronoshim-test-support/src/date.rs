//! Test date constructor — records every construction it receives.

use std::sync::{Arc, Mutex};

use chronoshim_core::date::{DateArgs, DateConstructor, DateValue};

/// A date constructor that records the arguments of every `construct` call
/// and answers each with the same configured value.
///
/// Clones share one record, so a test can keep a clone after moving the
/// recorder into an override.
#[derive(Debug, Clone)]
pub struct RecordingDate {
    result: DateValue,
    received: Arc<Mutex<Vec<DateArgs>>>,
}

impl RecordingDate {
    /// Create a recorder that returns `result` from every construction.
    #[must_use]
    pub fn new(result: DateValue) -> Self {
        Self {
            result,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a snapshot of all arguments received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn received(&self) -> Vec<DateArgs> {
        self.received.lock().unwrap().clone()
    }
}

impl DateConstructor for RecordingDate {
    fn construct(&self, args: &DateArgs) -> DateValue {
        self.received.lock().unwrap().push(args.clone());
        self.result
    }
}
