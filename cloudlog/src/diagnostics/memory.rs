use std::sync::{Arc, Mutex, PoisonError};

use super::Diagnostics;
use crate::Error;

/// A diagnostics channel for testing that stores every report, rendered with `Display`.
#[derive(Debug)]
pub struct MemoryDiagnostics {
    /// Shared vector storing all reported errors.
    pub reports: Arc<Mutex<Vec<String>>>,
}

impl MemoryDiagnostics {
    /// Creates a new channel and returns both the channel and a handle to the report storage.
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let reports = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                reports: reports.clone(),
            },
            reports,
        )
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn report(&self, error: &Error) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error.to_string());
    }
}
