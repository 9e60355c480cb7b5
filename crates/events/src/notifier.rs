//! Hazard notifier implementations.

use std::sync::{Mutex, PoisonError};

use crate::event::Event;
use crate::hazard::{HazardNotifier, HazardReport};

/// Default notifier: emits a `tracing` warning per hazard.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHazardNotifier;

impl HazardNotifier for TracingHazardNotifier {
    fn warn_hazard(&self, report: &HazardReport) {
        tracing::warn!(
            event_type = report.event_type(),
            event_version = report.version(),
            occurred_at = %report.occurred_at(),
            serial_number = %report.serial_number,
            hazard = %report.hazard,
            attempted_mass = report.attempted_mass,
            loaded_mass = report.loaded_mass,
            limit = report.limit,
            "container has suffered a hazard"
        );
    }
}

/// In-memory notifier for tests/dev.
///
/// Keeps every report in arrival order. Share it through an `Arc` to inspect the
/// reports after handing a clone to a container.
#[derive(Debug, Default)]
pub struct RecordingHazardNotifier {
    reports: Mutex<Vec<HazardReport>>,
}

impl RecordingHazardNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded reports.
    pub fn reports(&self) -> Vec<HazardReport> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl HazardNotifier for RecordingHazardNotifier {
    fn warn_hazard(&self, report: &HazardReport) {
        // A poisoned lock still holds a usable Vec; keep recording.
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(report.clone());
    }
}
