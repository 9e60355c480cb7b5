//! Hazard signals raised by containers.
//!
//! A hazard is reported, never thrown: the container rejects the operation, keeps
//! its state and hands a [`HazardReport`] to whatever [`HazardNotifier`] it was
//! built with.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kontener_core::SerialNumber;

use crate::event::Event;

/// Kind of hazard a container can suffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hazard {
    /// A load would push the container past its effective capacity.
    Overfill,
}

impl Hazard {
    pub fn as_str(self) -> &'static str {
        match self {
            Hazard::Overfill => "Overfill",
        }
    }
}

impl core::fmt::Display for Hazard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event: a container rejected an operation because of a hazard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardReport {
    pub serial_number: SerialNumber,
    pub hazard: Hazard,
    /// Mass of the cargo that was refused.
    pub attempted_mass: f64,
    /// Loaded mass at the time of the attempt (unchanged by the rejection).
    pub loaded_mass: f64,
    /// Effective capacity the attempt was checked against.
    pub limit: f64,
    pub occurred_at: DateTime<Utc>,
}

impl Event for HazardReport {
    fn event_type(&self) -> &'static str {
        match self.hazard {
            Hazard::Overfill => "container.hazard.overfill",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Sink for hazard signals.
///
/// Implementations must not fail and must not reach back into the container;
/// the only permitted effect is reporting (logging, alerting, recording).
pub trait HazardNotifier: Send + Sync + core::fmt::Debug {
    fn warn_hazard(&self, report: &HazardReport);
}

impl<N> HazardNotifier for Arc<N>
where
    N: HazardNotifier + ?Sized,
{
    fn warn_hazard(&self, report: &HazardReport) {
        (**self).warn_hazard(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> HazardReport {
        HazardReport {
            serial_number: SerialNumber::parse("KON-C-1").unwrap(),
            hazard: Hazard::Overfill,
            attempted_mass: 900.0,
            loaded_mass: 200.0,
            limit: 1000.0,
            occurred_at: Utc::now(),
        }
    }

    #[test]
    fn overfill_report_has_stable_event_type() {
        let r = report();
        assert_eq!(r.event_type(), "container.hazard.overfill");
        assert_eq!(r.version(), 1);
        assert_eq!(r.occurred_at(), r.occurred_at);
    }

    #[test]
    fn report_serializes_hazard_in_snake_case() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["hazard"], "overfill");
        assert_eq!(json["serial_number"], "KON-C-1");
    }
}
