//! Read-only container projection consumed by reports.

use serde::Serialize;

use kontener_core::SerialNumber;

use crate::cargo::Safety;
use crate::container::ChilledProfile;

/// Snapshot of a container's reportable state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerSummary {
    pub serial_number: SerialNumber,
    pub container_type: &'static str,
    pub capacity: f64,
    pub loaded_mass: f64,
    /// `loaded_mass` as a percentage of `capacity`.
    pub fill_percent: f64,
    pub height: f64,
    pub depth: f64,
    pub dry_mass: f64,
    pub total_mass: f64,
    /// Present for chilled containers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chilled: Option<ChilledProfile>,
    pub cargo: Vec<CargoLine>,
}

/// One held cargo item (1-based position in load order).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CargoLine {
    pub item: usize,
    pub mass: f64,
    pub safety: Safety,
}
