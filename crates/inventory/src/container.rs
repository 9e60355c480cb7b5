use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use kontener_core::{DomainError, DomainResult, Entity, SerialNumber, ValueObject};
use kontener_events::{Hazard, HazardNotifier, HazardReport, TracingHazardNotifier};

use crate::cargo::Cargo;
use crate::summary::{CargoLine, ContainerSummary};

/// Share of capacity a liquid container accepts for safe cargo.
pub const LIQUID_SAFE_FILL_RATIO: f64 = 0.9;
/// Share of capacity a liquid container accepts for hazardous cargo.
pub const LIQUID_HAZARDOUS_FILL_RATIO: f64 = 0.5;
/// Share of the loaded mass a gas container keeps after being emptied.
pub const GAS_RESIDUAL_RATIO: f64 = 0.05;

/// Physical dimensions of a container (kg / cm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    capacity: f64,
    height: f64,
    dry_mass: f64,
    depth: f64,
}

impl ValueObject for Dimensions {}

impl Dimensions {
    pub fn new(capacity: f64, height: f64, dry_mass: f64, depth: f64) -> DomainResult<Self> {
        Ok(Self {
            capacity: DomainError::ensure_positive("capacity", capacity)?,
            height: DomainError::ensure_positive("height", height)?,
            dry_mass: DomainError::ensure_positive("dry_mass", dry_mass)?,
            depth: DomainError::ensure_positive("depth", depth)?,
        })
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn dry_mass(&self) -> f64 {
        self.dry_mass
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }
}

/// Cold-chain settings of a chilled container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChilledProfile {
    type_of_cargo: String,
    /// Guaranteed maximum temperature (°C).
    temperature: f64,
}

impl ChilledProfile {
    pub fn type_of_cargo(&self) -> &str {
        &self.type_of_cargo
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

/// Container kind. Each kind selects the capacity and emptying rules applied to
/// the container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContainerKind {
    Standard,
    Liquid,
    Gas,
    Chilled(ChilledProfile),
}

impl ContainerKind {
    pub fn chilled(type_of_cargo: impl Into<String>, temperature: f64) -> DomainResult<Self> {
        let type_of_cargo = type_of_cargo.into();
        if type_of_cargo.trim().is_empty() {
            return Err(DomainError::invalid_argument("type_of_cargo cannot be empty"));
        }
        if !temperature.is_finite() {
            return Err(DomainError::invalid_argument(format!(
                "temperature must be a finite number (received: {temperature})"
            )));
        }
        Ok(Self::Chilled(ChilledProfile {
            type_of_cargo,
            temperature,
        }))
    }

    /// Human-readable type tag used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ContainerKind::Standard => "Container",
            ContainerKind::Liquid => "ContainerForLiquids",
            ContainerKind::Gas => "GasContainer",
            ContainerKind::Chilled(_) => "ChilledContainer",
        }
    }

    /// Code embedded in generated serial numbers.
    pub fn code(&self) -> &'static str {
        match self {
            ContainerKind::Standard => "C",
            ContainerKind::Liquid => "L",
            ContainerKind::Gas => "G",
            ContainerKind::Chilled(_) => "R",
        }
    }

    pub fn chilled_profile(&self) -> Option<&ChilledProfile> {
        match self {
            ContainerKind::Chilled(profile) => Some(profile),
            _ => None,
        }
    }

    /// Maximum total loaded mass allowed when loading `cargo`.
    ///
    /// Evaluated per attempt: a liquid container's limit depends on the safety of
    /// the incoming cargo, not on what it already holds.
    pub fn effective_capacity(&self, capacity: f64, cargo: &Cargo) -> f64 {
        match self {
            ContainerKind::Liquid if cargo.is_safe() => capacity * LIQUID_SAFE_FILL_RATIO,
            ContainerKind::Liquid => capacity * LIQUID_HAZARDOUS_FILL_RATIO,
            ContainerKind::Standard | ContainerKind::Gas | ContainerKind::Chilled(_) => capacity,
        }
    }

    /// Mass left in the container after it has been emptied.
    pub fn residual_mass(&self, loaded_mass: f64) -> f64 {
        match self {
            ContainerKind::Gas => loaded_mass * GAS_RESIDUAL_RATIO,
            ContainerKind::Standard | ContainerKind::Liquid | ContainerKind::Chilled(_) => 0.0,
        }
    }
}

/// Result of a load attempt that passed compatibility checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadOutcome {
    /// Cargo appended; `loaded_mass` is the new total.
    Accepted { loaded_mass: f64 },
    /// Cargo refused and the hazard reported; container state is unchanged.
    Rejected { hazard: Hazard, limit: f64 },
}

impl LoadOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, LoadOutcome::Accepted { .. })
    }
}

/// A physical unit holding cargo.
#[derive(Debug)]
pub struct Container {
    serial_number: SerialNumber,
    kind: ContainerKind,
    dimensions: Dimensions,
    loaded_mass: f64,
    cargo: Vec<Cargo>,
    notifier: Arc<dyn HazardNotifier>,
}

impl Container {
    /// Create an empty container with a generated serial number.
    pub fn new(kind: ContainerKind, dimensions: Dimensions) -> Self {
        let serial_number = SerialNumber::generate(kind.code());
        Self::assemble(serial_number, kind, dimensions)
    }

    /// Create an empty container with an explicit serial number.
    pub fn with_serial_number(
        kind: ContainerKind,
        dimensions: Dimensions,
        serial_number: &str,
    ) -> DomainResult<Self> {
        let serial_number = SerialNumber::parse(serial_number)?;
        Ok(Self::assemble(serial_number, kind, dimensions))
    }

    fn assemble(serial_number: SerialNumber, kind: ContainerKind, dimensions: Dimensions) -> Self {
        tracing::debug!(
            serial_number = %serial_number,
            container_type = kind.label(),
            capacity = dimensions.capacity,
            "container created"
        );
        Self {
            serial_number,
            kind,
            dimensions,
            loaded_mass: 0.0,
            cargo: Vec::new(),
            notifier: Arc::new(TracingHazardNotifier),
        }
    }

    /// Replace the hazard notifier (defaults to [`TracingHazardNotifier`]).
    pub fn with_notifier(mut self, notifier: Arc<dyn HazardNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn serial_number(&self) -> &SerialNumber {
        &self.serial_number
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn capacity(&self) -> f64 {
        self.dimensions.capacity
    }

    pub fn height(&self) -> f64 {
        self.dimensions.height
    }

    pub fn dry_mass(&self) -> f64 {
        self.dimensions.dry_mass
    }

    pub fn depth(&self) -> f64 {
        self.dimensions.depth
    }

    pub fn loaded_mass(&self) -> f64 {
        self.loaded_mass
    }

    /// Held cargo in load order.
    pub fn cargo(&self) -> &[Cargo] {
        &self.cargo
    }

    pub fn total_mass(&self) -> f64 {
        self.dimensions.dry_mass + self.loaded_mass
    }

    pub fn fill_percent(&self) -> f64 {
        self.loaded_mass / self.dimensions.capacity * 100.0
    }

    pub fn chilled_profile(&self) -> Option<&ChilledProfile> {
        self.kind.chilled_profile()
    }

    /// Load cargo into a standard, liquid or gas container.
    ///
    /// Chilled containers need the cargo's type and required temperature; use
    /// [`Container::load_chilled`] for them.
    pub fn load_container(&mut self, cargo: Cargo) -> DomainResult<LoadOutcome> {
        if let ContainerKind::Chilled(_) = self.kind {
            return Err(DomainError::invalid_argument(format!(
                "chilled container {} requires a cargo type and required temperature",
                self.serial_number
            )));
        }
        Ok(self.accept_or_signal(cargo))
    }

    /// Load cargo into a chilled container.
    ///
    /// Checks temperature first, then cargo type, then capacity.
    pub fn load_chilled(
        &mut self,
        cargo: Cargo,
        type_of_cargo: &str,
        required_temperature: f64,
    ) -> DomainResult<LoadOutcome> {
        let ContainerKind::Chilled(profile) = &self.kind else {
            return Err(DomainError::invalid_argument(format!(
                "{} {} is not a chilled container",
                self.kind.label(),
                self.serial_number
            )));
        };
        if !required_temperature.is_finite() {
            return Err(DomainError::invalid_argument(format!(
                "required_temperature must be a finite number (received: {required_temperature})"
            )));
        }
        if required_temperature > profile.temperature {
            return Err(DomainError::IncompatibleTemperature {
                required: required_temperature,
                maximum: profile.temperature,
            });
        }
        if type_of_cargo != profile.type_of_cargo {
            return Err(DomainError::IncompatibleCargoType {
                expected: profile.type_of_cargo.clone(),
                received: type_of_cargo.to_string(),
            });
        }
        Ok(self.accept_or_signal(cargo))
    }

    fn accept_or_signal(&mut self, cargo: Cargo) -> LoadOutcome {
        let limit = self.kind.effective_capacity(self.dimensions.capacity, &cargo);

        if self.loaded_mass + cargo.load_mass() > limit {
            self.notifier.warn_hazard(&HazardReport {
                serial_number: self.serial_number.clone(),
                hazard: Hazard::Overfill,
                attempted_mass: cargo.load_mass(),
                loaded_mass: self.loaded_mass,
                limit,
                occurred_at: Utc::now(),
            });
            return LoadOutcome::Rejected {
                hazard: Hazard::Overfill,
                limit,
            };
        }

        self.cargo.push(cargo);
        self.loaded_mass += cargo.load_mass();
        tracing::info!(
            serial_number = %self.serial_number,
            load_mass = cargo.load_mass(),
            loaded_mass = self.loaded_mass,
            "container loaded"
        );
        LoadOutcome::Accepted {
            loaded_mass: self.loaded_mass,
        }
    }

    /// Remove all cargo. Gas containers keep a residual share of the mass.
    pub fn empty_container(&mut self) {
        self.loaded_mass = self.kind.residual_mass(self.loaded_mass);
        self.cargo.clear();
        tracing::info!(
            serial_number = %self.serial_number,
            residual_mass = self.loaded_mass,
            "container emptied"
        );
    }

    /// Read-only projection consumed by reports.
    pub fn describe(&self) -> ContainerSummary {
        ContainerSummary {
            serial_number: self.serial_number.clone(),
            container_type: self.kind.label(),
            capacity: self.dimensions.capacity,
            loaded_mass: self.loaded_mass,
            fill_percent: self.fill_percent(),
            height: self.dimensions.height,
            depth: self.dimensions.depth,
            dry_mass: self.dimensions.dry_mass,
            total_mass: self.total_mass(),
            chilled: self.kind.chilled_profile().cloned(),
            cargo: self
                .cargo
                .iter()
                .enumerate()
                .map(|(i, c)| CargoLine {
                    item: i + 1,
                    mass: c.load_mass(),
                    safety: c.safety(),
                })
                .collect(),
        }
    }
}

impl Entity for Container {
    type Id = SerialNumber;

    fn id(&self) -> &Self::Id {
        &self.serial_number
    }
}
