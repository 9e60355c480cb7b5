use serde::Serialize;

use kontener_core::{DomainError, DomainResult, ValueObject};

/// Safety classification of a cargo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Safety {
    Safe,
    Hazardous,
}

impl Safety {
    pub fn as_str(self) -> &'static str {
        match self {
            Safety::Safe => "Safe",
            Safety::Hazardous => "Hazardous",
        }
    }
}

impl core::fmt::Display for Safety {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mass-bearing item with a safety flag. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cargo {
    safe: bool,
    load_mass: f64,
}

impl ValueObject for Cargo {}

impl Cargo {
    pub fn new(safe: bool, load_mass: f64) -> DomainResult<Self> {
        let load_mass = DomainError::ensure_positive("load_mass", load_mass)?;
        Ok(Self { safe, load_mass })
    }

    pub fn safe(load_mass: f64) -> DomainResult<Self> {
        Self::new(true, load_mass)
    }

    pub fn hazardous(load_mass: f64) -> DomainResult<Self> {
        Self::new(false, load_mass)
    }

    pub fn is_safe(&self) -> bool {
        self.safe
    }

    pub fn load_mass(&self) -> f64 {
        self.load_mass
    }

    pub fn safety(&self) -> Safety {
        if self.safe { Safety::Safe } else { Safety::Hazardous }
    }
}
