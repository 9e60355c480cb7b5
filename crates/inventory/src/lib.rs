//! Container inventory domain module.
//!
//! Business rules for containers, the cargo they hold and the storages (warehouse,
//! ship holds) that hold them, implemented as deterministic in-process logic (no
//! IO, no persistence). Hazards are reported through an injectable
//! [`kontener_events::HazardNotifier`].

pub mod cargo;
pub mod container;
pub mod ship;
pub mod storage;
pub mod summary;

pub use cargo::{Cargo, Safety};
pub use container::{
    ChilledProfile, Container, ContainerKind, Dimensions, GAS_RESIDUAL_RATIO,
    LIQUID_HAZARDOUS_FILL_RATIO, LIQUID_SAFE_FILL_RATIO, LoadOutcome,
};
pub use ship::Ship;
pub use storage::Storage;
pub use summary::{CargoLine, ContainerSummary};
