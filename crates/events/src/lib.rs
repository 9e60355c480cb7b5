//! Container events and hazard signalling.

pub mod event;
pub mod hazard;
pub mod notifier;

pub use event::Event;
pub use hazard::{Hazard, HazardNotifier, HazardReport};
pub use notifier::{RecordingHazardNotifier, TracingHazardNotifier};
