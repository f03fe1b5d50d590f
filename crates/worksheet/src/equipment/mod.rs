//! Equipment registry.
//!
//! Analysts add one entry per machine used to produce a 10 m² unit. Powered
//! machines are described by rated power and run time; forklift transport by
//! load and haul distance. Entries are append-only for the whole session.

mod registry;
pub mod types;

pub use registry::EquipmentRegistry;
pub use types::{EquipmentDraft, EquipmentEntry, EquipmentKind, PoweredKind};
