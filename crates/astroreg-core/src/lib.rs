//! astroreg Core - in-memory registry of astronauts and flights
//!
//! This crate provides:
//! - Astronaut and Flight models with the forward-only flight lifecycle
//! - Append-only registries with first-match lookup
//! - The agency coordinator enforcing the cross-registry rules
//!   (assignment, launch, accident and finish)
//! - A command inventory with an atomic `apply()` boundary
//! - Consistency validation, text rendering, configuration and the
//!   error/logging facilities

pub mod apply;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod render;
pub mod rules;

// Used by the logging macros
#[doc(hidden)]
pub use astroreg_core_types as core_types;

// Re-export commonly used types
pub use apply::apply;
pub use commands::Command;
pub use config::AgencyConfig;
pub use errors::{AgencyError, ExError, ExErrorKind, Result};
pub use model::{Astronaut, Flight, FlightCode, FlightStatus};
pub use ops::{Agency, AstronautRegistry, FlightRegistry};
pub use policy::{
    AcceptDuplicatesPolicy, DuplicateKeyMode, DuplicateKeyPolicy, RejectDuplicatesPolicy,
};
