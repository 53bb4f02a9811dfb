//! Command types representing every state-changing agency operation
//!
//! This module defines the command inventory that serves as the entry point
//! for functional-boundary operations via the `apply()` function. Listing is
//! read-only and goes through `render` instead.

use crate::model::FlightCode;

/// Command enum representing all mutating operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new astronaut (available, no flight history)
    RegisterAstronaut { id: String, name: String, age: i32 },

    /// Register a new planned flight with no passengers
    RegisterFlight { code: FlightCode },

    /// Assign an astronaut to a planned flight
    Assign {
        astronaut_id: String,
        flight_code: FlightCode,
    },

    /// Remove an astronaut from a planned flight's roster
    Unassign {
        astronaut_id: String,
        flight_code: FlightCode,
    },

    /// Launch a planned flight that has passengers
    Launch { flight_code: FlightCode },

    /// Record an accident on an in-flight mission
    ReportAccident { flight_code: FlightCode },

    /// Finish an in-flight mission with an outcome
    Finish {
        flight_code: FlightCode,
        succeeded: bool,
    },
}

impl Command {
    /// Stable operation name, matching the `op` field of log events
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::RegisterAstronaut { .. } => "register_astronaut",
            Command::RegisterFlight { .. } => "register_flight",
            Command::Assign { .. } => "assign",
            Command::Unassign { .. } => "unassign",
            Command::Launch { .. } => "launch",
            Command::ReportAccident { .. } => "report_accident",
            Command::Finish { .. } => "finish",
        }
    }
}
