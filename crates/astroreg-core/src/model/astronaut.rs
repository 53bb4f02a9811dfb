use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::flight::FlightCode;

/// An astronaut known to the agency
///
/// The identifier plays the role of a national ID and never changes after
/// registration. `flight_history` records every flight the astronaut was ever
/// assigned to and is append-only: unassigning from a planned flight does not
/// prune it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Astronaut {
    /// Unique identifier (national ID equivalent)
    pub id: String,

    /// Display name
    pub name: String,

    /// Age as entered at registration
    pub age: i32,

    /// True unless the astronaut is currently flying or deceased
    pub available: bool,

    /// Set once the astronaut dies in a flight accident; never reset
    pub deceased: bool,

    /// Codes of every flight this astronaut was assigned to, in assignment order
    pub flight_history: Vec<FlightCode>,

    /// Timestamp when this astronaut was registered
    pub registered_at: DateTime<Utc>,
}

impl Astronaut {
    /// Create a new, available astronaut with an empty flight history
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            available: true,
            deceased: false,
            flight_history: Vec::new(),
            registered_at: Utc::now(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn is_deceased(&self) -> bool {
        self.deceased
    }

    /// Append a flight code to the history
    pub(crate) fn record_flight(&mut self, code: FlightCode) {
        self.flight_history.push(code);
    }

    /// Mark the astronaut as flying
    pub(crate) fn board(&mut self) {
        self.available = false;
    }

    /// Return the astronaut to the available pool after a successful flight
    ///
    /// Deceased astronauts stay unavailable.
    pub(crate) fn land(&mut self) {
        if !self.deceased {
            self.available = true;
        }
    }

    /// Record death in a flight accident
    pub(crate) fn die(&mut self) {
        self.deceased = true;
        self.available = false;
    }
}
