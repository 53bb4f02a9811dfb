use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric code naming a flight
pub type FlightCode = i64;

/// Lifecycle status of a flight
///
/// Transitions are forward-only: Planned -> InFlight -> Finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    Planned,
    InFlight,
    Finished,
}

impl FlightStatus {
    /// Human-readable label used in listings
    pub fn label(&self) -> &'static str {
        match self {
            FlightStatus::Planned => "Planned",
            FlightStatus::InFlight => "In Flight",
            FlightStatus::Finished => "Finished",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, FlightStatus::Finished)
    }
}

impl std::fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A flight planned, flown or finished by the agency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique flight code
    pub code: FlightCode,

    /// Identifiers of the astronauts currently assigned, in assignment order
    pub passengers: Vec<String>,

    /// Current lifecycle status
    pub status: FlightStatus,

    /// Whether the mission succeeded; meaningful only once Finished
    pub succeeded: bool,

    /// Timestamp when this flight was registered
    pub registered_at: DateTime<Utc>,

    /// Set when the flight is launched
    pub launched_at: Option<DateTime<Utc>>,

    /// Set when the flight finishes, by accident or otherwise
    pub finished_at: Option<DateTime<Utc>>,
}

impl Flight {
    /// Create a new planned flight with no passengers
    pub fn new(code: FlightCode) -> Self {
        Self {
            code,
            passengers: Vec::new(),
            status: FlightStatus::Planned,
            succeeded: false,
            registered_at: Utc::now(),
            launched_at: None,
            finished_at: None,
        }
    }

    pub fn is_planned(&self) -> bool {
        self.status == FlightStatus::Planned
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == FlightStatus::InFlight
    }

    pub fn has_passengers(&self) -> bool {
        !self.passengers.is_empty()
    }

    /// Outcome of the mission, or None while not yet finished
    pub fn outcome(&self) -> Option<bool> {
        self.status.is_terminal().then_some(self.succeeded)
    }

    pub(crate) fn add_passenger(&mut self, astronaut_id: String) {
        self.passengers.push(astronaut_id);
    }

    /// Remove the first occurrence of an astronaut from the roster
    ///
    /// Returns false when the astronaut was not on the roster.
    pub(crate) fn remove_passenger(&mut self, astronaut_id: &str) -> bool {
        match self.passengers.iter().position(|id| id == astronaut_id) {
            Some(pos) => {
                self.passengers.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn mark_launched(&mut self) {
        self.status = FlightStatus::InFlight;
        self.launched_at = Some(Utc::now());
    }

    pub(crate) fn mark_finished(&mut self, succeeded: bool) {
        self.status = FlightStatus::Finished;
        self.succeeded = succeeded;
        self.finished_at = Some(Utc::now());
    }
}
