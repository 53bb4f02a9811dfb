use std::collections::HashMap;

use crate::errors::{AgencyError, Result};
use crate::model::{Flight, FlightCode};

/// Append-only collection of flight records
///
/// Same layout as the astronaut registry: insertion-ordered records plus a
/// first-occurrence index keyed by flight code.
#[derive(Debug, Clone, Default)]
pub struct FlightRegistry {
    records: Vec<Flight>,
    index: HashMap<FlightCode, usize>,
}

impl FlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a flight record
    pub fn register(&mut self, flight: Flight) {
        let position = self.records.len();
        self.index.entry(flight.code).or_insert(position);
        self.records.push(flight);
    }

    /// Get the first flight registered under `code`
    ///
    /// # Errors
    ///
    /// Returns `FlightNotFound` if no record has that code.
    pub fn find(&self, code: FlightCode) -> Result<&Flight> {
        let position = self.position(code)?;
        Ok(&self.records[position])
    }

    /// Get a mutable reference to the first flight registered under `code`
    ///
    /// # Errors
    ///
    /// Returns `FlightNotFound` if no record has that code.
    pub fn find_mut(&mut self, code: FlightCode) -> Result<&mut Flight> {
        let position = self.position(code)?;
        Ok(&mut self.records[position])
    }

    fn position(&self, code: FlightCode) -> Result<usize> {
        self.index
            .get(&code)
            .copied()
            .ok_or(AgencyError::FlightNotFound { flight_code: code })
    }

    pub fn contains(&self, code: FlightCode) -> bool {
        self.index.contains_key(&code)
    }

    /// All records in insertion order
    pub fn list(&self) -> &[Flight] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
