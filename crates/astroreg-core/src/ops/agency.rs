//! Agency coordinator
//!
//! The agency owns both registries and is the only place where one
//! registry's change drives a change in the other. Every operation validates
//! all of its preconditions before touching state, so a failed call leaves
//! both registries exactly as they were.
//!
//! Each public operation logs:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure

use std::time::Instant;

use super::{AstronautRegistry, FlightRegistry};
use crate::errors::{AgencyError, Result};
use crate::model::{Astronaut, Flight, FlightCode, FlightStatus};
use crate::policy::DuplicateKeyPolicy;
use crate::{log_op_end, log_op_error, log_op_start};

/// Single owning context for astronauts and flights
#[derive(Debug, Clone, Default)]
pub struct Agency {
    pub(crate) astronauts: AstronautRegistry,
    pub(crate) flights: FlightRegistry,
}

/// Run `body`, wrapping it in start/end/error events for `op`
fn logged<T>(op: &'static str, body: impl FnOnce() -> Result<T>) -> Result<T> {
    let start = Instant::now();
    let result = body();
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
        }
    }

    result
}

impl Agency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn astronauts(&self) -> &AstronautRegistry {
        &self.astronauts
    }

    pub fn flights(&self) -> &FlightRegistry {
        &self.flights
    }

    /// Register a new astronaut
    ///
    /// The record enters the registry available, alive and with no flight
    /// history, whatever state the caller built it in.
    ///
    /// # Errors
    /// * `DuplicateAstronaut` - identifier taken and the policy refuses duplicates
    pub fn register_astronaut(
        &mut self,
        mut astronaut: Astronaut,
        policy: &dyn DuplicateKeyPolicy,
    ) -> Result<()> {
        log_op_start!("register_astronaut", astronaut_id = %astronaut.id);
        logged("register_astronaut", || {
            if self.astronauts.contains(&astronaut.id)
                && !policy.allow_duplicate_astronaut(&astronaut.id)
            {
                return Err(AgencyError::DuplicateAstronaut {
                    astronaut_id: astronaut.id,
                });
            }
            astronaut.available = true;
            astronaut.deceased = false;
            astronaut.flight_history.clear();
            self.astronauts.register(astronaut);
            Ok(())
        })
    }

    /// Register a new flight, initially planned with no passengers
    ///
    /// # Errors
    /// * `DuplicateFlight` - code taken and the policy refuses duplicates
    pub fn register_flight(
        &mut self,
        flight: Flight,
        policy: &dyn DuplicateKeyPolicy,
    ) -> Result<()> {
        log_op_start!("register_flight", flight_code = flight.code);
        logged("register_flight", || {
            if self.flights.contains(flight.code) && !policy.allow_duplicate_flight(flight.code) {
                return Err(AgencyError::DuplicateFlight {
                    flight_code: flight.code,
                });
            }
            self.flights.register(flight);
            Ok(())
        })
    }

    /// Put an available astronaut on a planned flight
    ///
    /// Appends the astronaut to the roster and the flight code to the
    /// astronaut's history.
    ///
    /// # Errors
    /// * `FlightNotFound` / `AstronautNotFound`
    /// * `FlightNotPlanned` - flight already launched or finished
    /// * `AstronautUnavailable` - astronaut flying or deceased
    pub fn assign(&mut self, astronaut_id: &str, flight_code: FlightCode) -> Result<()> {
        log_op_start!("assign", astronaut_id = %astronaut_id, flight_code = flight_code);
        logged("assign", || {
            let flight = self.flights.find_mut(flight_code)?;
            ensure_planned(flight)?;

            let astronaut = self.astronauts.find_mut(astronaut_id)?;
            if !astronaut.is_available() {
                return Err(AgencyError::AstronautUnavailable {
                    astronaut_id: astronaut_id.to_string(),
                });
            }

            flight.add_passenger(astronaut_id.to_string());
            astronaut.record_flight(flight_code);
            Ok(())
        })
    }

    /// Take an astronaut off a planned flight's roster
    ///
    /// Absent astronauts are a no-op. The astronaut's flight history is left
    /// untouched. Returns whether a roster entry was removed.
    ///
    /// # Errors
    /// * `FlightNotFound`
    /// * `FlightNotPlanned`
    pub fn unassign(&mut self, astronaut_id: &str, flight_code: FlightCode) -> Result<bool> {
        log_op_start!("unassign", astronaut_id = %astronaut_id, flight_code = flight_code);
        logged("unassign", || {
            let flight = self.flights.find_mut(flight_code)?;
            ensure_planned(flight)?;
            Ok(flight.remove_passenger(astronaut_id))
        })
    }

    /// Launch a planned flight that has crew
    ///
    /// Every passenger becomes unavailable.
    ///
    /// # Errors
    /// * `FlightNotFound`
    /// * `FlightNotPlanned`
    /// * `NoPassengers`
    /// * `AstronautNotFound` - roster references an unknown astronaut
    pub fn launch(&mut self, flight_code: FlightCode) -> Result<()> {
        log_op_start!("launch", flight_code = flight_code);
        logged("launch", || {
            let flight = self.flights.find_mut(flight_code)?;
            ensure_planned(flight)?;
            if !flight.has_passengers() {
                return Err(AgencyError::NoPassengers { flight_code });
            }

            let crew = resolve_crew(&self.astronauts, &flight.passengers)?;
            tracing::debug!(
                component = module_path!(),
                op = "launch",
                flight_code = flight_code,
                passenger_count = crew.len(),
                "crew boarding"
            );

            flight.mark_launched();
            for position in crew {
                self.astronauts.at_mut(position).board();
            }
            Ok(())
        })
    }

    /// Record that an in-flight mission ended in an accident
    ///
    /// The flight finishes unsuccessfully and every passenger is marked
    /// deceased and unavailable, permanently.
    ///
    /// # Errors
    /// * `FlightNotFound`
    /// * `FlightNotInFlight`
    /// * `AstronautNotFound` - roster references an unknown astronaut
    pub fn report_accident(&mut self, flight_code: FlightCode) -> Result<()> {
        log_op_start!("report_accident", flight_code = flight_code);
        logged("report_accident", || {
            let flight = self.flights.find_mut(flight_code)?;
            ensure_in_flight(flight)?;

            let crew = resolve_crew(&self.astronauts, &flight.passengers)?;

            flight.mark_finished(false);
            for position in crew {
                self.astronauts.at_mut(position).die();
            }
            Ok(())
        })
    }

    /// Finish an in-flight mission with the given outcome
    ///
    /// On success every passenger becomes available again. On failure
    /// availability is left as it is, so the crew stays unavailable.
    ///
    /// # Errors
    /// * `FlightNotFound`
    /// * `FlightNotInFlight`
    /// * `AstronautNotFound` - roster references an unknown astronaut
    pub fn finish(&mut self, flight_code: FlightCode, succeeded: bool) -> Result<()> {
        log_op_start!("finish", flight_code = flight_code, succeeded = succeeded);
        logged("finish", || {
            let flight = self.flights.find_mut(flight_code)?;
            ensure_in_flight(flight)?;

            let crew = if succeeded {
                resolve_crew(&self.astronauts, &flight.passengers)?
            } else {
                Vec::new()
            };

            flight.mark_finished(succeeded);
            for position in crew {
                self.astronauts.at_mut(position).land();
            }
            Ok(())
        })
    }

    /// All flights in registration order
    pub fn list_flights(&self) -> &[Flight] {
        self.flights.list()
    }

    /// All astronauts in registration order
    pub fn list_astronauts(&self) -> &[Astronaut] {
        self.astronauts.list()
    }

    /// Deceased astronauts in registration order
    pub fn list_deceased_astronauts(&self) -> Vec<&Astronaut> {
        self.astronauts.list_deceased()
    }
}

fn ensure_planned(flight: &Flight) -> Result<()> {
    match flight.status {
        FlightStatus::Planned => Ok(()),
        status => Err(AgencyError::FlightNotPlanned {
            flight_code: flight.code,
            status,
        }),
    }
}

fn ensure_in_flight(flight: &Flight) -> Result<()> {
    match flight.status {
        FlightStatus::InFlight => Ok(()),
        status => Err(AgencyError::FlightNotInFlight {
            flight_code: flight.code,
            status,
        }),
    }
}

/// Resolve every roster entry to a registry position before anything mutates
fn resolve_crew(astronauts: &AstronautRegistry, passengers: &[String]) -> Result<Vec<usize>> {
    passengers.iter().map(|id| astronauts.position(id)).collect()
}
