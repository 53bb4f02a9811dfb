//! Functional-boundary apply function
//!
//! This module provides the `apply()` function, the canonical entry point for
//! atomic state changes driven by the command loop.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: Either the command succeeds and a valid new state is
//!   returned, or it fails and the caller's copy of the old state is untouched
//! - **No panics**: Invalid input returns typed errors
//! - **Validated**: The cross-registry invariants are checked before the new
//!   state is handed back
//!
//! ## Example
//!
//! ```
//! use astroreg_core::{apply, policy::AcceptDuplicatesPolicy, Agency, Command};
//!
//! let state = Agency::new();
//! let cmd = Command::RegisterFlight { code: 1 };
//!
//! let new_state = apply(state, cmd, &AcceptDuplicatesPolicy).unwrap();
//! assert_eq!(new_state.flights().len(), 1);
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::model::{Astronaut, Flight};
use crate::ops::Agency;
use crate::policy::DuplicateKeyPolicy;
use crate::rules::validation;

/// Apply a command to an agency, returning the new agency state
///
/// Takes ownership of the current state. Callers that need the old state on
/// failure pass a clone, as the menu loop does.
///
/// # Errors
///
/// Returns the coordinator's error when a precondition fails, or
/// `InvariantViolation` if the resulting state would be inconsistent.
pub fn apply(mut state: Agency, cmd: Command, policy: &dyn DuplicateKeyPolicy) -> Result<Agency> {
    match cmd {
        Command::RegisterAstronaut { id, name, age } => {
            state.register_astronaut(Astronaut::new(id, name, age), policy)?;
        }

        Command::RegisterFlight { code } => {
            state.register_flight(Flight::new(code), policy)?;
        }

        Command::Assign {
            astronaut_id,
            flight_code,
        } => {
            state.assign(&astronaut_id, flight_code)?;
        }

        Command::Unassign {
            astronaut_id,
            flight_code,
        } => {
            state.unassign(&astronaut_id, flight_code)?;
        }

        Command::Launch { flight_code } => {
            state.launch(flight_code)?;
        }

        Command::ReportAccident { flight_code } => {
            state.report_accident(flight_code)?;
        }

        Command::Finish {
            flight_code,
            succeeded,
        } => {
            state.finish(flight_code, succeeded)?;
        }
    }

    validation::validate_agency(&state)?;
    Ok(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::errors::AgencyError;
    use crate::model::FlightStatus;
    use crate::policy::{AcceptDuplicatesPolicy, RejectDuplicatesPolicy};

    fn run(state: Agency, cmds: Vec<Command>) -> Agency {
        cmds.into_iter().fold(state, |s, cmd| {
            apply(s, cmd, &AcceptDuplicatesPolicy).unwrap()
        })
    }

    #[test]
    fn test_apply_register_astronaut() {
        let state = apply(
            Agency::new(),
            Command::RegisterAstronaut {
                id: "111".to_string(),
                name: "Yuri".to_string(),
                age: 27,
            },
            &AcceptDuplicatesPolicy,
        )
        .unwrap();

        let astronaut = state.astronauts().find("111").unwrap();
        assert_eq!(astronaut.name, "Yuri");
        assert!(astronaut.is_available());
    }

    #[test]
    fn test_apply_full_lifecycle() {
        let state = run(
            Agency::new(),
            vec![
                Command::RegisterAstronaut {
                    id: "222".to_string(),
                    name: "Valentina".to_string(),
                    age: 26,
                },
                Command::RegisterFlight { code: 2 },
                Command::Assign {
                    astronaut_id: "222".to_string(),
                    flight_code: 2,
                },
                Command::Launch { flight_code: 2 },
                Command::Finish {
                    flight_code: 2,
                    succeeded: true,
                },
            ],
        );

        let flight = state.flights().find(2).unwrap();
        assert_eq!(flight.status, FlightStatus::Finished);
        assert!(flight.succeeded);
        assert!(state.astronauts().find("222").unwrap().is_available());
    }

    #[test]
    fn test_apply_atomic_on_error() {
        let state = run(Agency::new(), vec![Command::RegisterFlight { code: 3 }]);

        let result = apply(
            state.clone(),
            Command::Launch { flight_code: 3 },
            &AcceptDuplicatesPolicy,
        );

        assert!(matches!(result, Err(AgencyError::NoPassengers { .. })));
        assert!(state.flights().find(3).unwrap().is_planned());
    }

    #[test]
    fn test_apply_respects_duplicate_policy() {
        let state = run(Agency::new(), vec![Command::RegisterFlight { code: 1 }]);

        let result = apply(
            state,
            Command::RegisterFlight { code: 1 },
            &RejectDuplicatesPolicy,
        );

        assert!(matches!(result, Err(AgencyError::DuplicateFlight { .. })));
    }
}
