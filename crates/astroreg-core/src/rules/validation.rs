use crate::errors::{AgencyError, Result};
use crate::ops::Agency;

use super::invariants;

/// Validate the consistency of both registries
///
/// Checks, in order:
///
/// 1. Deceased astronauts are never available
/// 2. Every roster entry references a registered astronaut
/// 3. Every roster entry appears in that astronaut's flight history
/// 4. Lifecycle timestamps and outcome agree with each flight's status
///
/// # Errors
/// Returns the first violation found as `InvariantViolation`. For exhaustive
/// reporting, call the individual invariant functions directly.
pub fn validate_agency(agency: &Agency) -> Result<()> {
    if let Some(id) = invariants::find_deceased_but_available(agency).first() {
        return Err(AgencyError::InvariantViolation {
            reason: format!("deceased astronaut {} is marked available", id),
        });
    }

    if let Some((code, id)) = invariants::find_unknown_passengers(agency).first() {
        return Err(AgencyError::InvariantViolation {
            reason: format!("flight {} lists unknown passenger {}", code, id),
        });
    }

    if let Some((code, id)) = invariants::find_roster_entries_missing_from_history(agency).first()
    {
        return Err(AgencyError::InvariantViolation {
            reason: format!("flight {} is missing from the history of passenger {}", code, id),
        });
    }

    if let Some(code) = invariants::find_lifecycle_mismatches(agency).first() {
        return Err(AgencyError::InvariantViolation {
            reason: format!("flight {} has lifecycle fields inconsistent with its status", code),
        });
    }

    Ok(())
}
