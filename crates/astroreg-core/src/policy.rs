//! Duplicate-key policy trait and implementations
//!
//! Registration never checked identifiers for uniqueness historically; lookups
//! simply return the first record registered under a key. The policy injected
//! into `apply()` decides whether that behavior is kept or whether a second
//! registration under an existing key is refused.

use serde::{Deserialize, Serialize};

use crate::model::FlightCode;

/// Policy deciding whether registration may reuse an existing key
pub trait DuplicateKeyPolicy {
    /// Whether an astronaut may be registered when `astronaut_id` is already taken
    fn allow_duplicate_astronaut(&self, astronaut_id: &str) -> bool;

    /// Whether a flight may be registered when `flight_code` is already taken
    fn allow_duplicate_flight(&self, flight_code: FlightCode) -> bool;
}

/// Accept duplicates silently; lookups keep returning the first match
///
/// # Example
/// ```
/// use astroreg_core::policy::{AcceptDuplicatesPolicy, DuplicateKeyPolicy};
///
/// let policy = AcceptDuplicatesPolicy;
/// assert!(policy.allow_duplicate_astronaut("111"));
/// assert!(policy.allow_duplicate_flight(1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptDuplicatesPolicy;

impl DuplicateKeyPolicy for AcceptDuplicatesPolicy {
    fn allow_duplicate_astronaut(&self, _astronaut_id: &str) -> bool {
        true
    }

    fn allow_duplicate_flight(&self, _flight_code: FlightCode) -> bool {
        true
    }
}

/// Refuse any registration whose key is already present
///
/// # Example
/// ```
/// use astroreg_core::policy::{DuplicateKeyPolicy, RejectDuplicatesPolicy};
///
/// let policy = RejectDuplicatesPolicy;
/// assert!(!policy.allow_duplicate_astronaut("111"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectDuplicatesPolicy;

impl DuplicateKeyPolicy for RejectDuplicatesPolicy {
    fn allow_duplicate_astronaut(&self, _astronaut_id: &str) -> bool {
        false
    }

    fn allow_duplicate_flight(&self, _flight_code: FlightCode) -> bool {
        false
    }
}

/// Configuration-level selector for the duplicate-key policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateKeyMode {
    #[default]
    Accept,
    Reject,
}

impl DuplicateKeyMode {
    /// Resolve the mode to a policy object
    pub fn policy(&self) -> &'static dyn DuplicateKeyPolicy {
        match self {
            DuplicateKeyMode::Accept => &AcceptDuplicatesPolicy,
            DuplicateKeyMode::Reject => &RejectDuplicatesPolicy,
        }
    }
}
