use astroreg_core_types::RequestId;
use thiserror::Error;

use crate::model::{FlightCode, FlightStatus};

/// Result type alias using AgencyError
pub type Result<T> = std::result::Result<T, AgencyError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable by tests and by anything
/// that reports errors outside the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// An astronaut identifier or flight code is not registered
    NotFound,
    /// A precondition on flight status or astronaut availability failed
    InvalidTransition,
    /// Registration would introduce a second record with the same key
    DuplicateKey,
    /// Input could not be parsed into the expected type
    InvalidInput,
    /// The registries disagree with each other
    InvariantViolation,

    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidTransition => "ERR_INVALID_TRANSITION",
            ExErrorKind::DuplicateKey => "ERR_DUPLICATE_KEY",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context for programmatic handling.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (astronaut identifier or flight code)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for agency operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgencyError {
    // ===== Lookup Errors =====
    /// No astronaut registered with this identifier
    #[error("Astronaut not found: {astronaut_id}")]
    AstronautNotFound { astronaut_id: String },

    /// No flight registered with this code
    #[error("Flight not found: {flight_code}")]
    FlightNotFound { flight_code: FlightCode },

    // ===== Transition Errors =====
    /// Crew changes and launch require a planned flight
    #[error("Flight {flight_code} is not planned (status: {status})")]
    FlightNotPlanned {
        flight_code: FlightCode,
        status: FlightStatus,
    },

    /// Accident and finish reports require a flight in progress
    #[error("Flight {flight_code} is not in flight (status: {status})")]
    FlightNotInFlight {
        flight_code: FlightCode,
        status: FlightStatus,
    },

    /// Astronaut is flying or deceased
    #[error("Astronaut {astronaut_id} is not available")]
    AstronautUnavailable { astronaut_id: String },

    /// A flight cannot launch without crew
    #[error("Flight {flight_code} cannot be launched: no passengers assigned")]
    NoPassengers { flight_code: FlightCode },

    // ===== Registration Errors =====
    #[error("Astronaut already registered: {astronaut_id}")]
    DuplicateAstronaut { astronaut_id: String },

    #[error("Flight already registered: {flight_code}")]
    DuplicateFlight { flight_code: FlightCode },

    // ===== Input / Validation Errors =====
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Registries are inconsistent with each other
    #[error("Invariant violation: {reason}")]
    InvariantViolation { reason: String },
}

impl AgencyError {
    /// Classify this error in the canonical taxonomy
    pub fn kind(&self) -> ExErrorKind {
        match self {
            AgencyError::AstronautNotFound { .. } | AgencyError::FlightNotFound { .. } => {
                ExErrorKind::NotFound
            }
            AgencyError::FlightNotPlanned { .. }
            | AgencyError::FlightNotInFlight { .. }
            | AgencyError::AstronautUnavailable { .. }
            | AgencyError::NoPassengers { .. } => ExErrorKind::InvalidTransition,
            AgencyError::DuplicateAstronaut { .. } | AgencyError::DuplicateFlight { .. } => {
                ExErrorKind::DuplicateKey
            }
            AgencyError::InvalidInput { .. } => ExErrorKind::InvalidInput,
            AgencyError::InvariantViolation { .. } => ExErrorKind::InvariantViolation,
        }
    }
}

/// Conversion from AgencyError to ExError
impl From<AgencyError> for ExError {
    fn from(err: AgencyError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        let ex = ExError::new(kind).with_message(message);

        match err {
            AgencyError::AstronautNotFound { astronaut_id }
            | AgencyError::AstronautUnavailable { astronaut_id }
            | AgencyError::DuplicateAstronaut { astronaut_id } => ex.with_entity_id(astronaut_id),

            AgencyError::FlightNotFound { flight_code }
            | AgencyError::FlightNotPlanned { flight_code, .. }
            | AgencyError::FlightNotInFlight { flight_code, .. }
            | AgencyError::NoPassengers { flight_code }
            | AgencyError::DuplicateFlight { flight_code } => {
                ex.with_entity_id(flight_code.to_string())
            }

            AgencyError::InvalidInput { .. } | AgencyError::InvariantViolation { .. } => ex,
        }
    }
}

impl From<std::io::Error> for ExError {
    fn from(err: std::io::Error) -> Self {
        ExError::new(ExErrorKind::Io).with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_not_found_kind() {
        let err = AgencyError::FlightNotFound { flight_code: 7 };
        let ex: ExError = err.into();

        assert_eq!(ex.kind(), ExErrorKind::NotFound);
        assert_eq!(ex.code(), "ERR_NOT_FOUND");
        assert_eq!(ex.entity_id(), Some("7"));
    }

    #[test]
    fn test_transition_errors_share_kind() {
        let errors = [
            AgencyError::FlightNotPlanned {
                flight_code: 1,
                status: FlightStatus::InFlight,
            },
            AgencyError::FlightNotInFlight {
                flight_code: 1,
                status: FlightStatus::Planned,
            },
            AgencyError::AstronautUnavailable {
                astronaut_id: "111".to_string(),
            },
            AgencyError::NoPassengers { flight_code: 1 },
        ];

        for err in errors {
            assert_eq!(err.kind(), ExErrorKind::InvalidTransition);
        }
    }

    #[test]
    fn test_display_includes_status_label() {
        let err = AgencyError::FlightNotInFlight {
            flight_code: 3,
            status: FlightStatus::Finished,
        };
        assert_eq!(
            err.to_string(),
            "Flight 3 is not in flight (status: Finished)"
        );
    }

    #[test]
    fn test_ex_error_display_with_context() {
        let ex = ExError::new(ExErrorKind::DuplicateKey)
            .with_op("register_astronaut")
            .with_entity_id("111")
            .with_message("already registered");

        let rendered = ex.to_string();
        assert!(rendered.starts_with("[ERR_DUPLICATE_KEY]"));
        assert!(rendered.contains("register_astronaut"));
        assert!(rendered.contains("(entity_id: 111)"));
    }
}
