//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent across logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Entity identifiers
pub const FIELD_ASTRONAUT_ID: &str = "astronaut_id";
pub const FIELD_FLIGHT_CODE: &str = "flight_code";

// Collection sizes
pub const FIELD_PASSENGER_COUNT: &str = "passenger_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
