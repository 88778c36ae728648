//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_CONTRACT: &str = "contract";
pub const FIELD_METHOD: &str = "method";
pub const FIELD_SIGNATURE: &str = "signature";

// Collection sizes
pub const FIELD_METHOD_COUNT: &str = "method_count";
pub const FIELD_NETWORK_COUNT: &str = "network_count";

// Outcome flags
pub const FIELD_CHANGED: &str = "changed";
pub const FIELD_EQUIVALENT: &str = "equivalent";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
