/// Fallback error code when the gateway reports a failure without one.
pub const NO_ERROR_CODE: &str = "No error code";

/// Fallback error message when the gateway reports a failure without one.
pub const NO_ERROR_MESSAGE: &str = "No error message";
