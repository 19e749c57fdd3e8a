//! Exit code constants for the soka CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid state)
//! - 2: Configuration failure (missing key, unsupported provider, bad value)
//! - 3: Generator failure (invalid name, unwritable file)
//! - 4: Runtime failure reported by the agent or tool layer

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid project state.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: missing API key, unsupported provider, malformed setting.
pub const CONFIGURATION_FAILURE: i32 = 2;

/// Generator failure: invalid names, parameter specs, or filesystem errors.
pub const GENERATOR_FAILURE: i32 = 3;

/// Agent or tool failure surfaced by the consuming runtime.
pub const RUNTIME_FAILURE: i32 = 4;
