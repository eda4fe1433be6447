/// Event loop tuning bounds.
///
/// Below the minimum the loop spins the CPU; above the maximum key presses
/// feel sluggish.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;
pub const MIN_TICK_INTERVAL_MS: u64 = 10;
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;
pub const MIN_POLL_TIMEOUT_MS: u64 = 10;
pub const MAX_POLL_TIMEOUT_MS: u64 = 1000;

/// Upper bound for the input listener retry count
pub const MAX_INPUT_LISTENER_RETRIES: usize = 100;

/// Longest password the admin sign-in form accepts
pub const MAX_PASSWORD_LENGTH: usize = 512;

/// Longest email the admin sign-in form accepts
pub const MAX_EMAIL_LENGTH: usize = 254;
