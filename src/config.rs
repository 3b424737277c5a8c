/// Configuration constants for the application
pub struct Config;

impl Config {
    /// How long a transient notification stays on screen, in milliseconds
    pub const TOAST_DURATION_MS: u32 = 3_000;
}
