/// Maximum number of members mentioned individually in one announcement;
/// overflow is folded into an "and N others!" suffix
pub const MAX_MENTIONS: usize = 10;

/// Colour for the birthday role when there is no previous role to inherit from (amber)
pub const DEFAULT_ROLE_COLOUR: u32 = 0xFFBF00;

/// Default cadence for the birthday tick (every 3 hours)
pub const DEFAULT_TICK_CRON: &str = "0 0 */3 * * *";

/// Timezone the tick cron expression is evaluated in unless overridden
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Maximum body length for the birthday listing before truncation
pub const MAX_LIST_LENGTH: usize = 1900;

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "heraldbot_rs=info";
