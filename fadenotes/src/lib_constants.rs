pub const DEFAULT_CONFIG_FILE: &str = "/etc/fadenotes/fadenotes.toml";
pub const DEFAULT_DATA_DIR: &str = "/var/lib/fadenotes";
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";
pub const APP_CONFIG_ENV_PREFIX: &str = "FADENOTES_";

pub const NOTES_STATE_FILE: &str = "notes.json";
pub const ARCHIVE_STATE_FILE: &str = "archive.json";
pub const TOKEN_STATE_FILE: &str = "tokens.toml";

pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_DECAY_MINUTES: i64 = 1440;
pub const REVIVE_EXTENSION_MINUTES: i64 = 30;
