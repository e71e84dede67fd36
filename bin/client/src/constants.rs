/// Client configuration filename, placed next to the executable
pub const CONFIG_FILE: &str = "mochi.ini";

/// Environment variable overriding the configuration file path
pub const CONFIG_ENV_VAR: &str = "MOCHI_CONFIG";

/// Default server URL written into a fresh configuration file
pub const DEFAULT_SERVER_URL: &str = "https://127.0.0.1:8080";

/// Default token written into a fresh configuration file
pub const DEFAULT_TOKEN: &str = "0000";

/// HTTP request timeout, so a dead server never hangs the CLI
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Liveness probe endpoint path
pub const TOUCH_ENDPOINT: &str = "/api/touch";

/// Version endpoint path
pub const VERSION_ENDPOINT: &str = "/api/version";

/// Package list endpoint path
pub const LIST_ENDPOINT: &str = "/api/list";

/// Manifest endpoint path prefix
pub const MANIFEST_ENDPOINT: &str = "/api/get";

/// Download endpoint path prefix
pub const DOWNLOAD_ENDPOINT: &str = "/api/download";
