/// Default configuration file path
pub const DEFAULT_CONFIG_FILE: &str = "server.ini";

/// Default package storage root
pub const DEFAULT_DATA_DIR: &str = "instance";

/// Default server host
pub const DEFAULT_HOST: &str = "0.0.0.0";
