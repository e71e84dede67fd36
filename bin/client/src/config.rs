//! Client configuration persisted in an INI file.
//!
//! The file lives next to the executable (overridable via the
//! `MOCHI_CONFIG` environment variable) and is created with defaults on
//! first use. Updates are plain upserts with no value validation; a bad
//! server URL simply fails on the next request.

use crate::constants::{
    CONFIG_ENV_VAR, CONFIG_FILE, DEFAULT_SERVER_URL, DEFAULT_TOKEN,
};
use anyhow::{bail, Context, Result};
use ini::Ini;
use std::path::{Path, PathBuf};

/// Section holding all client settings.
pub const CLIENT_SECTION: &str = "mochi";

/// Client settings as loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Server base URL
    pub server: String,
    /// Bearer token sent on authenticated endpoints
    pub token: Option<String>,
    /// Whether to verify TLS certificates
    pub verify_ssl: bool,
}

/// Resolve the configuration file path.
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

/// Load the configuration file, writing the documented defaults first if
/// it does not exist.
pub fn load_or_init(path: &Path) -> Result<Ini> {
    if !path.is_file() {
        let mut config = Ini::new();
        config
            .with_section(Some(CLIENT_SECTION))
            .set("server", DEFAULT_SERVER_URL)
            .set("token", DEFAULT_TOKEN)
            .set("verify_ssl", "false");
        config
            .write_to_file(path)
            .with_context(|| format!("Failed to create configuration file: {:?}", path))?;
        return Ok(config);
    }
    Ini::load_from_file(path)
        .with_context(|| format!("Failed to read configuration file: {:?}", path))
}

impl ClientSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let config = load_or_init(path)?;
        let section = config.section(Some(CLIENT_SECTION));

        let server = section
            .and_then(|s| s.get("server"))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SERVER_URL)
            .to_string();

        let token = section
            .and_then(|s| s.get("token"))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let verify_ssl = match section.and_then(|s| s.get("verify_ssl")).map(str::trim) {
            None => true,
            Some(raw) => parse_bool(raw)
                .with_context(|| format!("Invalid verify_ssl value in {:?}: {:?}", path, raw))?,
        };

        Ok(Self {
            server,
            token,
            verify_ssl,
        })
    }
}

/// Persist a new token. Last write wins.
pub fn set_token(path: &Path, token: &str) -> Result<()> {
    upsert(path, "token", token)
}

/// Persist a new server address. The value is not validated; a malformed
/// URL surfaces as a connection failure on next use.
pub fn set_server(path: &Path, address: &str) -> Result<()> {
    upsert(path, "server", address)
}

fn upsert(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut config = load_or_init(path)?;
    config.with_section(Some(CLIENT_SECTION)).set(key, value);
    config
        .write_to_file(path)
        .with_context(|| format!("Failed to write configuration file: {:?}", path))
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => bail!("not a boolean"),
    }
}
