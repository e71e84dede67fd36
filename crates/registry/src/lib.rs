//! INI-backed package registry.
//!
//! The server's configuration file maps package names to files under a
//! storage root, with a reserved `[server]` section for port and token.
//! The registry is re-read from disk on every request so edits take
//! effect immediately without a restart; nothing here caches.

pub mod error;
pub mod resolver;
pub mod settings;

pub use error::RegistryError;
pub use resolver::{resolve, ResolvedPackage};
pub use settings::{ServerSettings, DEFAULT_PORT};

use ini::Ini;
use std::path::{Path, PathBuf};

/// Reserved section name for server-wide settings. Excluded from package
/// listings under any casing.
pub const SERVER_SECTION: &str = "server";

/// Handle on the server's configuration file and package storage root.
///
/// Cheap to clone around; every accessor loads the configuration fresh
/// from disk, which is the correctness contract: a concurrently edited
/// registry is always served in its current state.
#[derive(Debug, Clone)]
pub struct Registry {
    config_path: PathBuf,
    data_dir: PathBuf,
}

impl Registry {
    pub fn new(config_path: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load the configuration file, creating one with defaults if absent.
    pub fn load(&self) -> Result<Ini, RegistryError> {
        load_or_init(&self.config_path)
    }

    /// Current server settings (port, token).
    pub fn settings(&self) -> Result<ServerSettings, RegistryError> {
        ServerSettings::from_ini(&self.load()?)
    }

    /// All package names in configuration-file order, reserved section
    /// excluded case-insensitively.
    pub fn package_names(&self) -> Result<Vec<String>, RegistryError> {
        let config = self.load()?;
        Ok(config
            .sections()
            .flatten()
            .filter(|name| !name.eq_ignore_ascii_case(SERVER_SECTION))
            .map(str::to_string)
            .collect())
    }

    /// Resolve a package name to its declared filename and on-disk path.
    pub fn resolve(&self, name: &str) -> Result<ResolvedPackage, RegistryError> {
        resolver::resolve(&self.load()?, &self.data_dir, name)
    }
}

/// Load an INI file, writing a default one first if it does not exist.
pub fn load_or_init(path: &Path) -> Result<Ini, RegistryError> {
    if !path.is_file() {
        let mut config = Ini::new();
        config
            .with_section(Some(SERVER_SECTION))
            .set("port", DEFAULT_PORT.to_string());
        config.write_to_file(path)?;
        return Ok(config);
    }
    Ok(Ini::load_from_file(path)?)
}
