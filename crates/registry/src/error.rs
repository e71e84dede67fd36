use thiserror::Error;

/// Failures raised while resolving packages against the configuration file.
///
/// The HTTP layer maps these to status codes at the boundary; nothing in
/// this crate knows about HTTP.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Package \"{0}\" not found in configuration file")]
    PackageNotFound(String),

    /// The registry names the package but its entry is unusable. This is
    /// an operator mistake on the server, not a client error.
    #[error("Missing or invalid \"file\" entry for [{0}] in configuration")]
    MisconfiguredPackage(String),

    #[error("File not found: {0}")]
    FileMissing(String),

    #[error("Invalid port value: {0}")]
    InvalidPort(String),

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] ini::Error),

    #[error("Configuration I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
