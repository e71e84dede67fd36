use crate::error::RegistryError;
use crate::SERVER_SECTION;
use ini::Ini;

/// Default port written into a freshly created configuration file.
pub const DEFAULT_PORT: u16 = 8080;

/// Static server settings held in the reserved `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub port: u16,
    /// Bearer token gating the package endpoints. `None` (absent or empty
    /// in the file) disables authentication entirely.
    pub token: Option<String>,
}

impl ServerSettings {
    pub fn from_ini(config: &Ini) -> Result<Self, RegistryError> {
        let section = config.section(Some(SERVER_SECTION));

        let port = match section.and_then(|s| s.get("port")) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| RegistryError::InvalidPort(raw.to_string()))?,
            None => DEFAULT_PORT,
        };

        let token = section
            .and_then(|s| s.get("token"))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Ok(Self { port, token })
    }

    /// Whether requests to package endpoints must carry a bearer token.
    pub fn auth_enabled(&self) -> bool {
        self.token.is_some()
    }
}
