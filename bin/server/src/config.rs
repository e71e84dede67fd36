//! Server startup configuration from command line and environment.

use crate::constants::{DEFAULT_CONFIG_FILE, DEFAULT_DATA_DIR, DEFAULT_HOST};
use clap::{Arg, Command};
use std::path::PathBuf;

/// Server configuration resolved at startup.
///
/// The registry (and the token with it) is re-read per request; only the
/// bind address is fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the INI configuration file
    pub config_path: PathBuf,
    /// Package storage root
    pub data_dir: PathBuf,
    /// Server host
    pub host: String,
    /// Port override from the command line or environment; when absent
    /// the port comes from the configuration file (default 8080)
    pub port_override: Option<u16>,
}

impl ServerConfig {
    pub fn load() -> Result<Self, std::io::Error> {
        let matches = Command::new("mochi-server")
            .about("Package distribution server")
            .arg(
                Arg::new("config")
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file path")
                    .default_value(DEFAULT_CONFIG_FILE),
            )
            .arg(
                Arg::new("data-dir")
                    .long("data-dir")
                    .value_name("DIR")
                    .help("Package storage root")
                    .default_value(DEFAULT_DATA_DIR),
            )
            .arg(
                Arg::new("host")
                    .long("host")
                    .value_name("HOST")
                    .help("Server host (default: 0.0.0.0, or SERVER_HOST env var)"),
            )
            .arg(
                Arg::new("port")
                    .long("port")
                    .value_name("PORT")
                    .help("Server port (overrides the configuration file; SERVER_PORT env var also accepted)"),
            )
            .get_matches();

        let config_path = PathBuf::from(
            matches
                .get_one::<String>("config")
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_CONFIG_FILE),
        );

        let data_dir = PathBuf::from(
            matches
                .get_one::<String>("data-dir")
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_DATA_DIR),
        );

        // Priority: command-line args > environment variables > defaults
        let env_host = std::env::var("SERVER_HOST").ok();
        let env_port = std::env::var("SERVER_PORT").ok();

        let host = matches
            .get_one::<String>("host")
            .map(|s| s.as_str())
            .or(env_host.as_deref())
            .unwrap_or(DEFAULT_HOST)
            .to_string();

        let port_override = matches
            .get_one::<String>("port")
            .map(|s| s.as_str())
            .or(env_port.as_deref())
            .map(|raw| {
                raw.parse().map_err(|_| {
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("Invalid port number: {}", raw),
                    )
                })
            })
            .transpose()?;

        Ok(ServerConfig {
            config_path,
            data_dir,
            host,
            port_override,
        })
    }

    pub fn bind_address(&self, config_file_port: u16) -> String {
        let port = self.port_override.unwrap_or(config_file_port);
        format!("{}:{}", self.host, port)
    }
}
