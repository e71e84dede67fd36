//! Package distribution client CLI.

mod api;
mod config;
mod constants;
mod error;
mod fetch;
mod logger;

use api::ApiClient;
use clap::{Parser, Subcommand};
use config::ClientSettings;

#[derive(Parser)]
#[command(name = "mochi", version)]
#[command(about = "Package distribution client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ping the server
    Touch,
    /// Compare client and server versions
    Version,
    /// List available packages
    List,
    /// Fetch a package into the current directory
    Fetch {
        /// Package name as listed on the server
        package: String,
    },
    /// Set the API token in the configuration file
    Token {
        /// New token value
        token: String,
    },
    /// Set the server address in the configuration file
    Server {
        /// New server base URL
        address: String,
    },
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    let config_path = config::config_path();

    // The config commands never touch the network.
    match cli.command {
        Commands::Token { token } => {
            config::set_token(&config_path, &token)?;
            println!("Token updated");
            return Ok(());
        }
        Commands::Server { address } => {
            config::set_server(&config_path, &address)?;
            println!("Server updated -> {}", address);
            return Ok(());
        }
        _ => {}
    }

    let settings = ClientSettings::load(&config_path)?;
    let api = ApiClient::new(&settings)?;

    match cli.command {
        Commands::Touch => {
            api.touch()?;
            println!("Server online: {}", settings.server);
        }
        Commands::Version => {
            let local = env!("CARGO_PKG_VERSION");
            let remote = api.server_version()?.version;
            if remote == local {
                println!("Version match: {}", local);
            } else {
                println!("Version mismatch\n  Local:  {}\n  Server: {}", local, remote);
            }
        }
        Commands::List => {
            let packages = api.list()?;
            if packages.is_empty() {
                println!("No packages found.");
            } else {
                println!("Available packages:");
                for name in packages {
                    println!("  {}", name);
                }
            }
        }
        Commands::Fetch { package } => {
            let path = fetch::fetch_package(&api, &package)?;
            println!("Done -> {}", path.display());
        }
        Commands::Token { .. } | Commands::Server { .. } => unreachable!(),
    }

    Ok(())
}
