use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output};
use std::time::Duration;
use tokio::time::sleep;

/// Locate a workspace binary, preferring the release build.
pub fn find_binary(name: &str) -> Result<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .context("Failed to locate workspace root")?;

    for profile in ["release", "debug"] {
        let candidate = workspace_root.join("target").join(profile).join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    anyhow::bail!("Binary {} not found; run `cargo build` first", name);
}

/// Server process that is killed when the harness exits, pass or fail.
pub struct ServerGuard {
    child: Child,
}

impl ServerGuard {
    pub fn spawn(binary: &Path, config: &Path, data_dir: &Path, port: u16) -> Result<Self> {
        let child = Command::new(binary)
            .arg("--config")
            .arg(config)
            .arg("--data-dir")
            .arg(data_dir)
            .arg("--host")
            .arg("127.0.0.1")
            .arg("--port")
            .arg(port.to_string())
            .spawn()
            .with_context(|| format!("Failed to spawn server binary: {:?}", binary))?;
        Ok(Self { child })
    }
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub async fn wait_for_server(base_url: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let touch_url = format!("{}/api/touch", base_url);

    println!("Waiting for server to be ready...");
    for _ in 0..30 {
        if let Ok(response) = client.get(&touch_url).send().await {
            if response.status().is_success() {
                println!("Server is ready!");
                return Ok(());
            }
        }
        sleep(Duration::from_millis(500)).await;
    }

    anyhow::bail!("Server did not become ready within 15 seconds");
}

/// Run the client binary with a given config file and working directory.
pub fn run_client(
    binary: &Path,
    config: &Path,
    cwd: &Path,
    args: &[&str],
) -> Result<Output> {
    Command::new(binary)
        .args(args)
        .env("MOCHI_CONFIG", config)
        .current_dir(cwd)
        .output()
        .with_context(|| format!("Failed to run client binary: {:?}", binary))
}

pub fn expect_success(output: &Output, what: &str) -> Result<()> {
    if !output.status.success() {
        anyhow::bail!(
            "{} failed\nstdout: {}\nstderr: {}",
            what,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(())
}
