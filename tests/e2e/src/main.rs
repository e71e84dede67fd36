//! End-to-end harness: spawns the real server and client binaries and
//! exercises the full list/fetch/verify round-trip over HTTP.

mod test_utils;

use anyhow::{Context, Result};
use std::fs;
use test_utils::*;

const TOKEN: &str = "e2e-secret";
const PACKAGE_CONTENT: &[u8] = b"e2e package payload\n";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("e2e_tests=debug,info")
        .init();

    let port: u16 = std::env::var("E2E_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(18080);
    let base_url = format!("http://127.0.0.1:{}", port);

    let server_binary = find_binary("mochi-server")?;
    let client_binary = find_binary("mochi")?;
    println!("Server binary: {:?}", server_binary);
    println!("Client binary: {:?}", client_binary);

    // Server side: config file plus one package under the storage root.
    let server_dir = tempfile::tempdir()?;
    let config_path = server_dir.path().join("server.ini");
    let data_dir = server_dir.path().join("instance");
    fs::create_dir_all(&data_dir)?;
    fs::write(
        &config_path,
        format!("[server]\nport={}\ntoken={}\n\n[widget]\nfile=widget.zip\n", port, TOKEN),
    )?;
    fs::write(data_dir.join("widget.zip"), PACKAGE_CONTENT)?;

    // Client side: its own config file and a working directory for fetches.
    let client_dir = tempfile::tempdir()?;
    let client_config = client_dir.path().join("mochi.ini");
    let fetch_dir = client_dir.path().join("downloads");
    fs::create_dir_all(&fetch_dir)?;

    let _server = ServerGuard::spawn(&server_binary, &config_path, &data_dir, port)?;
    wait_for_server(&base_url).await?;

    println!("\nConfiguring client...");
    let output = run_client(&client_binary, &client_config, &fetch_dir, &["server", &base_url])?;
    expect_success(&output, "mochi server")?;
    let output = run_client(&client_binary, &client_config, &fetch_dir, &["token", TOKEN])?;
    expect_success(&output, "mochi token")?;

    println!("\nTesting touch...");
    let output = run_client(&client_binary, &client_config, &fetch_dir, &["touch"])?;
    expect_success(&output, "mochi touch")?;

    println!("\nTesting list...");
    let output = run_client(&client_binary, &client_config, &fetch_dir, &["list"])?;
    expect_success(&output, "mochi list")?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::ensure!(
        stdout.contains("widget"),
        "list output missing package: {}",
        stdout
    );

    println!("\nTesting fetch...");
    let output = run_client(&client_binary, &client_config, &fetch_dir, &["fetch", "widget"])?;
    expect_success(&output, "mochi fetch")?;
    let fetched = fetch_dir.join("widget.zip");
    anyhow::ensure!(fetched.is_file(), "fetched file missing: {:?}", fetched);
    let fetched_sha1 = integrity::sha1_hex_file(&fetched).context("Failed to hash fetched file")?;
    anyhow::ensure!(
        fetched_sha1 == integrity::sha1_hex(PACKAGE_CONTENT),
        "fetched file hash mismatch: {}",
        fetched_sha1
    );

    println!("\nTesting auth rejection...");
    let output = run_client(&client_binary, &client_config, &fetch_dir, &["token", "wrong"])?;
    expect_success(&output, "mochi token (wrong)")?;
    let output = run_client(&client_binary, &client_config, &fetch_dir, &["list"])?;
    anyhow::ensure!(
        !output.status.success(),
        "list with a wrong token must fail"
    );

    println!("\n✅ All E2E tests passed!");
    Ok(())
}
