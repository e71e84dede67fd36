//! Fetch workflow: manifest first, then the byte stream, then verify.
//!
//! The two-step protocol is deliberate. The manifest tells the client the
//! expected hash before it trusts the download, so transport corruption
//! or tampering is detected before the file is accepted.

use crate::api::ApiClient;
use crate::error::ClientError;
use common::file_utils::validate_filename;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Fetch a package into the current working directory and verify it.
pub fn fetch_package(api: &ApiClient, package: &str) -> Result<PathBuf, ClientError> {
    let manifest = api.manifest(package)?;

    // The filename comes from the server; never let it point outside the
    // working directory.
    validate_filename(&manifest.filename)
        .map_err(|_| ClientError::UnsafeFilename(manifest.filename.clone()))?;
    let dest = std::env::current_dir()?.join(&manifest.filename);

    println!("Fetching {}...", package);
    let mut response = api.download(package)?;

    let bar = progress_bar(response.content_length());
    let file = File::create(&dest)?;
    let mut writer = bar.wrap_write(file);
    std::io::copy(&mut response, &mut writer)?;
    bar.finish_and_clear();

    if let Some(expected) = &manifest.sha1 {
        verify_download(&dest, expected)?;
    }

    Ok(dest)
}

/// Recompute the local file's hash and compare against the manifest.
/// On mismatch the file is deleted so no corrupt artifact is left behind.
pub fn verify_download(path: &Path, expected: &str) -> Result<(), ClientError> {
    let actual = integrity::sha1_hex_file(path).map_err(ClientError::Hash)?;
    if actual != expected {
        let _ = std::fs::remove_file(path);
        return Err(ClientError::IntegrityMismatch {
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}

fn progress_bar(total: Option<u64>) -> ProgressBar {
    let bar = match total {
        Some(length) => ProgressBar::new(length),
        None => ProgressBar::new_spinner(),
    };
    if let Ok(style) =
        ProgressStyle::with_template("{bar:40.cyan/blue} {bytes}/{total_bytes} {bytes_per_sec} {eta}")
    {
        bar.set_style(style.progress_chars("=>-"));
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn matching_hash_keeps_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widget.zip");
        fs::write(&path, b"payload").unwrap();

        verify_download(&path, &integrity::sha1_hex(b"payload")).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn mismatch_deletes_the_file_and_reports_both_hashes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widget.zip");
        fs::write(&path, b"corrupted").unwrap();

        let expected = integrity::sha1_hex(b"payload");
        let err = verify_download(&path, &expected).unwrap_err();
        match err {
            ClientError::IntegrityMismatch {
                expected: e,
                actual,
            } => {
                assert_eq!(e, expected);
                assert_eq!(actual, integrity::sha1_hex(b"corrupted"));
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(!path.exists(), "corrupt file must not be left behind");
    }
}
