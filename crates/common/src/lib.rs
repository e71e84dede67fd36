pub mod file_utils;

use serde::{Deserialize, Serialize};

/// Package descriptor returned by `GET /api/get/{name}`.
///
/// The hash is recomputed from the on-disk bytes on every request, so a
/// manifest always describes the file a concurrent download would stream.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    /// Package name as it appears in the registry.
    pub name: String,
    /// Filename the client should save the download under.
    pub filename: String,
    /// Lowercase 40-hex SHA1 of the file content. Always present in
    /// responses from this server; optional on the wire so the client
    /// tolerates manifests without one (download is then unverified).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
}

/// Response from the liveness probe endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TouchResponse {
    pub ok: bool,
}

/// Response from the version endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VersionResponse {
    pub version: String,
}
