use crate::error::RegistryError;
use crate::SERVER_SECTION;
use ini::Ini;
use std::path::{Component, Path, PathBuf};

/// A registry entry resolved to a real file under the storage root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    /// Filename declared in the registry, as the client should save it.
    pub filename: String,
    /// Validated path of the file on disk.
    pub path: PathBuf,
}

/// Resolve a package name to a file under `data_dir`.
///
/// Lookup is case-sensitive; the reserved settings section is never a
/// package, under any casing. The configured `file` value must stay
/// inside the storage root.
pub fn resolve(
    config: &Ini,
    data_dir: &Path,
    name: &str,
) -> Result<ResolvedPackage, RegistryError> {
    if name.eq_ignore_ascii_case(SERVER_SECTION) {
        return Err(RegistryError::PackageNotFound(name.to_string()));
    }

    let section = config
        .section(Some(name))
        .ok_or_else(|| RegistryError::PackageNotFound(name.to_string()))?;

    let filename = section
        .get("file")
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .ok_or_else(|| RegistryError::MisconfiguredPackage(name.to_string()))?;

    if escapes_storage_root(filename) {
        return Err(RegistryError::MisconfiguredPackage(name.to_string()));
    }

    let path = data_dir.join(filename);
    if !path.is_file() {
        return Err(RegistryError::FileMissing(filename.to_string()));
    }

    Ok(ResolvedPackage {
        filename: filename.to_string(),
        path,
    })
}

/// Registry `file` values are relative paths under the storage root;
/// absolute paths and parent-directory components are operator errors.
fn escapes_storage_root(filename: &str) -> bool {
    let path = Path::new(filename);
    path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
}
