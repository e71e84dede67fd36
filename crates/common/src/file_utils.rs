use std::path::Path;

/// Error type for filename validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameError {
    Empty,
    ContainsNullByte,
    ContainsPathSeparator,
    IsSpecialDirectory,
    NotAPlainFileName,
}

impl FilenameError {
    pub fn message(&self) -> &'static str {
        match self {
            FilenameError::Empty => "Filename cannot be empty",
            FilenameError::ContainsNullByte => "Filename cannot contain null bytes",
            FilenameError::ContainsPathSeparator => {
                "Filename cannot contain path separators (/ or \\)"
            }
            FilenameError::IsSpecialDirectory => "Filename cannot be '.' or '..'",
            FilenameError::NotAPlainFileName => "Invalid filename: must be a plain file name",
        }
    }
}

impl std::fmt::Display for FilenameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FilenameError {}

/// Validate a filename before using it as a local path component.
///
/// The server reads manifest filenames from its registry and the client
/// writes downloads under whatever filename the manifest declares, so
/// both sides reject anything that could escape the target directory.
pub fn validate_filename(filename: &str) -> Result<(), FilenameError> {
    if filename.is_empty() {
        return Err(FilenameError::Empty);
    }

    if filename.contains('\0') {
        return Err(FilenameError::ContainsNullByte);
    }

    if filename.contains('/') || filename.contains('\\') {
        return Err(FilenameError::ContainsPathSeparator);
    }

    if filename == "." || filename == ".." {
        return Err(FilenameError::IsSpecialDirectory);
    }

    // Path::file_name() must reproduce the input exactly; anything else
    // means the OS would normalize it to a different path.
    let path = Path::new(filename);
    if path.file_name().and_then(|n| n.to_str()) != Some(filename) {
        return Err(FilenameError::NotAPlainFileName);
    }

    Ok(())
}
