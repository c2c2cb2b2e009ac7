use std::path::PathBuf;
use wpgen_core::config::missing_credential_message;
use wpgen_core::paths::PathError;

/// Conditions reported with a tailored message instead of a full report.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{}", missing_credential_message(.0))]
    MissingCredential(String),

    /// Holds the full completion body, printed as-is.
    #[error("{0}")]
    Refused(String),

    #[error("Completion failed: {0}")]
    Transport(String),

    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirMissing(PathBuf),

    #[error("Refusing to write plugin files: {0}")]
    UnsafePath(#[from] PathError),
}
