use thiserror::Error;

pub type Result<T, E = ShellError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to connect to {contact_point}: {message}")]
    Connect {
        contact_point: String,
        message: String,
    },

    #[error("query execution failed: {0}")]
    Execution(String),

    #[error("metadata fetch failed: {0}")]
    Metadata(String),

    #[error("system.local returned no release_version")]
    MissingReleaseVersion,

    #[error("invalid contact point '{0}', expected host:port")]
    InvalidContactPoint(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Errors the loop reports and moves past; everything else ends the process.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ShellError::Execution(_) | ShellError::Metadata(_))
    }
}
