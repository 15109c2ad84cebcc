use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while setting the game up or reading its files.
#[derive(Debug)]
pub enum Error {
    /// A file could not be opened or read
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// The settings file is not valid JSON for [`crate::Settings`]
    Config {
        /// Settings file that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
    /// A global logger was already installed
    Logger(log::SetLoggerError),
}

impl Error {
    /// True when the error is an I/O "not found" for its path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(err: log::SetLoggerError) -> Self {
        Error::Logger(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
            Error::Config { path, source } => {
                write!(f, "Invalid settings file {}: {}", path.display(), source)
            }
            Error::Logger(e) => write!(f, "Logger setup failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Config { source, .. } => Some(source),
            Error::Logger(e) => Some(e),
        }
    }
}
