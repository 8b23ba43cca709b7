use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::front_matter::HeaderError;

/// Boxed result used at the command-line layer
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Common result type for site generation
pub type SiteResult<T> = Result<T, SiteError>;

/// Error types for site generation
#[derive(Debug)]
pub enum SiteError {
    /// IO error wrapper
    Io(io::Error),
    /// IO error tied to a specific path
    File {
        path: PathBuf,
        source: io::Error,
    },
    /// Malformed document header
    Header {
        path: PathBuf,
        source: HeaderError,
    },
    /// Configuration error (bad settings, missing required templates)
    Config(String),
    /// Template parsing or rendering error
    Template {
        name: String,
        message: String,
    },
    /// Static asset copy error
    Assets(String),
}

impl SiteError {
    /// Wrap an IO error together with the path it concerns
    pub fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SiteError::File { path: path.into(), source }
    }

    /// Build a template error for the named template
    pub fn template(name: impl Into<String>, message: impl fmt::Display) -> Self {
        SiteError::Template {
            name: name.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Io(err) => write!(f, "IO error: {}", err),
            SiteError::File { path, source } => write!(f, "File error ({}): {}", path.display(), source),
            SiteError::Header { path, source } => write!(f, "Header error in {}: {}", path.display(), source),
            SiteError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SiteError::Template { name, message } => write!(f, "Template error ({}): {}", name, message),
            SiteError::Assets(msg) => write!(f, "Asset error: {}", msg),
        }
    }
}

impl Error for SiteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SiteError::Io(err) => Some(err),
            SiteError::File { source, .. } => Some(source),
            SiteError::Header { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for SiteError {
    fn from(err: io::Error) -> Self {
        SiteError::Io(err)
    }
}
