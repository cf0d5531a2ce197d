use std::fmt;

/// Result type for vitrine-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Catalog could not be loaded
    Load(LoadError),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Preference store could not be written
    Storage(String),

    /// Clipboard write rejected or failed
    Clipboard(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Load(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Storage(msg) => write!(f, "Storage error: {}", msg),
            Error::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Load(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::Storage(_) | Error::Clipboard(_) => None,
        }
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Load(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Failure to fetch or decode the product feed.
///
/// Callers treat every variant the same way (show the static message, keep
/// the catalog empty); the variants only exist so logs can say why.
#[derive(Debug)]
pub enum LoadError {
    /// Local feed file could not be read
    Io(std::io::Error),

    /// Transport failure talking to a remote feed
    Http(reqwest::Error),

    /// Remote feed answered with a non-success status
    Status(u16),

    /// Payload is not a JSON array of product records
    Parse(serde_json::Error),
}

impl LoadError {
    /// Static text shown to the user for any load failure.
    pub const USER_MESSAGE: &'static str = "Erro ao carregar os produtos.";
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "Failed to read catalog: {}", err),
            LoadError::Http(err) => write!(f, "Failed to fetch catalog: {}", err),
            LoadError::Status(code) => write!(f, "Catalog request returned HTTP {}", code),
            LoadError::Parse(err) => write!(f, "Malformed catalog: {}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Http(err) => Some(err),
            LoadError::Parse(err) => Some(err),
            LoadError::Status(_) => None,
        }
    }
}
