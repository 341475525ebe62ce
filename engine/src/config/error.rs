//! Errors raised while loading field definitions.

/// Errors that can occur when reading a field definition.
#[derive(Debug)]
pub enum ConfigError {
    /// Text is not valid JSON.
    Json(serde_json::Error),
    /// A section that must be a JSON object is something else.
    NotAnObject(&'static str),
    /// A section that must be a JSON array is something else.
    NotAnArray(&'static str),
    /// `force.mode` names no known force mode.
    UnknownForceMode(String),
    /// A field with no usable default is absent or unreadable.
    MissingField(&'static str),
    /// Standard I/O error.
    Io(std::io::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::NotAnObject(section) => write!(f, "{section} must be a JSON object"),
            ConfigError::NotAnArray(section) => write!(f, "{section} must be a JSON array"),
            ConfigError::UnknownForceMode(mode) => write!(f, "unknown force mode: {mode:?}"),
            ConfigError::MissingField(field) => write!(f, "missing required field: {field}"),
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
