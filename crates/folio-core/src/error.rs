//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// The portfolio data document could not be used
    #[error("Content error: {0}")]
    Content(String),

    /// A color string was not `#rrggbb`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Background effect name not recognised
    #[error("Unknown background effect: {0}")]
    UnknownEffect(String),

    /// Palette key name not recognised
    #[error("Unknown theme key: {0}")]
    UnknownThemeKey(String),

    /// Theme mode name not recognised
    #[error("Unknown theme mode: {0}")]
    UnknownMode(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// HTTP transport to the language model failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The language model answered with something unusable
    #[error("Assistant error: {0}")]
    Assistant(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        FolioError::Serialization(e.to_string())
    }
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::UnknownEffect("SPARKLES".to_string());
        assert_eq!(format!("{}", err), "Unknown background effect: SPARKLES");
    }

    #[test]
    fn test_invalid_color_display() {
        let err = FolioError::InvalidColor("black".to_string());
        assert_eq!(format!("{}", err), "Invalid color: black");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Serialization(_)));
    }
}
