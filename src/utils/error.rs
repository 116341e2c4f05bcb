use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to bind {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Duplicate location id {id}")]
    DuplicateLocationId { id: u32 },

    #[error("Location id must be a positive integer, got {id}")]
    InvalidLocationId { id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Network,
    Catalog,
}

impl ListingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ListingError::IoError(_) => ErrorCategory::Io,
            ListingError::ConfigValidationError { .. }
            | ListingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ListingError::BindError { .. } => ErrorCategory::Network,
            ListingError::DuplicateLocationId { .. } | ListingError::InvalidLocationId { .. } => {
                ErrorCategory::Catalog
            }
        }
    }

    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the file exists and is readable",
            ErrorCategory::Configuration => "Fix the configuration value and restart",
            ErrorCategory::Network => "Choose a free port or stop the process using it",
            ErrorCategory::Catalog => "Every location needs a unique positive id",
        }
    }
}

pub type Result<T> = std::result::Result<T, ListingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category() {
        let err = ListingError::DuplicateLocationId { id: 3 };
        assert_eq!(err.category(), ErrorCategory::Catalog);
        assert_eq!(err.to_string(), "Duplicate location id 3");

        let err = ListingError::InvalidConfigValueError {
            field: "server.bind".to_string(),
            value: "nope".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
