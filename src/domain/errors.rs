//! Domain error types
//!
//! These errors cover failures that end the program or abort a front-end
//! step. Problems the user can fix on screen are `ui::Alert` values instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid or unusable configuration value
    #[error("Configuration error: {0}")]
    Config(String),
    /// Terminal read/write failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// External service error
    #[error("External service error: {0}")]
    External(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = DomainError::Config("CATALOG_BASE_URL is empty".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: CATALOG_BASE_URL is empty"
        );

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: DomainError = io.into();
        assert!(err.to_string().starts_with("IO error:"));
    }
}
