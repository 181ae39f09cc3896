use thiserror::Error;

/// Common error types used across the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AppError::from(err);
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn test_zip_error_converts() {
        let err = AppError::from(zip::result::ZipError::FileNotFound);
        assert!(matches!(err, AppError::Archive(_)));
    }

    #[test]
    fn test_display_includes_category() {
        let err = AppError::Manifest("invalid header field".to_string());
        assert_eq!(err.to_string(), "Manifest error: invalid header field");
    }
}
