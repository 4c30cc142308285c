#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl ReadError {
    #[must_use]
    pub fn is_no_connection(&self) -> bool {
        matches!(self, ReadError::Storage(StorageError::NoConnection))
    }

    #[must_use]
    pub fn is_invalid_response(&self) -> bool {
        matches!(self, ReadError::Storage(StorageError::InvalidResponse(_)))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::NoConnection),
            ReadError::Storage(StorageError::NoConnection)
        ));
        assert!(matches!(
            ReadError::from(StorageError::Other("foo".into())),
            ReadError::Storage(StorageError::Other(error)) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_read_error_display() {
        assert_eq!(
            ReadError::from(StorageError::InvalidResponse("expected array".into())).to_string(),
            "invalid response: expected array"
        );
        assert_eq!(
            ReadError::from(StorageError::NoConnection).to_string(),
            "no connection"
        );
        assert_eq!(ReadError::Other("foo".into()).to_string(), "foo");
    }

    #[test]
    fn test_read_error_classification() {
        assert!(ReadError::from(StorageError::NoConnection).is_no_connection());
        assert!(!ReadError::from(StorageError::NoConnection).is_invalid_response());
        assert!(ReadError::from(StorageError::InvalidResponse(String::new())).is_invalid_response());
        assert!(!ReadError::Other("foo".into()).is_no_connection());
    }
}
