use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutlayError {
    /// An update or delete referenced an id that is not in the store.
    #[error("not found: {0}")]
    NotFound(String),

    /// A caller-supplied argument was unusable (bad date string, zero page size).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, OutlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = OutlayError::NotFound("expense exp-7".into());
        assert_eq!(err.to_string(), "not found: expense exp-7");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = OutlayError::InvalidInput("page_size must be at least 1".into());
        assert!(err.to_string().starts_with("invalid input:"));
    }
}
