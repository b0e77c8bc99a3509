//! URL entry errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("URL already exists: {0}")]
    Duplicate(String),

    #[error("URL not in list: {0}")]
    NotFound(String),

    #[error("Empty input")]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url() {
        let err = EntryError::InvalidUrl {
            url: "ht!tp://".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("ht!tp://"));
        assert!(display.contains("relative URL"));
    }

    #[test]
    fn test_duplicate() {
        let err = EntryError::Duplicate("https://a.com/".to_string());
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_not_found() {
        let err = EntryError::NotFound("https://b.com/".to_string());
        assert!(err.to_string().contains("https://b.com/"));
    }
}
