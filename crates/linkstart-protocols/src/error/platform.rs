//! Browser platform errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Window not found: {0}")]
    WindowNotFound(i64),

    #[error("Tab not found: {0}")]
    TabNotFound(String),

    #[error("Platform rejected {operation}: {message}")]
    Rejected { operation: String, message: String },

    #[error("Script injection failed: {0}")]
    ScriptInjection(String),

    #[error("Operation not supported: {0}")]
    Unsupported(String),

    #[error("Browser connection failed: {0}")]
    Connection(String),
}

impl PlatformError {
    /// Shorthand for a rejected platform call.
    pub fn rejected(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_not_found() {
        let err = PlatformError::WindowNotFound(7);
        assert!(err.to_string().contains("Window not found"));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_rejected_helper() {
        let err = PlatformError::rejected("windows.create", "invalid bounds");
        let display = err.to_string();
        assert!(display.contains("windows.create"));
        assert!(display.contains("invalid bounds"));
    }

    #[test]
    fn test_script_injection() {
        let err = PlatformError::ScriptInjection("chrome:// page".to_string());
        assert!(err.to_string().contains("injection"));
    }

    #[test]
    fn test_error_debug() {
        let err = PlatformError::TabNotFound("t1".to_string());
        assert!(format!("{:?}", err).contains("TabNotFound"));
    }
}
