//! Configuration validation.

use url::Url;

use crate::schema::Config;

/// One finding, addressed by its dotted key (`placement.max_window_width`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

/// Findings of one validation pass. Only errors make a config unusable.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: &str, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.into(),
        });
    }
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_store(config, &mut result);
        Self::validate_browser(config, &mut result);
        Self::validate_placement(config, &mut result);
        Self::validate_metadata(config, &mut result);

        result
    }

    fn validate_store(config: &Config, result: &mut ValidationResult) {
        if config.store.path.trim().is_empty() {
            result.error("store.path", "Store path cannot be empty");
        }
    }

    fn validate_browser(config: &Config, result: &mut ValidationResult) {
        match Url::parse(&config.browser.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => result.error(
                "browser.endpoint",
                format!("Unsupported scheme '{}', expected http or https", url.scheme()),
            ),
            Err(e) => result.error("browser.endpoint", format!("Invalid URL: {}", e)),
        }

        if config.browser.request_timeout_seconds == 0 {
            result.error(
                "browser.request_timeout_seconds",
                "request_timeout_seconds must be greater than 0",
            );
        }
    }

    fn validate_placement(config: &Config, result: &mut ValidationResult) {
        let placement = &config.placement;

        if placement.max_window_width == 0 {
            result.error(
                "placement.max_window_width",
                "max_window_width must be greater than 0",
            );
        }

        if placement.fallback_screen_width == 0 || placement.fallback_screen_height == 0 {
            result.error(
                "placement.fallback_screen_width",
                "fallback screen dimensions must be greater than 0",
            );
        }

        if !placement.favicon_template.contains("{host}") {
            result.warn(
                "placement.favicon_template",
                "favicon_template has no {host} placeholder, every entry gets the same icon",
            );
        }
    }

    fn validate_metadata(config: &Config, result: &mut ValidationResult) {
        if config.metadata.timeout_seconds == 0 {
            result.error(
                "metadata.timeout_seconds",
                "timeout_seconds must be greater than 0",
            );
        }

        if config.metadata.user_agent.is_empty() {
            result.warn(
                "metadata.user_agent",
                "Empty user agent, some sites refuse such requests",
            );
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
