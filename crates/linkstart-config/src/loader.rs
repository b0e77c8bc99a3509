//! Configuration loader.

use std::fs;
use std::path::Path;

use regex::{Captures, Regex};

use crate::error::ConfigError;
use crate::schema::Config;

/// Reads `config.toml`, substituting `${VAR}` references from the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_str(&content)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match fs::metadata(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            _ => Self::load(path),
        }
    }

    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        Ok(toml::from_str(&expanded)?)
    }

    /// Substitute `${VAR}` on every line that is not a comment.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let env_var = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")?;
        let mut expanded = String::with_capacity(content.len());

        for line in content.split_inclusive('\n') {
            if line.trim_start().starts_with('#') {
                expanded.push_str(line);
                continue;
            }

            let mut missing = None;
            let replaced = env_var.replace_all(line, |caps: &Captures| {
                std::env::var(&caps[1]).unwrap_or_else(|_| {
                    missing.get_or_insert_with(|| caps[1].to_string());
                    String::new()
                })
            });
            if let Some(name) = missing {
                return Err(ConfigError::EnvVarNotSet(name));
            }
            expanded.push_str(&replaced);
        }

        Ok(expanded)
    }

    /// Expand a leading `~` to the home directory.
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).into_owned()
    }
}
