//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
///
/// Without a path the built-in defaults are validated and returned.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            parse_config(&content)?
        }
        None => ServiceConfig::default(),
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}
