//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the roster
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Person;

use super::types::{EventTemplates, RosterConfig};

/// Loads and provides access to the roster configuration.
///
/// # File Structure
///
/// ```text
/// config/roster.yaml
/// ├── calendar      # event text templates ({name}, {date} placeholders)
/// └── roster        # default roster: people with blocked dates
/// ```
///
/// # Example
///
/// ```no_run
/// use stable_scheduler::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster.yaml").unwrap();
/// println!("roster size: {}", loader.roster().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be
    /// read and [`EngineError::ConfigParseError`] when it is not valid
    /// YAML for the expected structure.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: RosterConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the default roster.
    pub fn roster(&self) -> &[Person] {
        &self.config.roster
    }

    /// Returns the calendar event text templates.
    pub fn templates(&self) -> &EventTemplates {
        &self.config.calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_config_not_found() {
        let result = ConfigLoader::load("/definitely/not/here.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("./config/roster.yaml").unwrap();
        assert!(!loader.roster().is_empty());
        assert!(!loader.templates().summary.is_empty());
    }

    #[test]
    fn test_loaded_people_have_unique_ids() {
        let loader = ConfigLoader::load("./config/roster.yaml").unwrap();
        let mut ids: Vec<&str> = loader.roster().iter().map(|p| p.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
}
