//! Solver configuration, loadable from TOML.
//!
//! ```
//! use SokobanSolver::config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     max_expansions = 20000
//! "#).unwrap();
//!
//! assert_eq!(config.max_expansions, 20_000);
//! assert_eq!(config.progress_interval, 10_000);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_MAX_EXPANSIONS: usize = 500_000;
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverConfig {
    /// Expansions after which the search gives up and reports no solution.
    pub max_expansions: usize,

    /// Expansions between two progress log lines, 0 turns progress logging off.
    pub progress_interval: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl SolverConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or an invalid value.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SolverConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_expansions == 0 {
            return Err(ConfigError::Invalid(
                "max_expansions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
