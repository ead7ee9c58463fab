//! Repository configuration (diffbase.yaml)
//!
//! An optional file at the repository root that sets defaults for the
//! `resolve` command. Command-line flags and environment variables win over
//! anything set here.
//!
//! ```yaml
//! golden_path: screenshots/golden.json
//! primary_remote: upstream
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DiffBaseError, Result};
use crate::resolver::DEFAULT_PRIMARY_REMOTE;

/// Name of the configuration file looked up at the repository root
pub const CONFIG_FILE_NAME: &str = "diffbase.yaml";

/// Snapshot path used when neither the flag, the config nor the diff base names one
pub const DEFAULT_GOLDEN_PATH: &str = "golden.json";

/// Settings read from diffbase.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default golden file path inside the repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub golden_path: Option<String>,

    /// Remote reported for tag diff bases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_remote: Option<String>,
}

impl Config {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load `diffbase.yaml` from `root`, or defaults if there is none
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }

        let yaml = std::fs::read_to_string(&path).map_err(|e| DiffBaseError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!(path = %path.display(), "loading config file");
        Self::from_yaml(&yaml).map_err(|e| match e {
            DiffBaseError::ConfigParseFailed { reason, .. } => DiffBaseError::ConfigParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Golden path to use, preferring an explicit override
    pub fn golden_path<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.or(self.golden_path.as_deref())
            .unwrap_or(DEFAULT_GOLDEN_PATH)
    }

    /// Remote to report for tags
    pub fn primary_remote(&self) -> &str {
        self.primary_remote
            .as_deref()
            .unwrap_or(DEFAULT_PRIMARY_REMOTE)
    }
}
