//! Provider Configuration
//!
//! Provider-level defaults for project, region, and zone. Resolvers receive
//! this struct explicitly on every call; there is no ambient global state.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Provider-level defaults used as the last fallback when a reference string
/// and the resource's own schema fields leave a part undetermined.
///
/// Empty string means "no default configured" for that part.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Default project ID
    #[serde(default)]
    pub project: String,
    /// Default region
    #[serde(default)]
    pub region: String,
    /// Default zone
    #[serde(default)]
    pub zone: String,
}

impl ProviderConfig {
    /// Create a config with the given defaults
    pub fn new(project: &str, region: &str, zone: &str) -> Self {
        Self {
            project: project.to_string(),
            region: region.to_string(),
            zone: zone.to_string(),
        }
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gcplink").join("config.json"))
    }

    /// Load defaults from disk, falling back to empty defaults when the file
    /// is absent or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("no provider config at {}, using empty defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!("loaded provider config from {}", path.display());
                serde_json::from_str(&content).unwrap_or_default()
            }
            Err(_) => Self::default(),
        }
    }

    /// Save defaults to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }
}
