//! Configuration loading from files and environment (Immutable functional pattern)
//!
//! This module handles loading configuration from:
//! 1. Built-in defaults
//! 2. Global config: ~/.config/person-probe/config.toml
//! 3. Explicit config file
//! 4. Environment variables: `PERSON_PROBE_*`

use std::path::{Path, PathBuf};

use super::types::{ConfigLayer, OutputFormat, ProbeConfig};
use crate::{resolver::CandidateName, Error, Result};

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Load configuration from all sources with hierarchy
///
/// # Errors
///
/// Returns error if:
/// - The explicit config file is missing or unreadable
/// - A config file is malformed TOML
/// - An environment override is invalid
/// - Config values fail validation
pub fn load_config(explicit: Option<&Path>) -> Result<ProbeConfig> {
    // 1. Start with built-in defaults
    let config = ProbeConfig::default();

    // 2. Global config if it exists
    let config = match global_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "Loading global config");
            config.merge(load_layer(&path)?)
        }
        _ => config,
    };

    // 3. Explicit config must exist
    let config = match explicit {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading config file");
            config.merge(load_layer(path)?)
        }
        None => config,
    };

    // 4. Environment overrides
    let config = config.apply_env_vars()?;

    config.validate()?;
    Ok(config)
}

/// Get path to global config file
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "person-probe")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load one TOML file as a config layer
///
/// # Errors
///
/// Returns error if the path is a directory, cannot be read, or is not
/// valid TOML for a config layer.
pub fn load_layer(path: &Path) -> Result<ConfigLayer> {
    if path.is_dir() {
        return Err(Error::Io(format!(
            "Config path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("Failed to read config file {}: {e}", path.display())))?;

    toml::from_str(&content).map_err(|e| {
        Error::Parse(format!(
            "Failed to parse config file {}: {e}",
            path.display()
        ))
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// ENVIRONMENT VARIABLE OVERRIDES (Immutable pattern)
// ═══════════════════════════════════════════════════════════════════════════

impl ProbeConfig {
    /// Apply `PERSON_PROBE_*` overrides from the process environment
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for an unknown output format.
    pub fn apply_env_vars(self) -> Result<Self> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    ///
    /// - `PERSON_PROBE_FALLBACK_NAME`
    /// - `PERSON_PROBE_PREFERRED_TYPE`
    /// - `PERSON_PROBE_PREFERRED_MODULE` (empty clears the module)
    /// - `PERSON_PROBE_OUTPUT` (`human` or `json`)
    pub fn apply_env_with(self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let fallback_name = lookup("PERSON_PROBE_FALLBACK_NAME").unwrap_or(self.fallback_name);

        let preferred = CandidateName {
            type_name: lookup("PERSON_PROBE_PREFERRED_TYPE").unwrap_or(self.preferred.type_name),
            module: match lookup("PERSON_PROBE_PREFERRED_MODULE") {
                Some(module) if module.is_empty() => None,
                Some(module) => Some(module),
                None => self.preferred.module,
            },
        };

        let output = lookup("PERSON_PROBE_OUTPUT")
            .map(|raw| {
                raw.trim().to_lowercase().parse::<OutputFormat>().map_err(|_| {
                    Error::InvalidConfig(format!(
                        "PERSON_PROBE_OUTPUT must be 'human' or 'json', got '{raw}'"
                    ))
                })
            })
            .transpose()?
            .unwrap_or(self.output);

        Ok(Self {
            fallback_name,
            output,
            preferred,
            ..self
        })
    }
}
