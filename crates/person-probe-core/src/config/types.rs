//! Configuration structure definitions and defaults

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{
    checks::{CheckId, CheckSuite},
    person::{REFERENCE_MODULE, REFERENCE_TYPE},
    resolver::{CandidateName, TypeResolver, DEFAULT_FALLBACK_NAME},
    Error, Result,
};

/// How reports are printed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChecksConfig {
    /// Check ids to run; empty runs every check
    pub only: Vec<String>,
}

/// Effective probe configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    pub fallback_name: String,
    pub output: OutputFormat,
    pub preferred: CandidateName,
    pub candidates: Vec<CandidateName>,
    pub checks: ChecksConfig,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            fallback_name: DEFAULT_FALLBACK_NAME.to_string(),
            output: OutputFormat::Human,
            preferred: CandidateName::in_module(REFERENCE_TYPE, REFERENCE_MODULE),
            candidates: vec![
                CandidateName::anywhere("Person"),
                CandidateName::in_module("People.Person", "People"),
                CandidateName::in_module("Models.Person", "Models"),
            ],
            checks: ChecksConfig::default(),
        }
    }
}

/// One configuration source. Absent keys leave lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub fallback_name: Option<String>,
    pub output: Option<OutputFormat>,
    pub preferred: Option<CandidateName>,
    pub candidates: Option<Vec<CandidateName>>,
    pub checks: Option<ChecksConfig>,
}

impl ProbeConfig {
    /// Resolver configured with this config's candidates.
    #[must_use]
    pub fn resolver(&self) -> TypeResolver {
        TypeResolver::new()
            .with_preferred(self.preferred.clone())
            .with_candidates(self.candidates.iter().cloned())
            .with_fallback_name(self.fallback_name.clone())
    }

    /// Parsed `checks.only` ids.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for unknown check ids.
    pub fn selected_checks(&self) -> Result<Vec<CheckId>> {
        self.checks
            .only
            .iter()
            .map(|raw| {
                raw.trim().parse::<CheckId>().map_err(|_| {
                    Error::InvalidConfig(format!(
                        "Unknown check '{raw}'. Run `person-probe list` for valid ids"
                    ))
                })
            })
            .collect()
    }

    /// Suite selected by `checks.only`, or every check when it is empty.
    pub fn suite(&self) -> Result<CheckSuite> {
        let selected = self.selected_checks()?;
        if selected.is_empty() {
            Ok(CheckSuite::all())
        } else {
            Ok(CheckSuite::only(selected))
        }
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Parse(format!("Failed to render config as TOML: {e}")))
    }
}
