//! Configuration validation

use super::types::ProbeConfig;
use crate::{resolver::CandidateName, Error, Result};

impl ProbeConfig {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if:
    /// - `fallback_name` is empty or contains a path separator
    /// - any candidate has an empty type name or an empty module
    /// - `checks.only` names an unknown check
    pub fn validate(&self) -> Result<()> {
        let fallback = self.fallback_name.trim();
        if fallback.is_empty() {
            return Err(Error::InvalidConfig("fallback_name cannot be empty".into()));
        }
        if fallback.contains(['.', ':']) {
            return Err(Error::InvalidConfig(format!(
                "fallback_name must be a simple type name, got '{fallback}'"
            )));
        }

        std::iter::once(&self.preferred)
            .chain(&self.candidates)
            .try_for_each(validate_candidate)?;

        self.selected_checks().map(|_| ())
    }
}

fn validate_candidate(candidate: &CandidateName) -> Result<()> {
    if candidate.type_name.trim().is_empty() {
        return Err(Error::InvalidConfig(
            "candidate type_name cannot be empty".into(),
        ));
    }
    if candidate
        .module
        .as_deref()
        .is_some_and(|m| m.trim().is_empty())
    {
        return Err(Error::InvalidConfig(format!(
            "candidate '{}' has an empty module; omit the key to search every module",
            candidate.type_name
        )));
    }
    Ok(())
}
