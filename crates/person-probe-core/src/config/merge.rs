//! Configuration merging logic (Immutable functional pattern)
//!
//! Later layers override earlier ones (defaults → global → explicit → env).
//! Lists are replaced, not appended.

use super::types::{ConfigLayer, ProbeConfig};

impl ProbeConfig {
    /// Merge a layer into this config (layer takes precedence) - immutable pattern
    pub fn merge(self, layer: ConfigLayer) -> Self {
        Self {
            fallback_name: layer.fallback_name.unwrap_or(self.fallback_name),
            output: layer.output.unwrap_or(self.output),
            preferred: layer.preferred.unwrap_or(self.preferred),
            candidates: layer.candidates.unwrap_or(self.candidates),
            checks: layer.checks.unwrap_or(self.checks),
        }
    }
}
