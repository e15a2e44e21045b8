//! Type resolution
//!
//! Resolution order:
//! 1. The preferred candidate (exact qualified name in a preferred module)
//! 2. Each configured candidate, in order
//! 3. A scan of every module for a public type with the fallback simple name
//!
//! First match wins. Modules that cannot enumerate their types are skipped
//! silently at every step.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    descriptor::TypeDescriptor,
    registry::{Module, ModuleRegistry},
    Error, Result,
};

/// Simple name looked for by the fallback scan unless configured otherwise.
pub const DEFAULT_FALLBACK_NAME: &str = "Person";

/// One (type name, module) pair tried during resolution.
///
/// Without a module, the name is looked up in every module in load order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateName {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

impl CandidateName {
    /// A name looked up in every module.
    pub fn anywhere(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            module: None,
        }
    }

    /// A name looked up in one module only.
    pub fn in_module(type_name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            module: Some(module.into()),
        }
    }

    fn lookup(&self, registry: &ModuleRegistry) -> Option<Arc<TypeDescriptor>> {
        match &self.module {
            Some(module) => registry
                .module(module)
                .and_then(|m| find_tolerant(m, &self.type_name)),
            None => registry
                .modules()
                .iter()
                .find_map(|m| find_tolerant(m, &self.type_name)),
        }
    }
}

impl std::fmt::Display for CandidateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{}, {module}", self.type_name),
            None => write!(f, "{}", self.type_name),
        }
    }
}

fn find_tolerant(module: &Module, qualified_name: &str) -> Option<Arc<TypeDescriptor>> {
    module
        .find(qualified_name)
        .inspect_err(|e| tracing::debug!("Skipping module during lookup: {e}"))
        .ok()
        .flatten()
}

/// Locates the target type in a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeResolver {
    preferred: Option<CandidateName>,
    candidates: Vec<CandidateName>,
    fallback_name: String,
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self {
            preferred: None,
            candidates: Vec::new(),
            fallback_name: DEFAULT_FALLBACK_NAME.to_string(),
        }
    }
}

impl TypeResolver {
    /// A resolver with no candidates that only scans for `Person`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_preferred(mut self, preferred: CandidateName) -> Self {
        self.preferred = Some(preferred);
        self
    }

    #[must_use]
    pub fn with_candidates(mut self, candidates: impl IntoIterator<Item = CandidateName>) -> Self {
        self.candidates.extend(candidates);
        self
    }

    #[must_use]
    pub fn with_fallback_name(mut self, fallback_name: impl Into<String>) -> Self {
        self.fallback_name = fallback_name.into();
        self
    }

    #[must_use]
    pub fn fallback_name(&self) -> &str {
        &self.fallback_name
    }

    /// Preferred candidate followed by the configured ones, in order.
    pub fn candidates(&self) -> impl Iterator<Item = &CandidateName> {
        self.preferred.iter().chain(&self.candidates)
    }

    /// Resolve the target type.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingDependency` listing every candidate tried when
    /// neither the candidates nor the module scan produce a type.
    pub fn resolve(&self, registry: &ModuleRegistry) -> Result<Arc<TypeDescriptor>> {
        let by_candidate = self.candidates().find_map(|candidate| {
            tracing::debug!(%candidate, "Trying candidate");
            candidate.lookup(registry)
        });

        if let Some(found) = by_candidate.or_else(|| self.scan(registry)) {
            tracing::info!(type_name = found.qualified_name(), "Resolved target type");
            return Ok(found);
        }

        let tried = self
            .candidates()
            .map(ToString::to_string)
            .chain(std::iter::once(format!("any public '{}'", self.fallback_name)))
            .collect::<Vec<_>>()
            .join("; ");

        Err(Error::MissingDependency {
            type_name: self.fallback_name.clone(),
            tried,
        })
    }

    /// Best-effort scan of every module for a public type with the fallback
    /// simple name.
    fn scan(&self, registry: &ModuleRegistry) -> Option<Arc<TypeDescriptor>> {
        registry.modules().iter().find_map(|module| {
            let types = module
                .types()
                .inspect_err(|e| tracing::debug!("Skipping module during scan: {e}"))
                .ok()?;
            types
                .iter()
                .find(|t| t.is_public() && t.simple_name() == self.fallback_name)
                .cloned()
        })
    }
}
