//! Module registry
//!
//! Modules are registered at setup, in load order, and stand in for the
//! program's loaded modules. A module either lists its types or reports why
//! it cannot; the resolver's fallback scan skips the latter.

use std::sync::Arc;

use crate::{descriptor::TypeDescriptor, Error, Result};

/// A named group of type descriptors.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    types: std::result::Result<Vec<Arc<TypeDescriptor>>, String>,
}

impl Module {
    /// Create an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Ok(Vec::new()),
        }
    }

    /// Create a module whose type enumeration always fails.
    pub fn failing(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Err(reason.into()),
        }
    }

    /// Add a type to the module. Ignored for failing modules.
    #[must_use]
    pub fn with_type(mut self, descriptor: TypeDescriptor) -> Self {
        if let Ok(types) = &mut self.types {
            types.push(Arc::new(descriptor));
        }
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enumerate the module's types.
    ///
    /// # Errors
    ///
    /// Returns `Error::ModuleEnumeration` for failing modules.
    pub fn types(&self) -> Result<&[Arc<TypeDescriptor>]> {
        self.types
            .as_deref()
            .map_err(|reason| Error::ModuleEnumeration {
                module: self.name.clone(),
                reason: reason.clone(),
            })
    }

    /// Look up a type by exact qualified name.
    ///
    /// # Errors
    ///
    /// Returns `Error::ModuleEnumeration` for failing modules.
    pub fn find(&self, qualified_name: &str) -> Result<Option<Arc<TypeDescriptor>>> {
        Ok(self
            .types()?
            .iter()
            .find(|t| t.qualified_name() == qualified_name)
            .cloned())
    }
}

/// All modules registered at setup, in load order.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: Vec<Module>,
}

impl ModuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module after the ones already registered.
    #[must_use]
    pub fn with_module(mut self, module: Module) -> Self {
        self.register(module);
        self
    }

    /// Add a module after the ones already registered.
    pub fn register(&mut self, module: Module) {
        tracing::debug!(module = module.name(), "Registered module");
        self.modules.push(module);
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Find a module by exact name.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }
}
