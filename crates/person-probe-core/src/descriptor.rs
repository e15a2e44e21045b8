//! Type descriptors
//!
//! A [`TypeDescriptor`] is the registry's record of one type: its
//! fully-qualified name, visibility, declared properties and methods, and
//! the constructors that can build it. Descriptors are immutable once built
//! and shared through `Arc` after resolution.

use serde::{Deserialize, Serialize};

use crate::{instance::DynamicObject, value::ParamKind, Error, Result, Value};

/// Builds an object from arguments matching a constructor's parameters.
pub type Factory = fn(&[Value]) -> Result<Box<dyn DynamicObject>>;

/// Visibility of a registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
}

/// A declared property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDesc {
    pub name: String,
    pub kind: ParamKind,
    pub readable: bool,
    pub settable: bool,
}

impl PropertyDesc {
    /// A property with getter and setter.
    pub fn read_write(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            readable: true,
            settable: true,
        }
    }

    /// A property with a getter only.
    pub fn read_only(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            settable: false,
            ..Self::read_write(name, kind)
        }
    }
}

/// A declared method overload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDesc {
    pub name: String,
    pub params: Vec<ParamKind>,
    /// `None` for methods without a result
    pub returns: Option<ParamKind>,
}

impl MethodDesc {
    pub fn new(name: impl Into<String>, params: Vec<ParamKind>, returns: Option<ParamKind>) -> Self {
        Self {
            name: name.into(),
            params,
            returns,
        }
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A constructor signature and the factory behind it.
#[derive(Debug, Clone)]
pub struct ConstructorDesc {
    pub params: Vec<ParamKind>,
    factory: Factory,
}

impl ConstructorDesc {
    pub const fn new(params: Vec<ParamKind>, factory: Factory) -> Self {
        Self { params, factory }
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Run the factory.
    pub fn build(&self, args: &[Value]) -> Result<Box<dyn DynamicObject>> {
        (self.factory)(args)
    }
}

/// Registry record for one type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    qualified_name: String,
    visibility: Visibility,
    properties: Vec<PropertyDesc>,
    methods: Vec<MethodDesc>,
    constructors: Vec<ConstructorDesc>,
}

impl TypeDescriptor {
    /// Start describing a type.
    pub fn builder(qualified_name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(qualified_name)
    }

    /// Fully-qualified name, e.g. `People.Domain.Person`.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Last path segment of the qualified name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        simple_name_of(&self.qualified_name)
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    #[must_use]
    pub fn properties(&self) -> &[PropertyDesc] {
        &self.properties
    }

    #[must_use]
    pub fn methods(&self) -> &[MethodDesc] {
        &self.methods
    }

    #[must_use]
    pub fn constructors(&self) -> &[ConstructorDesc] {
        &self.constructors
    }

    /// Find a property by exact name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyDesc> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// All overloads of a method, in declaration order.
    pub fn overloads<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodDesc> + 'a {
        self.methods.iter().filter(move |m| m.name == name)
    }

    /// First overload of `name` whose parameter list satisfies `signature`.
    pub fn method_where(
        &self,
        name: &str,
        signature: impl Fn(&[ParamKind]) -> bool,
    ) -> Option<&MethodDesc> {
        self.methods
            .iter()
            .find(|m| m.name == name && signature(&m.params))
    }
}

/// Last segment of a `.` or `::` separated path.
pub(crate) fn simple_name_of(qualified_name: &str) -> &str {
    qualified_name
        .rsplit(['.', ':'])
        .next()
        .unwrap_or(qualified_name)
}

/// Builder for [`TypeDescriptor`].
#[derive(Debug, Clone)]
pub struct TypeDescriptorBuilder {
    qualified_name: String,
    visibility: Visibility,
    properties: Vec<PropertyDesc>,
    methods: Vec<MethodDesc>,
    constructors: Vec<ConstructorDesc>,
}

impl TypeDescriptorBuilder {
    fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            visibility: Visibility::Public,
            properties: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn property(mut self, property: PropertyDesc) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn method(mut self, method: MethodDesc) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn constructor(mut self, params: Vec<ParamKind>, factory: Factory) -> Self {
        self.constructors.push(ConstructorDesc::new(params, factory));
        self
    }

    /// Build the descriptor.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the name is empty or a property is
    /// declared twice.
    pub fn build(self) -> Result<TypeDescriptor> {
        if simple_name_of(self.qualified_name.trim()).is_empty() {
            return Err(Error::InvalidConfig(format!(
                "type name '{}' has an empty simple name",
                self.qualified_name
            )));
        }

        if let Some(duplicate) = self
            .properties
            .iter()
            .enumerate()
            .find(|(i, p)| self.properties[..*i].iter().any(|q| q.name == p.name))
            .map(|(_, p)| p.name.clone())
        {
            return Err(Error::InvalidConfig(format!(
                "property '{duplicate}' declared twice on '{}'",
                self.qualified_name
            )));
        }

        Ok(TypeDescriptor {
            qualified_name: self.qualified_name,
            visibility: self.visibility,
            properties: self.properties,
            methods: self.methods,
            constructors: self.constructors,
        })
    }
}
