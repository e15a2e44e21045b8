//! Instance construction and by-name access
//!
//! [`DynamicObject`] is the capability a target type implements so it can be
//! driven by name. [`Instance`] pairs such an object with its descriptor and
//! validates every access against the declared members before delegating,
//! coercing numeric arguments to the declared kind on the way in.

use std::sync::Arc;

use crate::{
    descriptor::{ConstructorDesc, MethodDesc, TypeDescriptor},
    value::ParamKind,
    Error, Result, Value,
};

/// By-name access to an object's properties and methods.
///
/// Implementations may assume that [`Instance`] already checked the member
/// exists and that arguments match the declared parameter kinds.
pub trait DynamicObject: std::fmt::Debug {
    /// Read a property.
    fn get(&self, property: &str) -> Result<Value>;

    /// Write a property.
    fn set(&mut self, property: &str, value: Value) -> Result<()>;

    /// Call a method. Methods without a result return [`Value::Unit`].
    fn invoke(&mut self, method: &str, args: &[Value]) -> Result<Value>;
}

/// One object of the target type, owned by the check that created it.
#[derive(Debug)]
pub struct Instance {
    descriptor: Arc<TypeDescriptor>,
    object: Box<dyn DynamicObject>,
}

impl Instance {
    /// Build a default instance of the described type.
    ///
    /// Uses the zero-argument constructor when there is one. Otherwise picks
    /// the constructor with the fewest parameters (first declared wins a
    /// tie) and synthesizes an argument per parameter from its category.
    ///
    /// # Errors
    ///
    /// Returns `Error::Construction` when the type declares no constructor
    /// or the factory rejects the synthesized arguments.
    pub fn construct(descriptor: &Arc<TypeDescriptor>) -> Result<Self> {
        let constructor = select_constructor(descriptor)?;

        let args = constructor
            .params
            .iter()
            .map(ParamKind::synthesize)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            type_name = descriptor.qualified_name(),
            arity = constructor.arity(),
            "Constructing instance"
        );

        let object = constructor.build(&args).map_err(|e| match e {
            Error::Construction { .. } => e,
            other => Error::construction(descriptor.qualified_name(), other.to_string()),
        })?;

        Ok(Self {
            descriptor: Arc::clone(descriptor),
            object,
        })
    }

    /// Descriptor of the instance's type.
    #[must_use]
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Read a declared, readable property.
    ///
    /// # Errors
    ///
    /// Returns `Error::MemberNotFound` if the property is not declared or
    /// has no getter.
    pub fn get(&self, name: &str) -> Result<Value> {
        self.descriptor
            .property(name)
            .filter(|p| p.readable)
            .ok_or_else(|| self.missing(name))?;
        self.object.get(name)
    }

    /// Write a declared, settable property.
    ///
    /// Numeric values are converted to the property's numeric kind.
    ///
    /// # Errors
    ///
    /// Returns `Error::MemberNotFound`, `Error::PropertyNotSettable` or
    /// `Error::ArgumentMismatch` when the write cannot happen.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        let property = self
            .descriptor
            .property(name)
            .ok_or_else(|| self.missing(name))?;
        if !property.settable {
            return Err(Error::PropertyNotSettable(name.to_string()));
        }
        let value = coerce(name, &property.kind, value)?;
        self.object.set(name, value)
    }

    /// Write a property only if it has a setter.
    ///
    /// Returns whether the write happened.
    ///
    /// # Errors
    ///
    /// Returns `Error::MemberNotFound` if the property is not declared.
    pub fn set_if_settable(&mut self, name: &str, value: Value) -> Result<bool> {
        let settable = self
            .descriptor
            .property(name)
            .ok_or_else(|| self.missing(name))?
            .settable;
        if settable {
            self.set(name, value)?;
        } else {
            tracing::debug!(property = name, "Property has no setter, leaving as is");
        }
        Ok(settable)
    }

    /// Call the first overload of `name` whose parameters accept `args`.
    ///
    /// # Errors
    ///
    /// Returns `Error::MemberNotFound` if no method has that name and
    /// `Error::ArgumentMismatch` if no overload accepts the arguments.
    pub fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        let mut overloads = self.descriptor.overloads(name).peekable();
        if overloads.peek().is_none() {
            return Err(self.missing(name));
        }

        let matched = overloads
            .filter(|m| m.arity() == args.len())
            .find_map(|m| bind(m, args).ok());

        match matched {
            Some(bound) => self.object.invoke(name, &bound),
            None => Err(Error::argument_mismatch(
                name,
                format!(
                    "no overload accepts ({})",
                    args.iter()
                        .map(Value::type_name)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            )),
        }
    }

    fn missing(&self, member: &str) -> Error {
        Error::member_not_found(self.descriptor.qualified_name(), member)
    }
}

fn select_constructor(descriptor: &TypeDescriptor) -> Result<&ConstructorDesc> {
    descriptor
        .constructors()
        .iter()
        .min_by_key(|c| c.arity())
        .ok_or_else(|| Error::construction(descriptor.qualified_name(), "no constructor declared"))
}

/// Coerce every argument to the overload's parameter kinds.
fn bind(method: &MethodDesc, args: &[Value]) -> Result<Vec<Value>> {
    method
        .params
        .iter()
        .zip(args)
        .map(|(kind, arg)| coerce(&method.name, kind, arg.clone()))
        .collect()
}

/// Pass `value` through unchanged when `kind` accepts it, otherwise convert
/// between numeric kinds. Integer targets truncate fractions.
fn coerce(member: &str, kind: &ParamKind, value: Value) -> Result<Value> {
    if kind.accepts(&value) {
        return Ok(value);
    }
    match (kind, &value) {
        (ParamKind::Numeric(target), Value::Number(number)) => {
            number.convert_to(*target).map(Value::Number)
        }
        _ => Err(Error::argument_mismatch(
            member,
            format!("expected {kind}, got {}", value.type_name()),
        )),
    }
}
