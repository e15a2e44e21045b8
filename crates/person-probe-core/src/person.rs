//! The reference Person type and its typed capability
//!
//! [`PersonLike`] states the Person contract statically. [`PersonObject`]
//! adapts any implementation to [`DynamicObject`] so it can be registered
//! and driven by name like any other target type.

use serde::{Deserialize, Serialize};

use crate::{
    descriptor::{MethodDesc, PropertyDesc, TypeDescriptor},
    instance::DynamicObject,
    numeric,
    registry::{Module, ModuleRegistry},
    value::ParamKind,
    Error, Number, NumericKind, Result, Value,
};

/// Module the reference Person is registered in.
pub const REFERENCE_MODULE: &str = "People.Domain";

/// Qualified name of the reference Person.
pub const REFERENCE_TYPE: &str = "People.Domain.Person";

/// Typed form of the Person contract.
pub trait PersonLike {
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn age(&self) -> i32;

    fn set_first_name(&mut self, first_name: String);
    fn set_last_name(&mut self, last_name: String);
    fn set_age(&mut self, age: i32);

    /// First and last name separated by a space.
    fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    fn have_birthday(&mut self) {
        self.set_age(self.age().saturating_add(1));
    }

    fn rename(&mut self, first_name: String, last_name: String) {
        self.set_first_name(first_name);
        self.set_last_name(last_name);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    age: i32,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: i32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }
}

impl PersonLike for Person {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn age(&self) -> i32 {
        self.age
    }

    fn set_first_name(&mut self, first_name: String) {
        self.first_name = first_name;
    }

    fn set_last_name(&mut self, last_name: String) {
        self.last_name = last_name;
    }

    fn set_age(&mut self, age: i32) {
        self.age = age;
    }
}

/// Exposes a [`PersonLike`] through [`DynamicObject`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonObject<P>(pub P);

impl<P: PersonLike + std::fmt::Debug> DynamicObject for PersonObject<P> {
    fn get(&self, property: &str) -> Result<Value> {
        match property {
            "FirstName" => Ok(Value::from(self.0.first_name())),
            "LastName" => Ok(Value::from(self.0.last_name())),
            "Age" => Ok(Value::Number(Number::Int(self.0.age()))),
            other => Err(Error::member_not_found("Person", other)),
        }
    }

    fn set(&mut self, property: &str, value: Value) -> Result<()> {
        match (property, value) {
            ("FirstName", Value::Text(text)) => self.0.set_first_name(text),
            ("LastName", Value::Text(text)) => self.0.set_last_name(text),
            ("Age", value) => {
                let years = numeric::to_integer(&value)?;
                let age = i32::try_from(years).map_err(|_| Error::NumericOverflow {
                    value: years.to_string(),
                    kind: NumericKind::Int,
                })?;
                self.0.set_age(age);
            }
            (name, value) => {
                return Err(Error::argument_mismatch(
                    name,
                    format!("cannot assign {}", value.type_name()),
                ));
            }
        }
        Ok(())
    }

    fn invoke(&mut self, method: &str, args: &[Value]) -> Result<Value> {
        match (method, args) {
            ("GetFullName", []) => Ok(Value::Text(self.0.full_name())),
            ("HaveBirthday", []) => {
                self.0.have_birthday();
                Ok(Value::Unit)
            }
            ("Rename", [Value::Text(first), Value::Text(last)]) => {
                self.0.rename(first.clone(), last.clone());
                Ok(Value::Unit)
            }
            (name, _) => Err(Error::argument_mismatch(
                name,
                format!("no overload takes {} argument(s)", args.len()),
            )),
        }
    }
}

fn default_factory<P>(_: &[Value]) -> Result<Box<dyn DynamicObject>>
where
    P: PersonLike + Default + std::fmt::Debug + 'static,
{
    Ok(Box::new(PersonObject(P::default())))
}

/// Describe a [`PersonLike`] type under the given qualified name.
///
/// The descriptor declares read-write `FirstName`, `LastName` and `Age`
/// (int), `GetFullName()`, `HaveBirthday()`, `Rename(string, string)` and a
/// zero-argument constructor backed by `P::default()`.
pub fn describe_person_like<P>(qualified_name: impl Into<String>) -> Result<TypeDescriptor>
where
    P: PersonLike + Default + std::fmt::Debug + 'static,
{
    TypeDescriptor::builder(qualified_name)
        .property(PropertyDesc::read_write("FirstName", ParamKind::Text))
        .property(PropertyDesc::read_write("LastName", ParamKind::Text))
        .property(PropertyDesc::read_write(
            "Age",
            ParamKind::Numeric(NumericKind::Int),
        ))
        .method(MethodDesc::new("GetFullName", vec![], Some(ParamKind::Text)))
        .method(MethodDesc::new("HaveBirthday", vec![], None))
        .method(MethodDesc::new(
            "Rename",
            vec![ParamKind::Text, ParamKind::Text],
            None,
        ))
        .constructor(vec![], default_factory::<P>)
        .build()
}

/// Registry holding the reference [`Person`] in [`REFERENCE_MODULE`].
pub fn reference_registry() -> Result<ModuleRegistry> {
    let person = describe_person_like::<Person>(REFERENCE_TYPE)?;
    Ok(ModuleRegistry::new().with_module(Module::new(REFERENCE_MODULE).with_type(person)))
}
