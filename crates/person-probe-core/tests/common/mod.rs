//! Common Person shapes for person-probe-core integration tests
//!
//! Integration tests need relaxed clippy settings for test ergonomics.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    dead_code
)]

use std::sync::Arc;

use person_probe_core::{
    numeric, person::describe_person_like, DynamicObject, Error, MethodDesc, Module,
    ModuleRegistry, Number, NumericKind, ParamKind, Person, PersonLike, PersonObject,
    PropertyDesc, Result, TypeDescriptor, Value,
};
use rust_decimal::Decimal;

pub const PROPERTY_NAMES: [&str; 3] = ["FirstName", "LastName", "Age"];
pub const METHOD_NAMES: [&str; 3] = ["GetFullName", "HaveBirthday", "Rename"];

/// The reference Person under `People.Person`.
pub fn reference() -> Arc<TypeDescriptor> {
    Arc::new(describe_person_like::<Person>("People.Person").unwrap())
}

/// Factory for a blank reference [`Person`].
pub fn default_person(_: &[Value]) -> Result<Box<dyn DynamicObject>> {
    Ok(Box::new(PersonObject(Person::default())))
}

/// Factory for "Ala Makota", aged 7.
pub fn seven_year_old(_: &[Value]) -> Result<Box<dyn DynamicObject>> {
    Ok(Box::new(PersonObject(Person::new("Ala", "Makota", 7))))
}

/// Object reporting its age as text.
#[derive(Debug, Default)]
pub struct TextAge;

impl DynamicObject for TextAge {
    fn get(&self, property: &str) -> Result<Value> {
        match property {
            "Age" => Ok(Value::from("twenty")),
            other => Err(Error::member_not_found("Text.Person", other)),
        }
    }

    fn set(&mut self, property: &str, _: Value) -> Result<()> {
        Err(Error::PropertyNotSettable(property.to_string()))
    }

    fn invoke(&mut self, _: &str, _: &[Value]) -> Result<Value> {
        Ok(Value::Unit)
    }
}

pub fn text_age(_: &[Value]) -> Result<Box<dyn DynamicObject>> {
    Ok(Box::new(TextAge))
}

/// The reference Person with one property or method left out.
pub fn reference_without(missing: &str) -> Arc<TypeDescriptor> {
    let properties = [
        ("FirstName", ParamKind::Text),
        ("LastName", ParamKind::Text),
        ("Age", ParamKind::Numeric(NumericKind::Int)),
    ];
    let methods = [
        MethodDesc::new("GetFullName", vec![], Some(ParamKind::Text)),
        MethodDesc::new("HaveBirthday", vec![], None),
        MethodDesc::new("Rename", vec![ParamKind::Text, ParamKind::Text], None),
    ];

    let builder = properties
        .into_iter()
        .filter(|(name, _)| *name != missing)
        .fold(TypeDescriptor::builder("People.Person"), |b, (name, kind)| {
            b.property(PropertyDesc::read_write(name, kind))
        });
    let builder = methods
        .into_iter()
        .filter(|m| m.name != missing)
        .fold(builder, |b, m| b.method(m));

    Arc::new(builder.constructor(vec![], default_person).build().unwrap())
}

/// Person whose only constructor is `(string firstName, int age)`.
pub fn two_arg_constructor_person() -> Arc<TypeDescriptor> {
    fn build(args: &[Value]) -> Result<Box<dyn DynamicObject>> {
        match args {
            [Value::Text(first), age] => {
                let age = i32::try_from(numeric::to_integer(age)?)
                    .map_err(|e| Error::construction("Legacy.Person", e.to_string()))?;
                Ok(Box::new(PersonObject(Person::new(first.clone(), "", age))))
            }
            _ => Err(Error::construction("Legacy.Person", "expected (string, int)")),
        }
    }

    Arc::new(
        TypeDescriptor::builder("Legacy.Person")
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
            .constructor(
                vec![ParamKind::Text, ParamKind::Numeric(NumericKind::Int)],
                build,
            )
            .build()
            .unwrap(),
    )
}

/// Person keeping its age as a decimal and aging by a short amount.
#[derive(Debug, Default)]
pub struct LedgerPerson {
    pub first_name: String,
    pub last_name: String,
    pub age: Decimal,
}

impl DynamicObject for LedgerPerson {
    fn get(&self, property: &str) -> Result<Value> {
        match property {
            "FirstName" => Ok(Value::from(self.first_name.clone())),
            "LastName" => Ok(Value::from(self.last_name.clone())),
            "Age" => Ok(Value::Number(Number::Decimal(self.age))),
            other => Err(Error::member_not_found("Ledger.Person", other)),
        }
    }

    fn set(&mut self, property: &str, value: Value) -> Result<()> {
        match (property, value) {
            ("FirstName", Value::Text(text)) => self.first_name = text,
            ("LastName", Value::Text(text)) => self.last_name = text,
            ("Age", Value::Number(Number::Decimal(age))) => self.age = age,
            (name, value) => {
                return Err(Error::argument_mismatch(name, value.type_name()));
            }
        }
        Ok(())
    }

    fn invoke(&mut self, method: &str, args: &[Value]) -> Result<Value> {
        match (method, args) {
            ("GetFullName", []) => Ok(Value::Text(format!(
                "{}, {}",
                self.last_name, self.first_name
            ))),
            ("HaveBirthday", [Value::Number(Number::Short(years))]) => {
                self.age += Decimal::from(*years);
                Ok(Value::Unit)
            }
            ("Rename", [Value::Text(first), Value::Text(last)]) => {
                self.first_name.clone_from(first);
                self.last_name.clone_from(last);
                Ok(Value::Unit)
            }
            (name, _) => Err(Error::argument_mismatch(name, "unexpected arguments")),
        }
    }
}

/// [`LedgerPerson`] described with `HaveBirthday(short years)` only.
pub fn amount_birthday_person() -> Arc<TypeDescriptor> {
    fn build(_: &[Value]) -> Result<Box<dyn DynamicObject>> {
        Ok(Box::new(LedgerPerson::default()))
    }

    Arc::new(
        TypeDescriptor::builder("Ledger.Person")
            .property(PropertyDesc::read_write("FirstName", ParamKind::Text))
            .property(PropertyDesc::read_write("LastName", ParamKind::Text))
            .property(PropertyDesc::read_write(
                "Age",
                ParamKind::Numeric(NumericKind::Decimal),
            ))
            .method(MethodDesc::new("GetFullName", vec![], Some(ParamKind::Text)))
            .method(MethodDesc::new(
                "HaveBirthday",
                vec![ParamKind::Numeric(NumericKind::Short)],
                None,
            ))
            .method(MethodDesc::new(
                "Rename",
                vec![ParamKind::Text, ParamKind::Text],
                None,
            ))
            .constructor(vec![], build)
            .build()
            .unwrap(),
    )
}

/// Wraps a [`Person`] and overrides part of the contract.
#[derive(Debug, Default)]
pub struct Quirky<const QUIRK: u8>(pub Person);

/// `HaveBirthday` does nothing.
pub const AGELESS: u8 = 0;
/// `Rename` trims and lower-cases the names.
pub const NORMALIZING: u8 = 1;
/// `GetFullName` shouts "LAST, FIRST".
pub const SHOUTING: u8 = 2;
/// `GetFullName` returns only the first name.
pub const FORGETFUL: u8 = 3;

impl<const QUIRK: u8> PersonLike for Quirky<QUIRK> {
    fn first_name(&self) -> &str {
        self.0.first_name()
    }

    fn last_name(&self) -> &str {
        self.0.last_name()
    }

    fn age(&self) -> i32 {
        self.0.age()
    }

    fn set_first_name(&mut self, first_name: String) {
        self.0.set_first_name(first_name);
    }

    fn set_last_name(&mut self, last_name: String) {
        self.0.set_last_name(last_name);
    }

    fn set_age(&mut self, age: i32) {
        self.0.set_age(age);
    }

    fn full_name(&self) -> String {
        match QUIRK {
            SHOUTING => format!("{}, {}", self.last_name(), self.first_name()).to_uppercase(),
            FORGETFUL => self.first_name().to_string(),
            _ => self.0.full_name(),
        }
    }

    fn have_birthday(&mut self) {
        if QUIRK != AGELESS {
            self.0.have_birthday();
        }
    }

    fn rename(&mut self, first_name: String, last_name: String) {
        if QUIRK == NORMALIZING {
            self.0
                .rename(first_name.trim().to_lowercase(), last_name.trim().to_lowercase());
        } else {
            self.0.rename(first_name, last_name);
        }
    }
}

pub fn quirky<const QUIRK: u8>() -> Arc<TypeDescriptor> {
    Arc::new(describe_person_like::<Quirky<QUIRK>>("Quirky.Person").unwrap())
}

/// Module named `name` holding the given types.
pub fn module(name: &str, types: &[&str]) -> Module {
    types.iter().fold(Module::new(name), |m, t| {
        m.with_type(describe_person_like::<Person>(*t).unwrap())
    })
}

/// Registry with the given modules in order.
pub fn registry(modules: Vec<Module>) -> ModuleRegistry {
    modules
        .into_iter()
        .fold(ModuleRegistry::new(), ModuleRegistry::with_module)
}
