//! # Person Probe Core
//!
//! Locates a "Person" data type through an explicit module registry,
//! instantiates it and verifies its observable behavior by name.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Flow
//!
//! 1. [`registry::ModuleRegistry`] holds the modules registered at setup.
//! 2. [`resolver::TypeResolver`] walks a candidate name list, then scans
//!    every module for a public type named `Person`.
//! 3. [`instance::Instance::construct`] builds an object, synthesizing
//!    constructor arguments when no zero-argument constructor exists.
//! 4. [`checks::CheckSuite`] runs the behavioral checks and reports.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod checks;
pub mod config;
pub mod descriptor;
mod error;
pub mod instance;
pub mod numeric;
pub mod person;
pub mod registry;
pub mod resolver;
pub mod value;

pub use checks::{CheckId, CheckOutcome, CheckResult, CheckSuite, SuiteReport};
pub use config::{load_config, OutputFormat, ProbeConfig};
pub use descriptor::{
    ConstructorDesc, MethodDesc, PropertyDesc, TypeDescriptor, TypeDescriptorBuilder, Visibility,
};
pub use error::{Error, Result};
pub use instance::{DynamicObject, Instance};
pub use numeric::{NumericKind, Number};
pub use person::{Person, PersonLike, PersonObject};
pub use registry::{Module, ModuleRegistry};
pub use resolver::{CandidateName, TypeResolver};
pub use value::{ParamKind, Value};
