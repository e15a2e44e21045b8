//! person-probe - Person conformance checks from the command line
//!
//! Resolves the Person type registered at startup, runs the selected
//! checks and reports the outcome as a table or JSON.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
