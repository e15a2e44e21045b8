//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: ~/.config/person-probe/config.toml
//! 3. Explicit config file (`--config PATH`)
//! 4. Environment variables: `PERSON_PROBE_*`
//!
//! # Example Config
//!
//! ```toml
//! fallback_name = "Person"
//! output = "json"
//!
//! [preferred]
//! type_name = "People.Domain.Person"
//! module = "People.Domain"
//!
//! [[candidates]]
//! type_name = "Models.Person"
//! module = "Models"
//!
//! [checks]
//! only = ["full-name", "birthday"]
//! ```
//!
//! # Module Structure
//!
//! - `types`: Configuration structures and defaults
//! - `load`: Loading from files and environment
//! - `merge`: Layer merging
//! - `validate`: Validation

mod load;
mod merge;
mod types;
mod validate;

#[cfg(test)]
mod tests_loading;
#[cfg(test)]
mod tests_validation;

pub use load::{global_config_path, load_config, load_layer};
pub use types::{ChecksConfig, ConfigLayer, OutputFormat, ProbeConfig};
