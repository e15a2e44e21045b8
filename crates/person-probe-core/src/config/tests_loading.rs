//! Loading-focused tests for configuration
//!
//! Tests for configuration file loading, parsing and environment overrides.

#[cfg(test)]
mod loading_tests {
    use std::{collections::HashMap, io::Write};

    use serial_test::serial;

    use crate::{
        config::{load_config, load_layer, OutputFormat, ProbeConfig},
        resolver::CandidateName,
        Error, Result,
    };

    fn write_config(dir: &tempfile::TempDir, content: &str) -> Result<std::path::PathBuf> {
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path)
            .map_err(|e| Error::Io(format!("Failed to create test file: {e}")))?;
        file.write_all(content.as_bytes())
            .map_err(|e| Error::Io(format!("Failed to write test file: {e}")))?;
        Ok(path)
    }

    fn temp_dir() -> Result<tempfile::TempDir> {
        tempfile::tempdir().map_err(|e| Error::Io(format!("Failed to create temp dir: {e}")))
    }

    #[test]
    fn test_layer_from_full_file() -> Result<()> {
        let dir = temp_dir()?;
        let path = write_config(
            &dir,
            r#"
fallback_name = "Employee"
output = "json"

[preferred]
type_name = "Hr.Employee"
module = "Hr"

[[candidates]]
type_name = "Employee"

[checks]
only = ["rename"]
"#,
        )?;

        let config = ProbeConfig::default().merge(load_layer(&path)?);
        assert_eq!(config.fallback_name, "Employee");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.preferred, CandidateName::in_module("Hr.Employee", "Hr"));
        assert_eq!(config.candidates, vec![CandidateName::anywhere("Employee")]);
        assert_eq!(config.checks.only, vec!["rename".to_string()]);
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let dir = temp_dir()?;
        let path = write_config(&dir, "output = \"json\"\n")?;

        let config = ProbeConfig::default().merge(load_layer(&path)?);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.candidates, ProbeConfig::default().candidates);
        Ok(())
    }

    #[test]
    fn test_malformed_toml_returns_parse_error() -> Result<()> {
        let dir = temp_dir()?;
        let path = write_config(&dir, "fallback_name = \n invalid toml [[[")?;

        let result = load_layer(&path);
        assert!(matches!(result, Err(Error::Parse(_))));
        Ok(())
    }

    #[test]
    fn test_unknown_key_is_rejected() -> Result<()> {
        let dir = temp_dir()?;
        let path = write_config(&dir, "fallback = \"Person\"\n")?;
        assert!(matches!(load_layer(&path), Err(Error::Parse(_))));
        Ok(())
    }

    #[test]
    fn test_directory_path_is_io_error() -> Result<()> {
        let dir = temp_dir()?;
        assert!(matches!(load_layer(dir.path()), Err(Error::Io(_))));
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() -> Result<()> {
        let dir = temp_dir()?;
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(Error::Io(_))));
        Ok(())
    }

    #[test]
    fn test_env_lookup_overrides() -> Result<()> {
        let env: HashMap<&str, &str> = [
            ("PERSON_PROBE_FALLBACK_NAME", "Customer"),
            ("PERSON_PROBE_PREFERRED_TYPE", "Crm.Customer"),
            ("PERSON_PROBE_PREFERRED_MODULE", ""),
            ("PERSON_PROBE_OUTPUT", "JSON"),
        ]
        .into_iter()
        .collect();

        let config = ProbeConfig::default()
            .apply_env_with(|key| env.get(key).map(ToString::to_string))?;
        assert_eq!(config.fallback_name, "Customer");
        assert_eq!(config.preferred, CandidateName::anywhere("Crm.Customer"));
        assert_eq!(config.output, OutputFormat::Json);
        Ok(())
    }

    #[test]
    fn test_env_invalid_output_rejected() {
        let result = ProbeConfig::default().apply_env_with(|key| {
            (key == "PERSON_PROBE_OUTPUT").then(|| "yaml".to_string())
        });
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    #[serial]
    fn test_load_config_applies_process_env() -> Result<()> {
        let dir = temp_dir()?;
        let path = write_config(&dir, "fallback_name = \"Employee\"\n")?;

        std::env::set_var("PERSON_PROBE_FALLBACK_NAME", "Contractor");
        let result = load_config(Some(&path));
        std::env::remove_var("PERSON_PROBE_FALLBACK_NAME");

        assert_eq!(result?.fallback_name, "Contractor");
        Ok(())
    }

    #[test]
    #[serial]
    fn test_load_config_validates_after_env() -> Result<()> {
        let dir = temp_dir()?;
        let path = write_config(&dir, "output = \"human\"\n")?;

        std::env::set_var("PERSON_PROBE_FALLBACK_NAME", "");
        let result = load_config(Some(&path));
        std::env::remove_var("PERSON_PROBE_FALLBACK_NAME");

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
        Ok(())
    }

    #[test]
    fn test_config_renders_as_toml_and_reloads() -> Result<()> {
        let rendered = ProbeConfig::default().to_toml()?;
        assert!(rendered.contains("fallback_name = \"Person\""));

        let dir = temp_dir()?;
        let path = write_config(&dir, &rendered)?;
        assert_eq!(
            ProbeConfig::default().merge(load_layer(&path)?),
            ProbeConfig::default()
        );
        Ok(())
    }
}
