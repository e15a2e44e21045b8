//! Validation-focused tests for configuration

#[cfg(test)]
mod validation_tests {
    use crate::{
        checks::{CheckId, CheckSuite},
        config::{ChecksConfig, ProbeConfig},
        resolver::CandidateName,
        Error,
    };

    #[test]
    fn test_defaults_are_valid() {
        assert!(ProbeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_fallback_name_rejected() {
        let config = ProbeConfig {
            fallback_name: "  ".into(),
            ..ProbeConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_qualified_fallback_name_rejected() {
        let config = ProbeConfig {
            fallback_name: "People.Person".into(),
            ..ProbeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_candidate_module_rejected() {
        let config = ProbeConfig {
            candidates: vec![CandidateName::in_module("Person", "")],
            ..ProbeConfig::default()
        };
        let err = config.validate().err();
        assert!(err.is_some_and(|e| e.to_string().contains("empty module")));
    }

    #[test]
    fn test_empty_preferred_type_rejected() {
        let config = ProbeConfig {
            preferred: CandidateName::anywhere(""),
            ..ProbeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_check_id_rejected() {
        let config = ProbeConfig {
            checks: ChecksConfig {
                only: vec!["full-name".into(), "teleport".into()],
            },
            ..ProbeConfig::default()
        };
        let err = config.validate().err();
        assert!(err.is_some_and(|e| e.to_string().contains("teleport")));
    }

    #[test]
    fn test_suite_defaults_to_every_check() -> crate::Result<()> {
        assert_eq!(ProbeConfig::default().suite()?, CheckSuite::all());
        Ok(())
    }

    #[test]
    fn test_suite_honors_only() -> crate::Result<()> {
        let config = ProbeConfig {
            checks: ChecksConfig {
                only: vec![" rename ".into(), "property-age".into()],
            },
            ..ProbeConfig::default()
        };
        assert_eq!(
            config.suite()?.checks(),
            &[CheckId::Rename, CheckId::PropertyAge]
        );
        Ok(())
    }

    #[test]
    fn test_resolver_uses_preferred_first() {
        let resolver = ProbeConfig::default().resolver();
        let first = resolver.candidates().next().cloned();
        assert_eq!(first, Some(ProbeConfig::default().preferred));
        assert_eq!(resolver.fallback_name(), "Person");
    }
}
