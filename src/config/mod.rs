use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::registry::DomainRegistry;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};

/// Desired-state declaration loaded from a TOML file:
///
/// ```toml
/// [[domains]]
/// name = "example1.com"
/// languages = ["cs", "en"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub domains: Vec<DomainConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainConfig {
    pub name: String,
    pub languages: Vec<String>,
}

impl RegistryConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Replays the declaration through the registry's checked operations, so
    /// a mistake in the file surfaces as the same error a direct call would
    /// produce, in the same order.
    pub fn build_registry(&self) -> Result<DomainRegistry> {
        self.validate()?;

        let mut registry = DomainRegistry::new();
        for domain in &self.domains {
            registry.add_domain(&domain.name)?;
            for code in &domain.languages {
                registry.add_domain_language(&domain.name, code)?;
            }
        }
        Ok(registry)
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<()> {
        for domain in &self.domains {
            validate_non_empty_string("domains.name", &domain.name)?;
            for code in &domain.languages {
                validate_non_empty_string("domains.languages", code)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RegistryError;

    const EXAMPLE: &str = r#"
        [[domains]]
        name = "example1.com"
        languages = ["cs", "en"]

        [[domains]]
        name = "example2.com"
        languages = []
    "#;

    #[test]
    fn parses_and_builds_registry() {
        let config = RegistryConfig::from_toml_str(EXAMPLE).unwrap();
        let registry = config.build_registry().unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.languages("example1.com").unwrap(),
            &["cs".to_string(), "en".to_string()]
        );
        assert!(registry.languages("example2.com").unwrap().is_empty());
    }

    #[test]
    fn invalid_code_in_config_fails_registry_construction() {
        let config = RegistryConfig::from_toml_str(
            r#"
            [[domains]]
            name = "example1.com"
            languages = ["invalid"]
            "#,
        )
        .unwrap();

        let err = config.build_registry().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument { .. }));
    }

    #[test]
    fn duplicate_domain_in_config_fails_registry_construction() {
        let config = RegistryConfig::from_toml_str(
            r#"
            [[domains]]
            name = "example1.com"
            languages = []

            [[domains]]
            name = "example1.com"
            languages = []
            "#,
        )
        .unwrap();

        let err = config.build_registry().unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateEntry { .. }));
    }

    #[test]
    fn blank_domain_name_is_rejected_before_registration() {
        let config = RegistryConfig::from_toml_str(
            r#"
            [[domains]]
            name = "  "
            languages = []
            "#,
        )
        .unwrap();

        let err = config.build_registry().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = RegistryConfig::from_toml_str("domains = 1").unwrap_err();
        assert!(matches!(err, RegistryError::ConfigParse(_)));
    }
}
