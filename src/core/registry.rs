use std::collections::BTreeMap;

use crate::core::languages::is_valid_code;
use crate::utils::error::{RegistryError, Result};

/// In-memory desired state: domain names mapped to the language codes they
/// should end up with. Built incrementally by the caller, then handed to the
/// reconciler. Domains iterate in name order; codes keep insertion order.
#[derive(Debug, Default, Clone)]
pub struct DomainRegistry {
    domains: BTreeMap<String, Vec<String>>,
}

impl DomainRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new domain with an empty language set.
    pub fn add_domain(&mut self, name: &str) -> Result<()> {
        if self.domains.contains_key(name) {
            return Err(RegistryError::DuplicateEntry {
                message: format!("domain '{name}' has already been registered"),
            });
        }

        tracing::debug!(domain = name, "registered domain");
        self.domains.insert(name.to_string(), Vec::new());
        Ok(())
    }

    /// Associates a language code with a registered domain.
    /// Check order is fixed: domain existence, code validity, then duplicates.
    pub fn add_domain_language(&mut self, name: &str, code: &str) -> Result<()> {
        let languages = match self.domains.get_mut(name) {
            Some(languages) => languages,
            None => {
                return Err(RegistryError::InvalidArgument {
                    message: format!("domain '{name}' has not been registered"),
                })
            }
        };

        if !is_valid_code(code) {
            return Err(RegistryError::InvalidArgument {
                message: format!("language '{code}' is not a valid ISO 639-1 code"),
            });
        }

        if languages.iter().any(|existing| existing == code) {
            return Err(RegistryError::DuplicateEntry {
                message: format!("language '{code}' for domain '{name}' has already been registered"),
            });
        }

        tracing::debug!(domain = name, language = code, "registered domain language");
        languages.push(code.to_string());
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.domains.contains_key(name)
    }

    /// Codes registered for a domain, in insertion order.
    pub fn languages(&self, name: &str) -> Option<&[String]> {
        self.domains.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.domains
            .iter()
            .map(|(name, codes)| (name.as_str(), codes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
