use std::collections::{BTreeMap, HashSet};

use crate::core::registry::DomainRegistry;
use crate::domain::model::{
    PersistedDomain, PersistedDomainLanguage, ReconcileReport, StagedRecord,
};
use crate::domain::ports::{ChangeWriter, DomainStore, LanguageStore};
use crate::utils::error::{RegistryError, Result};

/// Diffs the desired registry state against the persisted snapshot and stages
/// the missing records. Purely additive: persisted records absent from the
/// registry are left alone.
pub struct Reconciler<D, L, W> {
    domains: D,
    languages: L,
    writer: W,
}

impl<D: DomainStore, L: LanguageStore, W: ChangeWriter> Reconciler<D, L, W> {
    pub fn new(domains: D, languages: L, writer: W) -> Self {
        Self {
            domains,
            languages,
            writer,
        }
    }

    /// Runs one reconciliation pass. The whole diff is resolved before the
    /// first record is staged, so a failing pass stages nothing and never
    /// commits. A pass with nothing to insert still commits once.
    pub fn reconcile(&mut self, registry: &DomainRegistry) -> Result<ReconcileReport> {
        tracing::debug!("loading persisted domain state");
        let actual = self.load_actual_state()?;

        let staged = self.compute_missing(registry, &actual)?;

        let mut report = ReconcileReport::default();
        for record in &staged {
            match record {
                StagedRecord::Domain(_) => report.domains_created += 1,
                StagedRecord::DomainLanguage(_) => report.languages_linked += 1,
            }
        }

        tracing::debug!(
            domains = report.domains_created,
            languages = report.languages_linked,
            "staging missing records"
        );
        for record in staged {
            self.writer.stage_create(record)?;
        }
        self.writer.commit()?;

        tracing::info!(
            domains = report.domains_created,
            languages = report.languages_linked,
            "reconciliation committed"
        );
        Ok(report)
    }

    /// Snapshot of the persisted state: domain name to the set of ISO codes
    /// currently linked to it. Names are kept exactly as stored; lookups
    /// against this map are case-sensitive.
    fn load_actual_state(&self) -> Result<BTreeMap<String, HashSet<String>>> {
        let mut actual = BTreeMap::new();
        for domain in self.domains.find_all()? {
            let codes = domain
                .languages
                .iter()
                .map(|language| language.iso_code.clone())
                .collect();
            actual.insert(domain.name, codes);
        }
        Ok(actual)
    }

    fn compute_missing(
        &self,
        registry: &DomainRegistry,
        actual: &BTreeMap<String, HashSet<String>>,
    ) -> Result<Vec<StagedRecord>> {
        let mut staged = Vec::new();

        for (name, codes) in registry.iter() {
            let known = actual.get(name);

            let domain_name = match known {
                None => {
                    staged.push(StagedRecord::Domain(PersistedDomain::new(name)));
                    name.to_string()
                }
                Some(_) => {
                    let record =
                        self.domains
                            .find_by_name(name)?
                            .ok_or_else(|| RegistryError::Storage {
                                message: format!(
                                    "domain '{name}' disappeared from the store during reconciliation"
                                ),
                            })?;
                    record.name
                }
            };

            for code in codes {
                if known.is_some_and(|linked| linked.contains(code)) {
                    continue;
                }

                let language = self.languages.find_by_code(code)?.ok_or_else(|| {
                    RegistryError::ResolutionFailure { code: code.clone() }
                })?;
                staged.push(StagedRecord::DomainLanguage(PersistedDomainLanguage {
                    domain_name: domain_name.clone(),
                    language,
                }));
            }
        }

        Ok(staged)
    }
}
