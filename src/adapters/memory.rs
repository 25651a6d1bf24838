use std::sync::{Arc, Mutex};

use crate::core::languages::ISO_639_1_CODES;
use crate::domain::model::{PersistedDomain, PersistedLanguage, StagedRecord};
use crate::domain::ports::{ChangeWriter, DomainStore, LanguageStore};
use crate::utils::error::{RegistryError, Result};

#[derive(Debug, Default)]
struct StoreState {
    domains: Vec<PersistedDomain>,
    languages: Vec<PersistedLanguage>,
    staged: Vec<StagedRecord>,
    commits: usize,
}

/// In-memory backend implementing all three persistence ports. Handles are
/// cheap clones sharing one locked state, so the store and writer sides handed
/// to a reconciler observe the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose language catalog is pre-seeded with every code from the
    /// fixed ISO 639-1 table.
    pub fn with_iso_catalog() -> Self {
        let store = Self::new();
        {
            let mut state = store.state.lock().expect("store state");
            state.languages = ISO_639_1_CODES
                .iter()
                .map(|code| PersistedLanguage::new(*code))
                .collect();
        }
        store
    }

    pub fn seed_language(&self, code: &str) {
        let mut state = self.state.lock().expect("store state");
        state.languages.push(PersistedLanguage::new(code));
    }

    /// Seeds an already-committed domain with the given linked codes. Codes
    /// are stored as given; the language catalog is not consulted.
    pub fn seed_domain(&self, name: &str, codes: &[&str]) {
        let mut state = self.state.lock().expect("store state");
        state.domains.push(PersistedDomain {
            name: name.to_string(),
            languages: codes
                .iter()
                .map(|code| PersistedLanguage::new(*code))
                .collect(),
        });
    }

    /// Number of commit calls performed so far.
    pub fn commit_count(&self) -> usize {
        self.state.lock().expect("store state").commits
    }

    /// Records staged but not yet committed.
    pub fn pending_count(&self) -> usize {
        self.state.lock().expect("store state").staged.len()
    }

    /// Snapshot of the committed domain records.
    pub fn domains(&self) -> Vec<PersistedDomain> {
        self.state.lock().expect("store state").domains.clone()
    }
}

impl DomainStore for InMemoryStore {
    fn find_all(&self) -> Result<Vec<PersistedDomain>> {
        Ok(self.state.lock().expect("store state").domains.clone())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<PersistedDomain>> {
        let state = self.state.lock().expect("store state");
        Ok(state
            .domains
            .iter()
            .find(|domain| domain.name == name)
            .cloned())
    }
}

impl LanguageStore for InMemoryStore {
    fn find_by_code(&self, code: &str) -> Result<Option<PersistedLanguage>> {
        let state = self.state.lock().expect("store state");
        Ok(state
            .languages
            .iter()
            .find(|language| language.iso_code == code)
            .cloned())
    }
}

impl ChangeWriter for InMemoryStore {
    fn stage_create(&mut self, record: StagedRecord) -> Result<()> {
        self.state.lock().expect("store state").staged.push(record);
        Ok(())
    }

    /// Applies the staged buffer under the one state lock: domains first, then
    /// links. Every link target is checked before anything is attached, so a
    /// bad batch leaves no partial link set behind.
    fn commit(&mut self) -> Result<()> {
        let mut state = self.state.lock().expect("store state");
        let staged = std::mem::take(&mut state.staged);

        for record in &staged {
            if let StagedRecord::Domain(domain) = record {
                state.domains.push(domain.clone());
            }
        }

        for record in &staged {
            if let StagedRecord::DomainLanguage(link) = record {
                if !state
                    .domains
                    .iter()
                    .any(|domain| domain.name == link.domain_name)
                {
                    return Err(RegistryError::Storage {
                        message: format!(
                            "staged link references unknown domain '{}'",
                            link.domain_name
                        ),
                    });
                }
            }
        }

        for record in staged {
            if let StagedRecord::DomainLanguage(link) = record {
                let domain = state
                    .domains
                    .iter_mut()
                    .find(|domain| domain.name == link.domain_name)
                    .expect("link target checked above");
                domain.languages.push(link.language);
            }
        }

        state.commits += 1;
        Ok(())
    }
}
