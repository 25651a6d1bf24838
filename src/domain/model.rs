/// A persisted language record, identified by its two-letter ISO 639-1 code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedLanguage {
    pub iso_code: String,
}

impl PersistedLanguage {
    pub fn new(iso_code: impl Into<String>) -> Self {
        Self {
            iso_code: iso_code.into(),
        }
    }
}

/// A persisted domain record together with its currently linked languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDomain {
    pub name: String,
    pub languages: Vec<PersistedLanguage>,
}

impl PersistedDomain {
    /// A freshly created domain record starts with no linked languages.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            languages: Vec::new(),
        }
    }
}

/// A link record associating one persisted domain with one resolved language.
/// The domain is referenced by its exact name; lookups are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDomainLanguage {
    pub domain_name: String,
    pub language: PersistedLanguage,
}

/// A pending insertion handed to the change writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedRecord {
    Domain(PersistedDomain),
    DomainLanguage(PersistedDomainLanguage),
}

/// Counts of insertions staged by one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub domains_created: usize,
    pub languages_linked: usize,
}

impl ReconcileReport {
    pub fn total_staged(&self) -> usize {
        self.domains_created + self.languages_linked
    }
}
