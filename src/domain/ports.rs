use crate::domain::model::{PersistedDomain, PersistedLanguage, StagedRecord};
use crate::utils::error::Result;

/// Read access to the persisted domain records.
pub trait DomainStore: Send + Sync {
    fn find_all(&self) -> Result<Vec<PersistedDomain>>;
    fn find_by_name(&self, name: &str) -> Result<Option<PersistedDomain>>;
}

/// Resolves ISO codes to persisted language records.
pub trait LanguageStore: Send + Sync {
    fn find_by_code(&self, code: &str) -> Result<Option<PersistedLanguage>>;
}

/// Buffers record creations and commits them as one atomic write.
/// Records staged in a pass become visible only after `commit` succeeds.
pub trait ChangeWriter: Send + Sync {
    fn stage_create(&mut self, record: StagedRecord) -> Result<()>;
    fn commit(&mut self) -> Result<()>;
}
