pub mod languages;
pub mod reconciler;
pub mod registry;

pub use crate::domain::model::{
    PersistedDomain, PersistedDomainLanguage, PersistedLanguage, ReconcileReport, StagedRecord,
};
pub use crate::domain::ports::{ChangeWriter, DomainStore, LanguageStore};
pub use crate::utils::error::Result;
