pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::memory::InMemoryStore;
pub use config::RegistryConfig;
pub use crate::core::reconciler::Reconciler;
pub use crate::core::registry::DomainRegistry;
pub use utils::error::{RegistryError, Result};
