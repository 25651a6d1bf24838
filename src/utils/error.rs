use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("duplicate entry: {message}")]
    DuplicateEntry { message: String },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("language '{code}' could not be resolved to a persisted record")]
    ResolutionFailure { code: String },

    #[error("storage error: {message}")]
    Storage { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
