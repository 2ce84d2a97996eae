use alloc::string::String;
use thiserror::Error;

/// Errors raised while building a [`ResourceCatalog`](super::ResourceCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// An entry with this resource key already exists.
    #[error("Duplicate resource key '{0}'")]
    DuplicateKey(String),

    /// The resource key does not start with a known type prefix.
    #[error("Cannot derive resource kind from key '{0}'")]
    UnknownResourceKind(String),
}
