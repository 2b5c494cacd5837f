use thiserror::Error;

/// Login failure. Deliberately a single variant: an unknown identifier and a
/// wrong secret must look the same to every caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Credenciales inválidas. Por favor, inténtalo de nuevo.")]
    InvalidCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write key {key}")]
    Write { key: String },
    #[error("failed to serialize session: {0}")]
    Serialize(String),
}
