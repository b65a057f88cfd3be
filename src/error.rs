use serde::Serialize;
use thiserror::Error;

/// Errors produced while resolving a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub enum Error {
    /// The path template references a placeholder that has no entry in the
    /// route's parameters. Raised from URL resolution only; bucket
    /// derivation never inspects placeholders.
    #[error("missing parameter '{name}' for path '{path}'")]
    MissingParameter { name: String, path: String },
}

pub type Result<T> = std::result::Result<T, Error>;
