use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrError {
    #[error("Array length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Range table is empty")]
    EmptyTable,

    #[error("Unrecognized species: {0}")]
    UnknownSpecies(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CrResult<T> = Result<T, CrError>;
