use thiserror::Error;

/// Failure modes a backing store may surface. The bundled in-memory store
/// never fails, but substituted implementations map their errors here.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
