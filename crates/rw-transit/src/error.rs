use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransitError {
    #[error("transit data parse error: {0}")]
    Parse(String),

    #[error("unknown stop id {0:?}")]
    UnknownStop(String),

    #[error("route catalog contains no routes")]
    EmptyCatalog,

    #[error("route contains no stops")]
    EmptyRoute,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TransitResult<T> = Result<T, TransitError>;
