use thiserror::Error;

/// Problems with the invocation parameters. Always raised before the
/// backing file is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("--operation flag has to be specified")]
    MissingOperation,

    #[error("--fileName flag has to be specified")]
    MissingFileName,

    #[error("Operation {0} not allowed!")]
    UnknownOperation(String),

    #[error("--item flag has to be specified")]
    MissingItem,

    #[error("--id flag has to be specified")]
    MissingId,
}

#[derive(Error, Debug)]
pub enum RecstoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecstoreError>;
