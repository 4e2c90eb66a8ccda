use thiserror::Error;

use crate::field::AggregateError;

#[derive(Debug, Error)]
pub enum AdmissionError {
    #[error("no webhook registered for kind: {0}")]
    UnknownKind(String),

    #[error("admission denied: {0}")]
    Denied(#[from] AggregateError),
}
