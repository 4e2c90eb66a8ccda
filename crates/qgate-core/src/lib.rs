pub mod error;
pub mod field;
pub mod router;
pub mod rules;
pub mod webhook;

pub mod prelude {
    pub use crate::error::AdmissionError;
    pub use crate::field::{AggregateError, ErrorKind, ErrorList, FieldError, FieldPath};
    pub use crate::router::AdmissionRouter;
    pub use crate::webhook::{AdmissionWebhook, QueueNameWebhook, QueueOracle, Warnings};
}
