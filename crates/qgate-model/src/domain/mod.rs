mod labels;
pub use labels::Labels;

mod constants;
pub use constants::{DEFAULT_QUEUE_NAME, LABEL_QUEUE_NAME};

/// Count of workload replicas the object store reports as running and healthy.
///
/// The update validator freezes the queue binding as soon as this is non-zero.
pub type ReadyReplicas = u32;
