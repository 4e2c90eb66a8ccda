//! Well-known label keys and values used across the admission layer.
//!
//! Keeping them here avoids scattering magic strings throughout the codebase.

/// Label key carrying the queue binding of a workload.
///
/// Absence of the key (or an empty value) means the workload is unqueued.
/// The same key is mirrored into the workload's pod template labels so that
/// child objects inherit the binding.
pub const LABEL_QUEUE_NAME: &str = "qgate.io/queue-name";

/// Queue name assigned by the defaulter when a workload arrives without a
/// binding and the cluster advertises a default local queue.
pub const DEFAULT_QUEUE_NAME: &str = "default";
