//! Queue-name admission webhook.
//!
//! One policy type per workload kind implements [`AdmissionWebhook`]; the
//! [`AdmissionRouter`](crate::router::AdmissionRouter) owns routing by object
//! kind. Every call is synchronous and stateless: correctness depends only on
//! the object(s) passed in.

use std::sync::Arc;

use qgate_model::{DEFAULT_QUEUE_NAME, LABEL_QUEUE_NAME, ObjectRef, Workload};
use tracing::{debug, instrument};

use crate::field::{AggregateError, ErrorList, aggregate};
use crate::rules::{queue_name_path, validate_immutable, validate_queue_name};

/// Non-fatal messages returned alongside an admission decision.
pub type Warnings = Vec<String>;

/// Read-only view of the queue store, supplied by the caller.
///
/// The webhook treats the lookup as O(1) and side-effect free; request
/// lifetime is owned by the dispatcher above.
pub trait QueueOracle: Send + Sync {
    /// Whether the cluster advertises a default local queue.
    fn default_local_queue_exists(&self) -> bool;
}

/// Admission capability set for one workload kind.
///
/// `default` runs in the mutating phase and never fails; the `validate_*`
/// methods run in the validating phase and either admit (with warnings) or
/// deny with every collected violation at once.
pub trait AdmissionWebhook: Send + Sync {
    fn default(&self, workload: &mut Workload);

    fn validate_create(&self, workload: &Workload) -> Result<Warnings, AggregateError>;

    fn validate_update(&self, old: &Workload, new: &Workload)
    -> Result<Warnings, AggregateError>;

    fn validate_delete(&self, obj: &ObjectRef) -> Result<Warnings, AggregateError>;
}

/// The queue-name policy: assign a binding once, freeze it while the workload
/// is active.
pub struct QueueNameWebhook {
    oracle: Arc<dyn QueueOracle>,
}

impl QueueNameWebhook {
    pub fn new(oracle: Arc<dyn QueueOracle>) -> Self {
        Self { oracle }
    }
}

impl AdmissionWebhook for QueueNameWebhook {
    /// Fill in the default queue binding and mirror it into the pod-template
    /// labels.
    ///
    /// Workloads that end up without a binding are left untouched: their
    /// propagation is delegated to the per-child-object admission path.
    #[instrument(level = "debug", skip_all, fields(name = %workload.name))]
    fn default(&self, workload: &mut Workload) {
        if workload.queue_name().is_none() && self.oracle.default_local_queue_exists() {
            workload.labels.insert(LABEL_QUEUE_NAME, DEFAULT_QUEUE_NAME);
            debug!(queue = DEFAULT_QUEUE_NAME, "assigned default local queue");
        }

        if let Some(queue) = workload.queue_name().map(str::to_owned) {
            workload
                .template_labels_mut()
                .insert(LABEL_QUEUE_NAME, queue);
        }
    }

    #[instrument(level = "debug", skip_all, fields(name = %workload.name))]
    fn validate_create(&self, workload: &Workload) -> Result<Warnings, AggregateError> {
        debug!("validating create");

        aggregate(validate_queue_name(workload))?;
        Ok(Warnings::new())
    }

    /// The queue binding is frozen once any replica is ready, and clearing it
    /// is never allowed once assigned. While the workload is fully unready a
    /// non-empty binding may still be corrected.
    #[instrument(level = "debug", skip_all, fields(name = %new.name))]
    fn validate_update(
        &self,
        old: &Workload,
        new: &Workload,
    ) -> Result<Warnings, AggregateError> {
        debug!(ready = old.ready_replicas, "validating update");

        let old_queue = old.queue_name().unwrap_or_default();
        let new_queue = new.queue_name().unwrap_or_default();

        let mut errs: ErrorList = validate_queue_name(new);
        if old.ready_replicas > 0 || new_queue.is_empty() {
            errs.extend(validate_immutable(old_queue, new_queue, queue_name_path()));
        }

        aggregate(errs)?;
        Ok(Warnings::new())
    }

    fn validate_delete(&self, _obj: &ObjectRef) -> Result<Warnings, AggregateError> {
        Ok(Warnings::new())
    }
}
