//! Admission router that dispatches lifecycle events to the webhook
//! registered for the object's kind.
//!
//! The router owns only routing: per event it runs the mutating phase
//! (`default`) and then the matching validating phase, in that order.

use std::sync::Arc;

use qgate_model::AdmissionEvent;
use tracing::{debug, instrument, trace};

use crate::error::AdmissionError;
use crate::webhook::{AdmissionWebhook, Warnings};

/// Single webhook registration.
struct WebhookEntry {
    kind: String,
    webhook: Arc<dyn AdmissionWebhook>,
}

/// Kind-keyed registry of admission webhooks.
///
/// Entries are checked in registration order; the first entry whose kind
/// matches the event handles it.
#[derive(Default)]
pub struct AdmissionRouter {
    entries: Vec<WebhookEntry>,
}

impl AdmissionRouter {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a webhook for a workload kind.
    pub fn register(&mut self, kind: impl Into<String>, webhook: Arc<dyn AdmissionWebhook>) {
        self.entries.push(WebhookEntry {
            kind: kind.into(),
            webhook,
        });
    }

    /// Find the webhook registered for `kind`.
    pub fn pick(&self, kind: &str) -> Option<&Arc<dyn AdmissionWebhook>> {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| &entry.webhook)
    }

    /// Run one admission event through its webhook.
    ///
    /// Create and Update mutate the incoming snapshot during defaulting, which
    /// is why the event is taken by mutable reference; the caller persists the
    /// (possibly defaulted) object only on `Ok`.
    #[instrument(level = "debug", skip(self, event), fields(kind = event.kind(), name = event.name()))]
    pub fn dispatch(&self, event: &mut AdmissionEvent) -> Result<Warnings, AdmissionError> {
        trace!("admission event received");

        let webhook = self
            .pick(event.kind())
            .ok_or_else(|| AdmissionError::UnknownKind(event.kind().to_string()))?;

        let warnings = match event {
            AdmissionEvent::Create(workload) => {
                webhook.default(workload);
                webhook.validate_create(workload)?
            }
            AdmissionEvent::Update { old, new } => {
                webhook.default(new);
                webhook.validate_update(old, new)?
            }
            AdmissionEvent::Delete(obj) => webhook.validate_delete(obj)?,
        };

        debug!("object admitted");
        Ok(warnings)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::AdmissionRouter;
    use crate::error::AdmissionError;
    use crate::webhook::{QueueNameWebhook, QueueOracle};
    use qgate_model::{
        AdmissionEvent, DEFAULT_QUEUE_NAME, LABEL_QUEUE_NAME, ObjectRef, Workload,
    };

    struct StaticOracle(bool);

    impl QueueOracle for StaticOracle {
        fn default_local_queue_exists(&self) -> bool {
            self.0
        }
    }

    fn mk_router(default_queue_exists: bool) -> AdmissionRouter {
        let mut router = AdmissionRouter::new();
        router.register(
            "deployment",
            Arc::new(QueueNameWebhook::new(Arc::new(StaticOracle(
                default_queue_exists,
            )))),
        );
        router
    }

    #[test]
    fn dispatch_rejects_unknown_kinds() {
        let router = mk_router(false);
        let mut event = AdmissionEvent::Create(Workload::new("cronjob", "nightly"));

        let res = router.dispatch(&mut event);

        match res {
            Err(AdmissionError::UnknownKind(kind)) => assert_eq!(kind, "cronjob"),
            other => panic!("expected UnknownKind, got {other:?}"),
        }
    }

    #[test]
    fn dispatch_defaults_before_validating_create() {
        let router = mk_router(true);
        let mut event = AdmissionEvent::Create(Workload::new("deployment", "web"));

        let warnings = router.dispatch(&mut event).expect("create admitted");
        assert!(warnings.is_empty());

        let AdmissionEvent::Create(wl) = event else {
            unreachable!()
        };
        assert_eq!(wl.queue_name(), Some(DEFAULT_QUEUE_NAME));
    }

    #[test]
    fn dispatch_denies_frozen_rebinding() {
        let router = mk_router(false);

        let mut old = Workload::new("deployment", "web");
        old.labels.insert(LABEL_QUEUE_NAME, "team-a");
        old.ready_replicas = 2;

        let mut new = old.clone();
        new.labels.insert(LABEL_QUEUE_NAME, "team-b");

        let mut event = AdmissionEvent::Update { old, new };
        let res = router.dispatch(&mut event);

        assert!(
            matches!(res, Err(AdmissionError::Denied(_))),
            "expected denial, got {res:?}"
        );
    }

    #[test]
    fn dispatch_denies_clearing_the_binding() {
        let router = mk_router(false);

        let mut old = Workload::new("deployment", "web");
        old.labels.insert(LABEL_QUEUE_NAME, "team-a");

        let mut new = old.clone();
        new.labels.remove(LABEL_QUEUE_NAME);

        let mut event = AdmissionEvent::Update { old, new };
        let res = router.dispatch(&mut event);

        assert!(matches!(res, Err(AdmissionError::Denied(_))));
    }

    #[test]
    fn dispatch_admits_deletes_unconditionally() {
        let router = mk_router(false);
        let mut event = AdmissionEvent::Delete(ObjectRef::new("deployment", "web"));

        let warnings = router.dispatch(&mut event).expect("delete admitted");
        assert!(warnings.is_empty());
    }
}
