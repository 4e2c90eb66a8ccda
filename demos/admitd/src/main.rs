use std::sync::Arc;

use tracing::{info, warn};

use qgate_core::prelude::{AdmissionRouter, QueueNameWebhook, QueueOracle};
use qgate_model::{AdmissionEvent, LABEL_QUEUE_NAME, ObjectRef, Workload};
use qgate_observe::{LogConfig, LogLevel, init_logger};

/// Demo oracle: pretends the cluster always has a default local queue.
struct AlwaysExists;

impl QueueOracle for AlwaysExists {
    fn default_local_queue_exists(&self) -> bool {
        true
    }
}

fn main() -> anyhow::Result<()> {
    // 1) logger
    let cfg = LogConfig {
        level: LogLevel::new("debug")?,
        ..Default::default()
    };
    init_logger(&cfg)?;
    info!("logger initialized");

    // 2) router + webhook
    let mut router = AdmissionRouter::new();
    router.register("deployment", Arc::new(QueueNameWebhook::new(Arc::new(AlwaysExists))));
    info!("registered queue-name webhook for deployments");

    // 3) create without a binding: the defaulter fills it in
    let mut create = AdmissionEvent::Create(Workload::new("deployment", "web"));
    run(&router, &mut create);
    if let AdmissionEvent::Create(wl) = &create {
        info!(queue = ?wl.queue_name(), "labels after defaulting");
    }

    // 4) legal rebinding while fully unready
    let mut old = Workload::new("deployment", "batch");
    old.labels.insert(LABEL_QUEUE_NAME, "team-a");
    let mut new = old.clone();
    new.labels.insert(LABEL_QUEUE_NAME, "team-b");
    run(&router, &mut AdmissionEvent::Update { old: old.clone(), new });

    // 5) rebinding once replicas are ready: denied
    old.ready_replicas = 2;
    let mut new = old.clone();
    new.labels.insert(LABEL_QUEUE_NAME, "team-c");
    run(&router, &mut AdmissionEvent::Update { old, new });

    // 6) deletion is always admitted
    run(
        &router,
        &mut AdmissionEvent::Delete(ObjectRef::new("deployment", "web")),
    );

    Ok(())
}

fn run(router: &AdmissionRouter, event: &mut AdmissionEvent) {
    let kind = event.kind().to_string();
    let name = event.name().to_string();

    match router.dispatch(event) {
        Ok(warnings) if warnings.is_empty() => info!(%kind, %name, "admitted"),
        Ok(warnings) => info!(%kind, %name, ?warnings, "admitted with warnings"),
        Err(err) => warn!(%kind, %name, %err, "rejected"),
    }
}
