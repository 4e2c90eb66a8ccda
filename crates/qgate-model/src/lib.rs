mod domain;
pub use domain::{DEFAULT_QUEUE_NAME, LABEL_QUEUE_NAME, Labels, ReadyReplicas};

mod workload;
pub use workload::Workload;

mod event;
pub use event::{AdmissionEvent, ObjectRef};
