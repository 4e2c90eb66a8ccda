use serde::{Deserialize, Serialize};

use crate::workload::Workload;

/// Identity-only reference to a stored object.
///
/// Delete events carry this instead of a full [`Workload`]: deletion is always
/// admitted, so there is nothing to inspect beyond the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRef {
    pub kind: String,
    pub name: String,
}

impl ObjectRef {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

/// One object lifecycle event intercepted before persistence.
///
/// Updates carry both snapshots; the store guarantees they form a consistent
/// old/new pair. The admission layer holds no state across events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "operation")]
pub enum AdmissionEvent {
    Create(Workload),
    Update { old: Workload, new: Workload },
    Delete(ObjectRef),
}

impl AdmissionEvent {
    /// Object kind, used for webhook routing.
    pub fn kind(&self) -> &str {
        match self {
            AdmissionEvent::Create(wl) => &wl.kind,
            AdmissionEvent::Update { new, .. } => &new.kind,
            AdmissionEvent::Delete(obj) => &obj.kind,
        }
    }

    /// Object name, for logging only.
    pub fn name(&self) -> &str {
        match self {
            AdmissionEvent::Create(wl) => &wl.name,
            AdmissionEvent::Update { new, .. } => &new.name,
            AdmissionEvent::Delete(obj) => &obj.name,
        }
    }
}
