use serde::{Deserialize, Serialize};

use crate::domain::{LABEL_QUEUE_NAME, Labels, ReadyReplicas};

/// Admission-time view of a workload object.
///
/// This is the narrowed form the admission layer works on: it carries only the
/// fields the queue-name policy reads or mutates. The object store owns the
/// full object; the webhook mutates the label maps of this in-flight copy and
/// nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workload {
    /// Object kind, used by the admission router to pick a webhook.
    pub kind: String,
    /// Object name. Identity only; never part of the policy decision.
    pub name: String,
    /// Metadata labels. The queue binding lives here under
    /// [`LABEL_QUEUE_NAME`].
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
    /// Pod-template labels, the secondary label location propagated to child
    /// objects. Absent until the workload carries a queue binding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_labels: Option<Labels>,
    /// Replicas reported ready. Non-zero freezes the queue binding.
    #[serde(default)]
    pub ready_replicas: ReadyReplicas,
}

impl Workload {
    /// Create a workload view with empty labels and zero ready replicas.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            labels: Labels::new(),
            template_labels: None,
            ready_replicas: 0,
        }
    }

    /// Return the queue binding, if any.
    ///
    /// An empty label value counts as unassigned, matching the convention of
    /// the object store where a missing label reads as "".
    pub fn queue_name(&self) -> Option<&str> {
        self.labels.get(LABEL_QUEUE_NAME).filter(|v| !v.is_empty())
    }

    /// Access the pod-template labels, creating the map if absent.
    pub fn template_labels_mut(&mut self) -> &mut Labels {
        self.template_labels.get_or_insert_with(Labels::new)
    }
}

#[cfg(test)]
mod tests {
    use super::Workload;
    use crate::domain::LABEL_QUEUE_NAME;

    #[test]
    fn queue_name_reads_well_known_label() {
        let mut wl = Workload::new("deployment", "web");
        assert_eq!(wl.queue_name(), None);

        wl.labels.insert(LABEL_QUEUE_NAME, "team-a");
        assert_eq!(wl.queue_name(), Some("team-a"));
    }

    #[test]
    fn empty_label_value_counts_as_unassigned() {
        let mut wl = Workload::new("deployment", "web");
        wl.labels.insert(LABEL_QUEUE_NAME, "");

        assert_eq!(wl.queue_name(), None);
    }

    #[test]
    fn template_labels_mut_creates_map_on_demand() {
        let mut wl = Workload::new("deployment", "web");
        assert!(wl.template_labels.is_none());

        wl.template_labels_mut().insert(LABEL_QUEUE_NAME, "team-a");

        let tpl = wl.template_labels.as_ref().unwrap();
        assert_eq!(tpl.get(LABEL_QUEUE_NAME), Some("team-a"));
    }

    #[test]
    fn serde_defaults_absent_fields() {
        let json = r#"{"kind":"deployment","name":"web"}"#;
        let wl: Workload = serde_json::from_str(json).unwrap();

        assert!(wl.labels.is_empty());
        assert!(wl.template_labels.is_none());
        assert_eq!(wl.ready_replicas, 0);
    }

    #[test]
    fn serde_roundtrip_preserves_labels() {
        let mut wl = Workload::new("deployment", "web");
        wl.labels.insert(LABEL_QUEUE_NAME, "team-a");
        wl.ready_replicas = 2;

        let json = serde_json::to_string(&wl).unwrap();
        assert!(json.contains("readyReplicas"), "fields must be camelCase");

        let back: Workload = serde_json::from_str(&json).unwrap();
        assert_eq!(back.queue_name(), Some("team-a"));
        assert_eq!(back.ready_replicas, 2);
    }
}
