//! Shared validation rules applied by the admission webhooks.

use std::fmt;

use qgate_model::{LABEL_QUEUE_NAME, Workload};

use crate::field::{ErrorList, FieldError, FieldPath};

/// Longest accepted queue name.
const MAX_QUEUE_NAME_LEN: usize = 253;
/// Longest accepted dot-separated segment of a queue name.
const MAX_SEGMENT_LEN: usize = 63;

const SUBDOMAIN_DETAIL: &str = "must be a lowercase RFC 1123 subdomain: lowercase alphanumeric \
     characters, '-' or '.', starting and ending with an alphanumeric character";

/// Path of the queue-name label on a workload object.
pub fn queue_name_path() -> FieldPath {
    FieldPath::new("metadata").child("labels").key(LABEL_QUEUE_NAME)
}

/// Validate the queue-name label against the naming policy.
///
/// An unqueued workload (absent or empty label) is valid: creation without a
/// binding is legal, the object simply stays out of any queue.
pub fn validate_queue_name(workload: &Workload) -> ErrorList {
    let Some(queue) = workload.queue_name() else {
        return ErrorList::new();
    };

    match subdomain_violation(queue) {
        Some(detail) => vec![FieldError::bad_format(queue_name_path(), queue, detail)],
        None => ErrorList::new(),
    }
}

/// Generic immutable-field check: one violation iff `old != new`.
pub fn validate_immutable<T>(old: &T, new: &T, path: FieldPath) -> ErrorList
where
    T: PartialEq + fmt::Display + ?Sized,
{
    if old == new {
        ErrorList::new()
    } else {
        vec![FieldError::immutable(path, new.to_string())]
    }
}

/// RFC 1123 subdomain check. Returns the violation detail, or `None` if the
/// value conforms.
fn subdomain_violation(value: &str) -> Option<String> {
    if value.len() > MAX_QUEUE_NAME_LEN {
        return Some(format!(
            "must be no more than {MAX_QUEUE_NAME_LEN} characters"
        ));
    }

    for segment in value.split('.') {
        if segment.len() > MAX_SEGMENT_LEN {
            return Some(format!(
                "each dot-separated segment must be no more than {MAX_SEGMENT_LEN} characters"
            ));
        }

        let alnum = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
        let inner_ok = segment.bytes().all(|b| alnum(b) || b == b'-');
        let edges_ok = segment.bytes().next().is_some_and(alnum)
            && segment.bytes().last().is_some_and(alnum);

        if !inner_ok || !edges_ok {
            return Some(SUBDOMAIN_DETAIL.to_string());
        }
    }

    None
}
