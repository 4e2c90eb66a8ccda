//! Field-scoped validation errors.
//!
//! Validators collect violations into an [`ErrorList`] and run every
//! applicable check before reporting, so the caller sees all problems in one
//! round-trip. [`aggregate`] turns the list into a single combined error, or
//! `Ok(())` when nothing was collected.

use std::fmt;

use thiserror::Error;

/// Dotted path to the field a validation error refers to.
///
/// Built incrementally: `FieldPath::new("metadata").child("labels").key(k)`
/// renders as `metadata.labels[k]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    /// Append a child field segment.
    pub fn child(mut self, name: &str) -> Self {
        self.0.push('.');
        self.0.push_str(name);
        self
    }

    /// Append a map-key segment.
    pub fn key(mut self, key: &str) -> Self {
        self.0.push('[');
        self.0.push_str(key);
        self.0.push(']');
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classification of a single violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The value fails the queue-name naming policy.
    BadFormat,
    /// An illegal change to a frozen field.
    Immutable,
}

/// One violation, scoped to the field it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {detail} (got {value:?})")]
pub struct FieldError {
    pub path: FieldPath,
    pub kind: ErrorKind,
    /// The offending value as submitted.
    pub value: String,
    pub detail: String,
}

impl FieldError {
    /// A format violation on `path`.
    pub fn bad_format(path: FieldPath, value: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            path,
            kind: ErrorKind::BadFormat,
            value: value.into(),
            detail: detail.into(),
        }
    }

    /// An immutable-field violation on `path`.
    pub fn immutable(path: FieldPath, value: impl Into<String>) -> Self {
        Self {
            path,
            kind: ErrorKind::Immutable,
            value: value.into(),
            detail: "field is immutable".to_string(),
        }
    }
}

/// Ordered list of violations collected by a validator.
pub type ErrorList = Vec<FieldError>;

/// Combined admission error exposing every collected violation at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.0))]
pub struct AggregateError(pub ErrorList);

impl AggregateError {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

fn render(errors: &ErrorList) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Turn an error list into a single result: empty list means no error.
pub fn aggregate(errors: ErrorList) -> Result<(), AggregateError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AggregateError(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, FieldError, FieldPath, aggregate};

    #[test]
    fn path_builder_renders_dotted_segments_and_keys() {
        let path = FieldPath::new("metadata").child("labels").key("queue");
        assert_eq!(path.as_str(), "metadata.labels[queue]");
    }

    #[test]
    fn aggregate_of_empty_list_is_ok() {
        assert!(aggregate(Vec::new()).is_ok());
    }

    #[test]
    fn aggregate_preserves_order_and_reports_all_violations() {
        let format = FieldError::bad_format(
            FieldPath::new("metadata").child("labels").key("queue"),
            "Bad Name!",
            "must be a lowercase RFC 1123 subdomain",
        );
        let frozen = FieldError::immutable(
            FieldPath::new("metadata").child("labels").key("queue"),
            "team-b",
        );

        let err = aggregate(vec![format.clone(), frozen.clone()]).unwrap_err();

        assert_eq!(err.errors(), &[format, frozen]);

        let msg = err.to_string();
        let format_at = msg.find("RFC 1123").expect("format violation in message");
        let frozen_at = msg.find("immutable").expect("immutable violation in message");
        assert!(format_at < frozen_at, "violations must keep list order: {msg}");
    }

    #[test]
    fn field_error_message_names_the_field() {
        let err = FieldError::immutable(
            FieldPath::new("metadata").child("labels").key("queue"),
            "team-a",
        );

        assert_eq!(err.kind, ErrorKind::Immutable);
        assert_eq!(
            err.to_string(),
            r#"metadata.labels[queue]: field is immutable (got "team-a")"#
        );
    }
}
