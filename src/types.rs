/// Shared serializable types for script output.
///
/// These types are what gets written to stdout — either as JSON or rendered
/// as a table or CSV. Concrete scripts build [`Record`]s; the driver and the
/// formatters never look past them.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of script output: an insertion-ordered mapping from field name to
/// scalar value.
///
/// Field order is significant — the first record's order drives the column
/// order of table and CSV rendering. Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion, preserving insertion order.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a field.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The principal resolved by the identity call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerIdentity {
    /// AWS account id.
    pub account: String,
    /// Full principal ARN.
    pub arn: String,
    /// Unique id of the calling entity.
    pub user_id: String,
}

/// Fixed-shape run summary printed after the report phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of records the script produced.
    pub total: usize,
    /// Whether the run was advisory-only.
    pub dry_run: bool,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a [`crate::script::ScriptError`].
    #[must_use]
    pub fn from_script_error(err: &crate::script::ScriptError) -> Self {
        use crate::script::ScriptError;
        let code = match err {
            ScriptError::Auth(_) => "auth_failed",
            ScriptError::Api(_) => "aws_api_error",
            ScriptError::Transport(_) => "aws_transport_error",
            ScriptError::Cancelled => "cancelled",
            ScriptError::Unexpected(_) => "unexpected",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_insertion_order() {
        let record = Record::new()
            .with("zebra", 1)
            .with("apple", 2)
            .with("mango", 3);
        let keys: Vec<&String> = record.keys().collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_record_json_round_trip_keeps_keys() {
        let record = Record::new()
            .with("name", "alice")
            .with("count", 42)
            .with("active", true);
        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        let keys: Vec<&String> = back.keys().collect();
        assert_eq!(keys, ["name", "count", "active"]);
    }

    #[test]
    fn test_error_output_codes() {
        use crate::script::ScriptError;
        let out = ErrorOutput::from_script_error(&ScriptError::Cancelled);
        assert!(!out.ok);
        assert_eq!(out.error.code, "cancelled");
        let out = ErrorOutput::from_script_error(&ScriptError::Auth("denied".to_owned()));
        assert_eq!(out.error.code, "auth_failed");
        assert!(out.error.message.contains("denied"));
    }
}
