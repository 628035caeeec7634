//! Core notification types for beacon.
//!
//! This crate contains the pure notification data model with no IO, no async,
//! and minimal dependencies. Everything here can be used from any layer.
//!
//! A [`Notification`] announces one lifecycle moment of an adapted call to a
//! dispatch hub: the call started, it succeeded with extracted data, or it
//! failed. In memory the three shapes are kept distinct as an [`Outcome`]
//! tagged union; serialization flattens them to the flexible-key records the
//! hub consumes:
//!
//! | Outcome   | Wire record                          |
//! |-----------|--------------------------------------|
//! | `Start`   | `{"type": <name>}`                   |
//! | `Success` | `{"type": <name>, <key>: <value>}`   |
//! | `Error`   | `{"type": <name>, "errorMsg": <msg>}`|

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Message carried by error notifications built with [`Notification::error`].
///
/// The adapter never forwards the underlying failure reason into the record;
/// every call failure is announced with this fixed text.
pub const DEFAULT_ERROR_MESSAGE: &str = "error message here";

/// The phase of an adapted call, controlling which record shape is produced.
///
/// This is a closed set - the three branches here are the only shapes a
/// notification can take.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The call has been issued. Produces a bare `{type}` record.
    Start,
    /// The call settled successfully. `value` lands on the wire under the
    /// caller-chosen `key`.
    Success {
        /// Field name the extracted value is stored under.
        key: String,
        /// Extracted response value; `Value::Null` when the payload path was
        /// absent from the response.
        value: Value,
    },
    /// The call failed. `message` lands on the wire as `errorMsg`.
    Error {
        /// Human-readable failure text; [`DEFAULT_ERROR_MESSAGE`] unless the
        /// caller chose otherwise.
        message: String,
    },
}

/// A single lifecycle notification, ready to hand to a dispatch hub.
///
/// Immutable once built. Construction is pure and total - identical inputs
/// always produce identical records.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    name: String,
    outcome: Outcome,
}

impl Notification {
    /// Build a notification from a type name and an outcome.
    #[must_use]
    pub fn new(name: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            name: name.into(),
            outcome,
        }
    }

    /// Build the start-phase record `{type: name}`.
    #[must_use]
    pub fn start(name: impl Into<String>) -> Self {
        Self::new(name, Outcome::Start)
    }

    /// Build the success record `{type: name, <key>: <value>}`.
    #[must_use]
    pub fn success(name: impl Into<String>, key: impl Into<String>, value: Value) -> Self {
        Self::new(
            name,
            Outcome::Success {
                key: key.into(),
                value,
            },
        )
    }

    /// Build the error record with the fixed default message.
    #[must_use]
    pub fn error(name: impl Into<String>) -> Self {
        Self::new(
            name,
            Outcome::Error {
                message: DEFAULT_ERROR_MESSAGE.to_owned(),
            },
        )
    }

    /// The `type` field of the wire record.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Flatten to the wire record as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut record = Map::new();
        record.insert("type".to_owned(), Value::String(self.name.clone()));
        match &self.outcome {
            Outcome::Start => {}
            Outcome::Success { key, value } => {
                record.insert(key.clone(), value.clone());
            }
            Outcome::Error { message } => {
                record.insert("errorMsg".to_owned(), Value::String(message.clone()));
            }
        }
        Value::Object(record)
    }
}

impl Serialize for Notification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = match &self.outcome {
            Outcome::Start => 1,
            Outcome::Success { .. } | Outcome::Error { .. } => 2,
        };
        let mut map = serializer.serialize_map(Some(fields))?;
        map.serialize_entry("type", &self.name)?;
        match &self.outcome {
            Outcome::Start => {}
            Outcome::Success { key, value } => map.serialize_entry(key, value)?,
            Outcome::Error { message } => map.serialize_entry("errorMsg", message)?,
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ERROR_MESSAGE, Notification, Outcome};
    use serde_json::json;

    #[test]
    fn start_record_has_only_type() {
        let record = Notification::start("user fetch starts").to_value();
        assert_eq!(record, json!({"type": "user fetch starts"}));
    }

    #[test]
    fn success_record_stores_value_under_caller_key() {
        let record =
            Notification::success("user fetch succeeded", "users", json!([{"id": 1}])).to_value();
        assert_eq!(
            record,
            json!({"type": "user fetch succeeded", "users": [{"id": 1}]})
        );
    }

    #[test]
    fn success_record_accepts_null_value() {
        let record = Notification::success("done", "data", json!(null)).to_value();
        assert_eq!(record, json!({"type": "done", "data": null}));
    }

    #[test]
    fn error_record_carries_fixed_message() {
        let record = Notification::error("user fetch failed").to_value();
        assert_eq!(
            record,
            json!({"type": "user fetch failed", "errorMsg": "error message here"})
        );
        assert_eq!(DEFAULT_ERROR_MESSAGE, "error message here");
    }

    #[test]
    fn custom_error_message_lands_on_the_wire() {
        let record = Notification::new(
            "failed",
            Outcome::Error {
                message: "connection refused".to_owned(),
            },
        )
        .to_value();
        assert_eq!(
            record,
            json!({"type": "failed", "errorMsg": "connection refused"})
        );
    }

    #[test]
    fn builder_is_deterministic() {
        let a = Notification::success("ok", "data", json!({"n": 7}));
        let b = Notification::success("ok", "data", json!({"n": 7}));
        assert_eq!(a, b);
        assert_eq!(a.to_value(), b.to_value());
    }

    #[test]
    fn serialize_matches_to_value() {
        let notifications = [
            Notification::start("s"),
            Notification::success("ok", "myData", json!("payload")),
            Notification::error("err"),
        ];
        for notification in notifications {
            let serialized = serde_json::to_value(&notification).unwrap();
            assert_eq!(serialized, notification.to_value());
        }
    }

    #[test]
    fn accessors_expose_name_and_outcome() {
        let notification = Notification::start("begin");
        assert_eq!(notification.name(), "begin");
        assert_eq!(*notification.outcome(), Outcome::Start);
    }
}
