//! Identity payload returned by the user endpoint.
//!
//! DESIGN
//! ======
//! Consumed as-is: only presence checks, no validation. Fields are read the
//! way the page has always read them: `authenticated` by truthiness, names
//! and the avatar by presence. A value of an unexpected JSON type never fails
//! the whole payload. Unknown keys, including `user_id`, `login` and `phone`,
//! are kept untyped in `extra` so the stored session object is the full
//! object received.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Server-reported identity for the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Whether the request carried a valid session. Missing or falsy means
    /// `false`.
    #[serde(default, deserialize_with = "truthy")]
    pub authenticated: bool,
    /// Given name. Missing or `null` means empty.
    #[serde(default, deserialize_with = "text")]
    pub first_name: String,
    #[serde(
        default,
        deserialize_with = "present_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
    /// Image URL for `.user-avatar` elements.
    #[serde(
        default,
        deserialize_with = "present_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<String>,
    /// Any other keys the server sent.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl UserInfo {
    /// `first_name` followed by a space and `last_name` when a non-empty last
    /// name is present, otherwise `first_name` alone.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {last}", self.first_name),
            _ => self.first_name.clone(),
        }
    }

    /// Avatar URL, if the server sent one.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }
}

// =============================================================
// Lenient field readers
// =============================================================

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a non-string value the way string interpolation would.
fn into_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Value::deserialize(deserializer).map(|v| is_truthy(&v))
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(into_text)
}

/// `None` for falsy values (`null`, `""`, `0`, `false`), otherwise the text.
fn present_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Value::deserialize(deserializer).map(|v| is_truthy(&v).then(|| into_text(v)))
}
