//! Tolerant decoding of MyMoodAI list responses.
//!
//! Every list endpoint may answer with either a bare JSON array or an
//! object wrapping the array under a resource-named key (`models`,
//! `avatars`, `styles`, `orders`, `images`). [`normalize_list`] collapses
//! both shapes into a plain `Vec<T>` so call sites never branch on the
//! raw body.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::MyMoodAIError;

/// Normalize a list response into `Vec<T>`.
///
/// - A bare array parses as the items themselves.
/// - An object with `key` parses that field as the items.
/// - An object without `key`, or JSON `null`, is an empty listing.
/// - Any other shape is a [`MyMoodAIError::Decode`].
pub fn normalize_list<T: DeserializeOwned>(
    value: Value,
    key: &str,
) -> Result<Vec<T>, MyMoodAIError> {
    match value {
        Value::Array(items) => Ok(serde_json::from_value(Value::Array(items))?),
        Value::Object(mut fields) => match fields.remove(key) {
            Some(inner) => Ok(serde_json::from_value(inner)?),
            // The service omits the key entirely when a listing is empty.
            None => Ok(Vec::new()),
        },
        Value::Null => Ok(Vec::new()),
        other => Err(MyMoodAIError::Decode(serde::de::Error::custom(format!(
            "expected a JSON array or wrapper object, got: {other}"
        )))),
    }
}
