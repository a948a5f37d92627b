//! Extraction of the book fields from a free-text model reply.
//!
//! The model is asked for a bare JSON object but may wrap it in prose or
//! code fences. The object is taken to span from the first `{` to the last
//! `}` of the reply.

use cite_types::{BookFields, UNKNOWN_FIELD};
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("no JSON object in model reply")]
    NoJsonObject,

    #[error("malformed JSON in model reply: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("model reply JSON is not an object")]
    NotAnObject,
}

/// Slice from the first `{` through the last `}`, if both exist in that order
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    if end < start {
        return None;
    }

    Some(&text[start..=end])
}

/// Parse the reply into the five book fields
pub fn parse_reply(text: &str) -> Result<BookFields, ReplyError> {
    let json = extract_json_object(text).ok_or(ReplyError::NoJsonObject)?;

    let value: Value = serde_json::from_str(json)?;
    let Value::Object(object) = value else {
        return Err(ReplyError::NotAnObject);
    };

    Ok(BookFields {
        author: field(&object, "author"),
        title: field(&object, "title"),
        publisher: field(&object, "publisher"),
        location: field(&object, "location"),
        year: field(&object, "year"),
    })
}

/// Read a field as text. Missing and null fields become the unknown literal.
fn field(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => UNKNOWN_FIELD.to_string(),
        Some(value) => text_of(value),
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => UNKNOWN_FIELD.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Several authors are sometimes returned as a list
        Value::Array(items) => items.iter().map(text_of).collect::<Vec<_>>().join("、"),
        Value::Object(_) => value.to_string(),
    }
}
