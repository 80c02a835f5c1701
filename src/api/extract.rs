use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

/// A request type built field by field from a JSON object.
///
/// Each field looks itself up in [`Fields`] and supplies its own fallback,
/// so one bad field never costs the caller the others.
pub trait FromFields {
    fn from_fields(fields: &Fields) -> Self;
}

/// JSON body extractor that never rejects.
///
/// A missing body, invalid JSON, or a JSON value that is not an object all
/// decode as `{}`, so every field falls back to its default.
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: FromFields,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                tracing::debug!(%rejection, "request body unreadable, treating as empty");
                Bytes::new()
            }
        };
        Ok(LenientJson(decode(&bytes)))
    }
}

pub fn decode<T: FromFields>(bytes: &[u8]) -> T {
    T::from_fields(&Fields::parse(bytes))
}

/// The top-level members of a request body.
#[derive(Debug, Default)]
pub struct Fields(Map<String, Value>);

impl Fields {
    pub fn parse(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Fields(map),
            Ok(_) | Err(_) => Fields::default(),
        }
    }

    fn present(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    /// Text value of `key`. Non-string scalars and containers render as JSON text.
    pub fn text(&self, key: &str, default: &str) -> String {
        self.present(key)
            .map(value_text)
            .unwrap_or_else(|| default.to_string())
    }

    /// Truthiness of `key`: zero, empty strings and empty containers are false.
    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.present(key) {
            None => default,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::Null) => default,
        }
    }

    /// Non-negative integer value of `key`, or `default` for anything else.
    pub fn count(&self, key: &str, default: u64) -> u64 {
        self.present(key)
            .and_then(Value::as_u64)
            .unwrap_or(default)
    }

    /// Array members of `key`; anything that is not an array yields none.
    pub fn list(&self, key: &str) -> Vec<Value> {
        match self.present(key) {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        }
    }
}

/// Strings render bare; any other JSON value renders as its JSON text.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
