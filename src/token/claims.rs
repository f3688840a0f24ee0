//! Token payload: an ordered map of JSON values plus the reserved `exp` claim.
//! Used by: token::sign, token::verify, auth, handlers::whoami.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved claim holding the expiry as integer Unix seconds.
pub const EXP: &str = "exp";

/// Claims carried in a token payload.
///
/// Backed by `serde_json::Map`, which keeps keys sorted, so serialization is
/// canonical regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Expiry, if present and an integer.
    pub fn exp(&self) -> Option<i64> {
        self.0.get(EXP).and_then(Value::as_i64)
    }

    pub(crate) fn set_exp(&mut self, exp: i64) {
        self.0.insert(EXP.to_owned(), Value::from(exp));
    }

    /// Claims without the reserved expiry, for handing to application code.
    pub fn without_exp(mut self) -> Self {
        self.0.remove(EXP);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Compact, whitespace-free JSON. Infallible for an in-memory map.
    pub(crate) fn to_canonical_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Claims> for Value {
    fn from(claims: Claims) -> Self {
        Value::Object(claims.0)
    }
}
