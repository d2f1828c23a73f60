use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single form value as the gateway sees it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum ParamValue {
    Int(u64),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

/// Flattened, gateway-ready parameter set.
///
/// A field mapped to `None` is present but null: it still takes part in the
/// signature as an empty segment. A field missing from the map is skipped.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Option<ParamValue>>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, value: Option<ParamValue>) {
        self.0.insert(field.to_string(), value);
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Value of a field, `None` when the field is absent or null.
    pub fn get(&self, field: &str) -> Option<&ParamValue> {
        self.0.get(field).and_then(Option::as_ref)
    }

    /// Text rendering used on the wire: integers in decimal, null as empty.
    pub fn rendered(&self, field: &str) -> Option<String> {
        self.0
            .get(field)
            .map(|value| value.as_ref().map(ToString::to_string).unwrap_or_default())
    }

    pub fn signature(&self) -> Option<&str> {
        match self.get(super::fields::SIGNATURE) {
            Some(ParamValue::Text(signature)) => Some(signature),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ParamValue>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

impl<K: Into<String>> FromIterator<(K, Option<ParamValue>)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, Option<ParamValue>)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
