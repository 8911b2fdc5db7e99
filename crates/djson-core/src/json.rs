//! Bridge between the document model and `serde_json`.
//!
//! Text encoding and decoding belong to `serde_json`; this module only
//! converts between its [`serde_json::Value`] tree and [`Value`]:
//!
//! - **build** ([`Value::from_json`]): every leaf passes through the same
//!   normalization as any other insertion. Numbers that fit in `i64` become
//!   `Int`, everything else becomes `Float`.
//! - **flatten** ([`Value::to_json`]): object keys are emitted in sorted
//!   order, so rendering the result is deterministic.
//!
//! The `Serialize` and `Deserialize` impls go through the same two paths.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map, Number, Value as Json};

use crate::mapping::Mapping;
use crate::sequence::Sequence;
use crate::value::Value;

impl Value {
    /// Build a value tree from a decoded JSON tree.
    pub fn from_json(json: Json) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => number_to_value(&n),
            Json::String(s) => Value::String(s),
            Json::Array(items) => {
                let seq = Sequence::with_capacity(items.len());
                for item in items {
                    seq.push_back(Value::from_json(item));
                }
                Value::Array(seq)
            }
            Json::Object(entries) => {
                let map = Mapping::new();
                for (key, item) in entries {
                    map.put(key, Value::from_json(item));
                }
                Value::Object(map)
            }
        }
    }

    /// Flatten into a plain JSON tree with sorted object keys.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Int(n) => Json::Number(Number::from(*n)),
            Value::Float(f) => Number::from_f64(*f).map_or(Json::Null, Json::Number),
            Value::String(s) => Json::String(s.clone()),
            Value::Object(map) => map.to_json(),
            Value::Array(seq) => seq.to_json(),
        }
    }
}

impl Mapping {
    /// Flatten into a JSON object with sorted keys.
    pub fn to_json(&self) -> Json {
        let entries = self.entries_ref();
        let mut out = Map::with_capacity(entries.len());
        for (key, value) in entries.iter() {
            out.insert(key.clone(), value.to_json());
        }
        Json::Object(out)
    }
}

impl Sequence {
    /// Flatten into a JSON array.
    pub fn to_json(&self) -> Json {
        Json::Array(self.data().elements.iter().map(Value::to_json).collect())
    }
}

fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::Int(i);
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => Value::Float(f),
        _ => Value::Null,
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        Value::from_json(json)
    }
}

impl From<&Value> for Json {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        value.to_json()
    }
}

// ============================================================================
// serde
// ============================================================================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            Value::Float(_) => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Object(map) => map.serialize(serializer),
            Value::Array(seq) => seq.serialize(serializer),
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries_ref();
        let mut out = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries.iter() {
            out.serialize_entry(key, value)?;
        }
        out.end()
    }
}

impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = self.data();
        let mut out = serializer.serialize_seq(Some(data.elements.len()))?;
        for element in &data.elements {
            out.serialize_element(element)?;
        }
        out.end()
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Json::deserialize(deserializer).map(Value::from_json)
    }
}
