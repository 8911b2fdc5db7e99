//! The universal node type of a document tree.
//!
//! A [`Value`] holds exactly one of seven variants. Scalars are stored by
//! value; the two containers, [`Mapping`] and [`Sequence`], are handles to
//! reference-counted storage so that a nested container can be handed out as
//! a live view of its parent.
//!
//! # Copy semantics
//!
//! - [`Value::share`] copies scalars but re-uses container storage. This is
//!   what every accessor returns for a nested container.
//! - [`Clone`] is a deep copy: the result shares no storage with the source.
//! - [`PartialEq`] is deep structural equality. `Int(1)` and `Float(1.0)` are
//!   different values.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::coerce;
use crate::mapping::Mapping;
use crate::sequence::Sequence;

/// The dynamic type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Object,
    Array,
}

impl Kind {
    /// Lower-case type name: `"null"`, `"bool"`, `"int"`, `"float"`,
    /// `"string"`, `"object"` or `"array"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Object => "object",
            Kind::Array => "array",
        }
    }

    /// True for the two container kinds.
    pub fn is_container(self) -> bool {
        matches!(self, Kind::Object | Kind::Array)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single node in the document tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    /// Never NaN or infinite once stored in a container or document.
    Float(f64),
    String(String),
    /// Keyed container. Cloning the `Value` deep-copies it.
    Object(Mapping),
    /// Ordered container. Cloning the `Value` deep-copies it.
    Array(Sequence),
}

impl Value {
    /// An empty object.
    pub fn new_object() -> Self {
        Value::Object(Mapping::new())
    }

    /// An empty array.
    pub fn new_array() -> Self {
        Value::Array(Sequence::new())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Object(_) => Kind::Object,
            Value::Array(_) => Kind::Array,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Copy of this value that re-uses container storage.
    ///
    /// Mutating a container reached through the returned value mutates the
    /// original tree. A container refuses a shared value that leads back to
    /// its own storage, so a tree can never contain itself.
    pub fn share(&self) -> Value {
        match self {
            Value::Object(map) => Value::Object(map.share()),
            Value::Array(seq) => Value::Array(seq.share()),
            scalar => scalar.clone(),
        }
    }

    /// True when `target` is the storage of this container or of any
    /// container nested inside it.
    pub(crate) fn reaches(&self, target: *const ()) -> bool {
        match self {
            Value::Object(map) => {
                map.storage_ptr() == target
                    || map.entries_ref().values().any(|v| v.reaches(target))
            }
            Value::Array(seq) => {
                seq.storage_ptr() == target
                    || seq.data().elements.iter().any(|v| v.reaches(target))
            }
            _ => false,
        }
    }

    /// Live handle to the object storage, if this is an object.
    pub fn as_object(&self) -> Option<Mapping> {
        match self {
            Value::Object(map) => Some(map.share()),
            _ => None,
        }
    }

    /// Live handle to the array storage, if this is an array.
    pub fn as_array(&self) -> Option<Sequence> {
        match self {
            Value::Array(seq) => Some(seq.share()),
            _ => None,
        }
    }

    /// Borrow the text of a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Lenient integer view. See [`coerce::to_int`].
    pub fn as_int(&self) -> i64 {
        coerce::to_int(self)
    }

    /// Lenient float view. See [`coerce::to_float`].
    pub fn as_float(&self) -> f64 {
        coerce::to_float(self)
    }

    /// Lenient boolean view. See [`coerce::to_bool`].
    pub fn as_bool(&self) -> bool {
        coerce::to_bool(self)
    }

    /// Canonical text form. See [`coerce::to_text`].
    pub fn as_string(&self) -> String {
        coerce::to_text(self)
    }

    /// Strict integer view, `None` when the value does not coerce.
    pub fn try_int(&self) -> Option<i64> {
        coerce::int_strict(self)
    }

    /// Strict float view, `None` when the value does not coerce.
    pub fn try_float(&self) -> Option<f64> {
        coerce::float_strict(self)
    }

    /// Strict boolean view, `None` when the value does not coerce.
    pub fn try_bool(&self) -> Option<bool> {
        coerce::bool_strict(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

// ============================================================================
// Normalization of raw Rust values
// ============================================================================

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(i64::from(v))
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, u8, u16, u32);

// Widths that may not fit in i64 fall back to a float, the same way a
// decoded JSON number too large for i64 does.
macro_rules! from_wide {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                match i64::try_from(v) {
                    Ok(n) => Value::Int(n),
                    Err(_) => Value::Float(v as f64),
                }
            }
        })*
    };
}

from_wide!(isize, u64, usize, i128, u128);

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::String(v.to_string())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Object(map)
    }
}

impl From<Sequence> for Value {
    fn from(seq: Sequence) -> Self {
        Value::Array(seq)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Array(items.iter().cloned().collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Array(items.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Value::Object(entries.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> From<HashMap<K, V>> for Value {
    fn from(entries: HashMap<K, V>) -> Self {
        Value::Object(entries.into_iter().collect())
    }
}
