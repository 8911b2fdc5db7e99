//! The public document façade.
//!
//! A [`Document`] wraps one root [`Value`] and is the only surface binding
//! layers are expected to use: typed getters with defaults, keyed and
//! indexed mutation, bracket-path operations, sorting and a scan cursor.
//!
//! # Views and copies
//!
//! [`Document::object`], [`Document::array`], [`Document::object_path`] and
//! [`Document::array_path`] return documents that share storage with `self`.
//! Writes through them land in the parent tree. Scalar getters return
//! copies. `clone()` is deep.
//!
//! ```
//! use djson_core::Document;
//!
//! let doc = Document::parse(r#"{"user":{"name":"Ann","tags":["a"]}}"#).unwrap();
//! let mut user = doc.object("user").unwrap();
//! user.put_object("age", 41);
//! assert_eq!(doc.int_path(r#"["user"]["age"]"#), 41);
//!
//! let detached = doc.clone();
//! detached.update_path(r#"["user"]["name"]"#, "Bo").unwrap();
//! assert_eq!(doc.string_path(r#"["user"]["name"]"#), "Ann");
//! ```

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::coerce;
use crate::error::{DocError, Result};
use crate::mapping::Mapping;
use crate::path::{self, Selector};
use crate::sequence::Sequence;
use crate::sort::{self, SortOrder};
use crate::value::{Kind, Value};

/// A dynamically-typed JSON document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: Value,
}

impl Document {
    /// A `null` document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_object() -> Self {
        Self::from_value(Value::new_object())
    }

    pub fn new_array() -> Self {
        Self::from_value(Value::new_array())
    }

    /// An object document built from key/value pairs.
    pub fn object_from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::from_value(pairs.into_iter().collect::<Mapping>())
    }

    /// An array document built from a list of values.
    pub fn array_from<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::from_value(values.into_iter().collect::<Sequence>())
    }

    /// Wrap any raw value. A NaN or infinite float becomes `null`.
    pub fn from_value(value: impl Into<Value>) -> Self {
        let root = value.into();
        if coerce::is_storable(&root) {
            Document { root }
        } else {
            Document::new()
        }
    }

    /// Parse JSON text.
    ///
    /// Text that does not open an object or array is also accepted as a bare
    /// scalar: `null`, `true` and `false` in any case, integers, floats, and
    /// finally anything else as an unquoted string. Surrounding whitespace is
    /// ignored and blank input yields a `null` document.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Document::new());
        }
        if text.starts_with('{') || text.starts_with('[') {
            let json: serde_json::Value = serde_json::from_str(text)?;
            return Ok(Document::from_value(json));
        }
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(text) {
            return Ok(Document::from_value(json));
        }
        Ok(Document::from_value(parse_bare_scalar(text)))
    }

    /// Another document over the same storage. Scalars are copied.
    pub fn share(&self) -> Document {
        Document {
            root: self.root.share(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// Discard the contents and become an empty object.
    pub fn set_to_object(&mut self) -> &mut Self {
        self.root = Value::new_object();
        self
    }

    /// Discard the contents and become an empty array.
    pub fn set_to_array(&mut self) -> &mut Self {
        self.root = Value::new_array();
        self
    }

    // ------------------------------------------------------------------
    // Root mutation
    // ------------------------------------------------------------------

    /// Put a raw value at the root.
    ///
    /// - `null` resets the document to `null`.
    /// - A scalar replaces a `null` root or a root of the same kind. Into an
    ///   array root it is appended; into any other root it is dropped.
    /// - An object becomes the root, or is merged key by key into an object
    ///   root.
    /// - An array becomes the root, or is flatten-appended into an array
    ///   root (see [`Sequence::put`]).
    pub fn put(&mut self, raw: impl Into<Value>) -> &mut Self {
        let value = raw.into();
        if !coerce::is_storable(&value) {
            return self;
        }
        match value {
            Value::Null => self.root = Value::Null,
            Value::Object(incoming) => match &self.root {
                Value::Object(map) => {
                    map.merge(&incoming);
                }
                _ => self.root = Value::Object(incoming),
            },
            Value::Array(incoming) => match &self.root {
                Value::Array(seq) => {
                    seq.put(Value::Array(incoming));
                }
                _ => self.root = Value::Array(incoming),
            },
            scalar => {
                if self.root.is_null() || self.root.kind() == scalar.kind() {
                    self.root = scalar;
                } else if let Value::Array(seq) = &self.root {
                    seq.push_back(scalar);
                }
            }
        }
        self
    }

    /// Set `key` on an object root. A `null` root becomes an object first.
    ///
    /// Returns false when the root is some other kind or the mapping refused
    /// the value (see [`Mapping::put`]).
    pub fn put_object(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        if self.root.is_null() {
            self.root = Value::new_object();
        }
        match &self.root {
            Value::Object(map) => map.put(key, value),
            _ => false,
        }
    }

    /// Append one element to an array root. A `null` root becomes an array
    /// first. An array argument is appended as a single nested element.
    ///
    /// Returns false when the root is some other kind or the sequence refused
    /// the value.
    pub fn put_array(&mut self, value: impl Into<Value>) -> bool {
        if self.root.is_null() {
            self.root = Value::new_array();
        }
        match &self.root {
            Value::Array(seq) => seq.push_back(value),
            _ => false,
        }
    }

    /// Remove a key from an object root or an index from an array root.
    pub fn remove(&self, selector: impl Into<Selector>) -> Option<Value> {
        let selector: Selector = selector.into();
        match (selector, &self.root) {
            (Selector::Key(key), Value::Object(map)) => map.remove(&key),
            (Selector::Index(index), Value::Array(seq)) => {
                usize::try_from(index).ok().and_then(|i| seq.remove(i))
            }
            _ => None,
        }
    }

    /// Overwrite an existing key or index. Missing slots are not created.
    pub fn replace_at(&self, selector: impl Into<Selector>, value: impl Into<Value>) -> bool {
        let selector: Selector = selector.into();
        match (selector, &self.root) {
            (Selector::Key(key), Value::Object(map)) if map.has_key(&key) => map.put(key, value),
            (Selector::Index(index), Value::Array(seq)) => usize::try_from(index)
                .ok()
                .is_some_and(|i| seq.replace_at(i, value)),
            _ => false,
        }
    }

    /// Rename a key of an object root. See [`Mapping::rename`].
    pub fn rename(&self, from: &str, to: &str) -> bool {
        match &self.root {
            Value::Object(map) => map.rename(from, to),
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Keyed access
    // ------------------------------------------------------------------

    fn child(&self, selector: Selector) -> Option<Value> {
        match (selector, &self.root) {
            (Selector::Key(key), Value::Object(map)) => map.get(&key),
            (Selector::Index(index), Value::Array(seq)) => {
                usize::try_from(index).ok().and_then(|i| seq.get(i))
            }
            _ => None,
        }
    }

    /// Child value. Containers are live views.
    pub fn get(&self, selector: impl Into<Selector>) -> Option<Value> {
        self.child(selector.into())
    }

    /// Child object as a document sharing storage with `self`.
    pub fn object(&self, selector: impl Into<Selector>) -> Option<Document> {
        self.child(selector.into())
            .filter(Value::is_object)
            .map(Document::from_value)
    }

    /// Child array as a document sharing storage with `self`.
    pub fn array(&self, selector: impl Into<Selector>) -> Option<Document> {
        self.child(selector.into())
            .filter(Value::is_array)
            .map(Document::from_value)
    }

    pub fn has_key(&self, selector: impl Into<Selector>) -> bool {
        let selector: Selector = selector.into();
        match (selector, &self.root) {
            (Selector::Key(key), Value::Object(map)) => map.has_key(&key),
            (Selector::Index(index), Value::Array(seq)) => {
                usize::try_from(index).is_ok_and(|i| i < seq.len())
            }
            _ => false,
        }
    }

    /// True when every selector is present.
    pub fn has_keys<I, S>(&self, selectors: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<Selector>,
    {
        selectors.into_iter().all(|selector| self.has_key(selector))
    }

    /// Keys of an object root; empty for anything else.
    pub fn keys(&self) -> Vec<String> {
        match &self.root {
            Value::Object(map) => map.keys(),
            _ => Vec::new(),
        }
    }

    /// Keys of a child object; empty when the child is not an object.
    pub fn keys_of(&self, selector: impl Into<Selector>) -> Vec<String> {
        self.object(selector).map(|doc| doc.keys()).unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Typed getters
    // ------------------------------------------------------------------

    pub fn as_int(&self) -> i64 {
        self.root.as_int()
    }

    pub fn as_float(&self) -> f64 {
        self.root.as_float()
    }

    pub fn as_bool(&self) -> bool {
        self.root.as_bool()
    }

    /// Canonical text of the root: compact JSON for containers, unquoted
    /// text for strings.
    pub fn as_string(&self) -> String {
        self.root.as_string()
    }

    /// Child as an integer; 0 when absent or not convertible.
    pub fn int(&self, selector: impl Into<Selector>) -> i64 {
        self.int_or(selector, 0)
    }

    /// Child as an integer, or `default`.
    ///
    /// ```
    /// use djson_core::Document;
    ///
    /// let doc = Document::parse(r#"{"age":"28","nick":"abc"}"#).unwrap();
    /// assert_eq!(doc.int("age"), 28);
    /// assert_eq!(doc.int_or("nick", 10), 10);
    /// assert_eq!(doc.int_or("missing", 10), 10);
    /// ```
    pub fn int_or(&self, selector: impl Into<Selector>, default: i64) -> i64 {
        self.child(selector.into())
            .and_then(|v| v.try_int())
            .unwrap_or(default)
    }

    pub fn float(&self, selector: impl Into<Selector>) -> f64 {
        self.float_or(selector, 0.0)
    }

    pub fn float_or(&self, selector: impl Into<Selector>, default: f64) -> f64 {
        self.child(selector.into())
            .and_then(|v| v.try_float())
            .unwrap_or(default)
    }

    pub fn bool(&self, selector: impl Into<Selector>) -> bool {
        self.bool_or(selector, false)
    }

    pub fn bool_or(&self, selector: impl Into<Selector>, default: bool) -> bool {
        self.child(selector.into())
            .and_then(|v| v.try_bool())
            .unwrap_or(default)
    }

    /// Child as text; empty when absent.
    pub fn string(&self, selector: impl Into<Selector>) -> String {
        self.string_or(selector, "")
    }

    pub fn string_or(&self, selector: impl Into<Selector>, default: &str) -> String {
        self.child(selector.into())
            .map(|v| v.as_string())
            .unwrap_or_else(|| default.to_owned())
    }

    // ------------------------------------------------------------------
    // Type inspection
    // ------------------------------------------------------------------

    pub fn kind(&self) -> Kind {
        self.root.kind()
    }

    pub fn kind_of(&self, selector: impl Into<Selector>) -> Option<Kind> {
        self.child(selector.into()).map(|v| v.kind())
    }

    pub fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }

    pub fn is_bool(&self) -> bool {
        self.kind() == Kind::Bool
    }

    pub fn is_int(&self) -> bool {
        self.kind() == Kind::Int
    }

    pub fn is_float(&self) -> bool {
        self.kind() == Kind::Float
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.kind(), Kind::Int | Kind::Float)
    }

    pub fn is_string(&self) -> bool {
        self.kind() == Kind::String
    }

    pub fn is_object(&self) -> bool {
        self.kind() == Kind::Object
    }

    pub fn is_array(&self) -> bool {
        self.kind() == Kind::Array
    }

    /// Entry or element count for containers, 0 for `null`, 1 for scalars.
    pub fn len(&self) -> usize {
        match &self.root {
            Value::Null => 0,
            Value::Object(map) => map.len(),
            Value::Array(seq) => seq.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ------------------------------------------------------------------
    // Cursor (array roots)
    // ------------------------------------------------------------------

    /// Position the scan cursor. False when the root is not an array.
    pub fn seek(&self, pos: usize) -> bool {
        match &self.root {
            Value::Array(seq) => {
                seq.seek(pos);
                true
            }
            _ => false,
        }
    }

    pub fn has_next(&self) -> bool {
        match &self.root {
            Value::Array(seq) => seq.has_next(),
            _ => false,
        }
    }

    /// Element under the cursor as a document, then advance.
    ///
    /// ```
    /// use djson_core::Document;
    ///
    /// let doc = Document::parse("[1, 2, 3]").unwrap();
    /// let mut total = 0;
    /// doc.seek(0);
    /// while doc.has_next() {
    ///     total += doc.scan().map(|d| d.as_int()).unwrap_or(0);
    /// }
    /// assert_eq!(total, 6);
    /// ```
    pub fn scan(&self) -> Option<Document> {
        match &self.root {
            Value::Array(seq) => seq.scan().map(Document::from_value),
            _ => None,
        }
    }

    pub fn skip(&self) {
        if let Value::Array(seq) = &self.root {
            seq.skip();
        }
    }

    // ------------------------------------------------------------------
    // Array helpers
    // ------------------------------------------------------------------

    /// First object element whose `field`, rendered as text, equals `text`.
    /// A missing field renders as the empty string.
    pub fn find(&self, field: &str, text: &str) -> Option<Document> {
        let Value::Array(seq) = &self.root else {
            return None;
        };
        if field.is_empty() {
            return None;
        }
        seq.to_vec()
            .into_iter()
            .filter(Value::is_object)
            .map(Document::from_value)
            .find(|element| element.string(field) == text)
    }

    /// Append every element of another array document. Nested containers are
    /// shared with `other`. Does nothing unless both are arrays.
    pub fn append(&self, other: &Document) -> &Self {
        if let (Value::Array(seq), Value::Array(source)) = (&self.root, &other.root) {
            for element in source.to_vec() {
                seq.push_back(element);
            }
        }
        self
    }

    /// Text of every element, or of `field` in every element.
    pub fn strings(&self, field: Option<&str>) -> Vec<String> {
        self.elements()
            .map(|element| match field {
                Some(field) => element.string(field),
                None => element.as_string(),
            })
            .collect()
    }

    /// Integer view of every element, or of `field` in every element.
    pub fn ints(&self, field: Option<&str>) -> Vec<i64> {
        self.elements()
            .map(|element| match field {
                Some(field) => element.int(field),
                None => element.as_int(),
            })
            .collect()
    }

    fn elements(&self) -> impl Iterator<Item = Document> {
        let elements = match &self.root {
            Value::Array(seq) => seq.to_vec(),
            _ => Vec::new(),
        };
        elements.into_iter().map(Document::from_value)
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    /// Sort an array root by value, or by `field` of each object element.
    pub fn sort(&self, order: SortOrder, field: Option<&str>) -> Result<()> {
        match &self.root {
            Value::Array(seq) => sort::sort(seq, order, field),
            other => Err(DocError::NotAnArray { kind: other.kind() }),
        }
    }

    pub fn sort_asc(&self, field: Option<&str>) -> Result<()> {
        self.sort(SortOrder::Ascending, field)
    }

    pub fn sort_desc(&self, field: Option<&str>) -> Result<()> {
        self.sort(SortOrder::Descending, field)
    }

    /// Sort the child array under `selector` by value.
    pub fn sort_at(&self, selector: impl Into<Selector>, order: SortOrder) -> Result<()> {
        match self.child(selector.into()) {
            Some(Value::Array(seq)) => sort::sort_primitive(&seq, order),
            Some(other) => Err(DocError::NotAnArray { kind: other.kind() }),
            None => Err(DocError::NotAnArray { kind: Kind::Null }),
        }
    }

    // ------------------------------------------------------------------
    // Path operations
    // ------------------------------------------------------------------

    /// Walk `path` and run one of two callbacks at the final selector.
    /// See [`path::walk`].
    pub fn walk_path<P, R, A, O>(
        &self,
        path: &str,
        payload: P,
        on_array: A,
        on_object: O,
    ) -> Result<R>
    where
        A: FnOnce(&Sequence, usize, P) -> R,
        O: FnOnce(&Mapping, &str, P) -> R,
    {
        path::walk_str(&self.root, path, payload, on_array, on_object)
    }

    /// Read the value at `path`. Containers are live views.
    ///
    /// The walk grows arrays like any other path operation, so reading index
    /// 5 of a 2-element array leaves it with 5 elements and returns `None`.
    pub fn get_path(&self, path: &str) -> Option<Value> {
        self.walk_path(path, (), |seq, i, ()| seq.get(i), |map, key, ()| map.get(key))
            .ok()
            .flatten()
    }

    /// Object at `path` as a document sharing storage with `self`.
    pub fn object_path(&self, path: &str) -> Option<Document> {
        self.get_path(path)
            .filter(Value::is_object)
            .map(Document::from_value)
    }

    /// Array at `path` as a document sharing storage with `self`.
    pub fn array_path(&self, path: &str) -> Option<Document> {
        self.get_path(path)
            .filter(Value::is_array)
            .map(Document::from_value)
    }

    /// Integer at `path`, 0 when absent. Grows arrays the way
    /// [`get_path`](Self::get_path) does.
    pub fn int_path(&self, path: &str) -> i64 {
        self.int_path_or(path, 0)
    }

    pub fn int_path_or(&self, path: &str, default: i64) -> i64 {
        self.get_path(path)
            .and_then(|v| v.try_int())
            .unwrap_or(default)
    }

    pub fn float_path(&self, path: &str) -> f64 {
        self.float_path_or(path, 0.0)
    }

    pub fn float_path_or(&self, path: &str, default: f64) -> f64 {
        self.get_path(path)
            .and_then(|v| v.try_float())
            .unwrap_or(default)
    }

    pub fn bool_path(&self, path: &str) -> bool {
        self.bool_path_or(path, false)
    }

    pub fn bool_path_or(&self, path: &str, default: bool) -> bool {
        self.get_path(path)
            .and_then(|v| v.try_bool())
            .unwrap_or(default)
    }

    /// Text at `path`; empty when the path does not resolve. Every typed
    /// `*_path` reader may grow arrays along the path, as
    /// [`get_path`](Self::get_path) does.
    pub fn string_path(&self, path: &str) -> String {
        self.string_path_or(path, "")
    }

    pub fn string_path_or(&self, path: &str, default: &str) -> String {
        self.get_path(path)
            .map(|v| v.as_string())
            .unwrap_or_else(|| default.to_owned())
    }

    pub fn kind_path(&self, path: &str) -> Option<Kind> {
        self.get_path(path).map(|v| v.kind())
    }

    /// Keys of the object at `path`. `None` when the path is invalid, an
    /// empty list when it resolves to something other than an object.
    pub fn keys_path(&self, path: &str) -> Option<Vec<String>> {
        self.walk_path(
            path,
            (),
            |seq, i, ()| seq.get_object(i).map(|m| m.keys()),
            |map, key, ()| map.get_object(key).map(|m| m.keys()),
        )
        .ok()
        .map(Option::unwrap_or_default)
    }

    /// Replace or insert the value at `path`.
    ///
    /// An existing array slot is replaced; the append slot is filled. An
    /// object key is inserted or overwritten. A value the target refuses
    /// fails with [`DocError::Unstorable`] and leaves the slot as it was.
    pub fn update_path(&self, path: &str, value: impl Into<Value>) -> Result<()> {
        self.walk_path(
            path,
            value.into(),
            |seq, i, value| {
                let kind = value.kind();
                let stored = if i < seq.len() {
                    seq.replace_at(i, value)
                } else {
                    seq.insert(i, value)
                };
                check_stored(stored, kind)
            },
            |map, key, value| {
                let kind = value.kind();
                check_stored(map.put(key, value), kind)
            },
        )?
    }

    /// Write an array built from `values` at `path`: inserted at an array
    /// site, put under the key at an object site.
    pub fn put_array_to_path<I, T>(&self, path: &str, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let array = Sequence::new();
        for value in values {
            let value = value.into();
            let kind = value.kind();
            check_stored(array.push_back(value), kind)?;
        }
        self.walk_path(
            path,
            Value::Array(array),
            |seq, i, array| check_stored(seq.insert(i, array), Kind::Array),
            |map, key, array| check_stored(map.put(key, array), Kind::Array),
        )?
    }

    /// Write the single-entry object `{key: value}` at `path`: inserted at an
    /// array site, put under the key at an object site.
    pub fn put_object_to_path(
        &self,
        path: &str,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<()> {
        let value = value.into();
        let kind = value.kind();
        let object = Mapping::new();
        check_stored(object.put(key, value), kind)?;
        self.walk_path(
            path,
            Value::Object(object),
            |seq, i, object| check_stored(seq.insert(i, object), Kind::Object),
            |map, site_key, object| check_stored(map.put(site_key, object), Kind::Object),
        )?
    }

    /// Append `value` to the array at `path`.
    pub fn push_back_to_path(&self, path: &str, value: impl Into<Value>) -> Result<()> {
        self.walk_path(
            path,
            value.into(),
            |seq, i, value| push_into(seq.get(i), value),
            |map, key, value| push_into(map.get(key), value),
        )?
    }

    /// Remove the element or key at `path`. A missing final key is not an
    /// error.
    pub fn remove_path(&self, path: &str) -> Result<()> {
        self.walk_path(
            path,
            (),
            |seq, i, ()| {
                seq.remove(i);
            },
            |map, key, ()| {
                map.remove(key);
            },
        )
    }

    /// Sort the array at `path` by value, or by `field` of each element.
    pub fn sort_path(&self, path: &str, order: SortOrder, field: Option<&str>) -> Result<()> {
        self.walk_path(
            path,
            (),
            |seq, i, ()| sort_target(seq.get(i), order, field),
            |map, key, ()| sort_target(map.get(key), order, field),
        )?
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Flatten into a plain JSON tree with sorted object keys.
    pub fn to_json(&self) -> serde_json::Value {
        self.root.to_json()
    }

    /// Indented JSON. Scalars render as JSON literals (strings quoted).
    pub fn to_string_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
    }
}

fn push_into(target: Option<Value>, value: Value) -> Result<()> {
    match target {
        Some(Value::Array(seq)) => {
            let kind = value.kind();
            check_stored(seq.push_back(value), kind)
        }
        Some(other) => Err(DocError::NotAnArray { kind: other.kind() }),
        None => Err(DocError::NotAnArray { kind: Kind::Null }),
    }
}

fn check_stored(stored: bool, kind: Kind) -> Result<()> {
    if stored {
        Ok(())
    } else {
        debug!(%kind, "container refused value");
        Err(DocError::Unstorable { kind })
    }
}

fn sort_target(target: Option<Value>, order: SortOrder, field: Option<&str>) -> Result<()> {
    match target {
        Some(Value::Array(seq)) => sort::sort(&seq, order, field),
        Some(other) => Err(DocError::NotAnArray { kind: other.kind() }),
        None => Err(DocError::NotAnArray { kind: Kind::Null }),
    }
}

fn parse_bare_scalar(text: &str) -> Value {
    if text.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    if text.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Some(n) = coerce::parse_int(text) {
        return Value::Int(n);
    }
    if let Some(f) = coerce::parse_float(text) {
        return Value::Float(f);
    }
    debug!(len = text.len(), "treating unparsed input as a bare string");
    Value::String(text.to_owned())
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Document::from_value(value)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.root
    }
}

impl From<Mapping> for Document {
    fn from(map: Mapping) -> Self {
        Document::from_value(map)
    }
}

impl From<Sequence> for Document {
    fn from(seq: Sequence) -> Self {
        Document::from_value(seq)
    }
}

impl From<serde_json::Value> for Document {
    fn from(json: serde_json::Value) -> Self {
        Document::from_value(json)
    }
}

impl std::str::FromStr for Document {
    type Err = DocError;

    fn from_str(text: &str) -> Result<Self> {
        Document::parse(text)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Document::from_value)
    }
}
