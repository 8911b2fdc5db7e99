//! Ordered container with a forward scan cursor.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::coerce;
use crate::mapping::Mapping;
use crate::value::{Kind, Value};

#[derive(Default)]
pub(crate) struct SequenceData {
    pub(crate) elements: Vec<Value>,
    cursor: usize,
}

/// Handle to an ordered, index-addressed list of values.
///
/// Every method takes `&self`: the storage lives behind an `Rc<RefCell<_>>`
/// and a handle obtained through [`Sequence::share`] (or through any accessor
/// returning a nested array) mutates the same elements. [`Clone`] produces
/// independent storage.
///
/// The scan cursor belongs to the storage, not to the handle, so every
/// handle sees the same position. Interleaving scans from several readers is
/// the caller's problem to serialize.
///
/// Values rejected at insertion leave the sequence unchanged and the
/// inserting method reports `false`. Rejected are NaN or infinite floats and
/// containers that hold this sequence, directly or further down.
#[derive(Default)]
pub struct Sequence {
    inner: Rc<RefCell<SequenceData>>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SequenceData {
                elements: Vec::with_capacity(capacity),
                cursor: 0,
            })),
        }
    }

    /// Another handle onto the same storage. Putting it into this
    /// sequence, or into anything nested inside it, is refused.
    pub fn share(&self) -> Sequence {
        Sequence {
            inner: Rc::clone(&self.inner),
        }
    }

    /// True when both handles point at the same storage.
    pub fn ptr_eq(&self, other: &Sequence) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn storage_ptr(&self) -> *const () {
        Rc::as_ptr(&self.inner).cast()
    }

    fn admits(&self, value: &Value) -> bool {
        coerce::is_storable(value) && !value.reaches(self.storage_ptr())
    }

    pub(crate) fn data(&self) -> Ref<'_, SequenceData> {
        self.inner.borrow()
    }

    pub(crate) fn data_mut(&self) -> RefMut<'_, SequenceData> {
        self.inner.borrow_mut()
    }

    pub fn len(&self) -> usize {
        self.data().elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert at `index`, clamping to `[0, len]`.
    pub fn insert(&self, index: usize, value: impl Into<Value>) -> bool {
        let value = value.into();
        if !self.admits(&value) {
            return false;
        }
        let mut data = self.data_mut();
        let index = index.min(data.elements.len());
        data.elements.insert(index, value);
        true
    }

    /// Replace the element at `index`. Out-of-range indices are ignored.
    pub fn replace_at(&self, index: usize, value: impl Into<Value>) -> bool {
        let value = value.into();
        if !self.admits(&value) {
            return false;
        }
        let mut data = self.data_mut();
        match data.elements.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Remove and return the element at `index`, if any.
    pub fn remove(&self, index: usize) -> Option<Value> {
        let mut data = self.data_mut();
        if index < data.elements.len() {
            Some(data.elements.remove(index))
        } else {
            None
        }
    }

    pub fn push_back(&self, value: impl Into<Value>) -> bool {
        self.insert(usize::MAX, value)
    }

    pub fn push_front(&self, value: impl Into<Value>) -> bool {
        self.insert(0, value)
    }

    /// Alias of [`push_back`](Self::push_back).
    pub fn append(&self, value: impl Into<Value>) -> bool {
        self.push_back(value)
    }

    /// Alias of [`push_front`](Self::push_front).
    pub fn prepend(&self, value: impl Into<Value>) -> bool {
        self.push_front(value)
    }

    /// Flatten-append.
    ///
    /// A non-array value is appended as one element. An array is expanded:
    /// each of its elements is appended in order, and elements that are
    /// themselves arrays stay nested rather than being flattened further.
    ///
    /// ```
    /// use djson_core::{Sequence, Value};
    ///
    /// let seq = Sequence::new();
    /// seq.put(1).put(vec![2, 3]).put(Value::from(vec![vec![4, 5]]));
    /// assert_eq!(seq.to_string(), "[1,2,3,[4,5]]");
    /// ```
    pub fn put(&self, value: impl Into<Value>) -> &Self {
        match value.into() {
            Value::Array(source) => {
                // Snapshot first: `source` may be this very storage.
                for element in source.to_vec() {
                    self.push_back(element);
                }
            }
            other => {
                self.push_back(other);
            }
        }
        self
    }

    /// Grow with `Int(0)` placeholders until the sequence holds `len`
    /// elements. Never shrinks.
    pub(crate) fn grow_to(&self, len: usize) {
        let mut data = self.data_mut();
        if data.elements.len() < len {
            data.elements.resize(len, Value::Int(0));
        }
    }

    /// Element at `index`. Containers come back as live views, scalars as
    /// copies.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.data().elements.get(index).map(Value::share)
    }

    pub fn kind_at(&self, index: usize) -> Option<Kind> {
        self.data().elements.get(index).map(Value::kind)
    }

    pub fn get_int(&self, index: usize) -> Option<i64> {
        self.data().elements.get(index).and_then(coerce::int_strict)
    }

    pub fn get_float(&self, index: usize) -> Option<f64> {
        self.data().elements.get(index).and_then(coerce::float_strict)
    }

    pub fn get_bool(&self, index: usize) -> Option<bool> {
        self.data().elements.get(index).and_then(coerce::bool_strict)
    }

    /// Canonical text of the element at `index`.
    pub fn get_string(&self, index: usize) -> Option<String> {
        self.data().elements.get(index).map(coerce::to_text)
    }

    /// Live view of a nested object.
    pub fn get_object(&self, index: usize) -> Option<Mapping> {
        self.data().elements.get(index).and_then(Value::as_object)
    }

    /// Live view of a nested array.
    pub fn get_array(&self, index: usize) -> Option<Sequence> {
        self.data().elements.get(index).and_then(Value::as_array)
    }

    /// Snapshot of the elements. Nested containers are live views.
    pub fn to_vec(&self) -> Vec<Value> {
        self.data().elements.iter().map(Value::share).collect()
    }

    /// Remove every element and reset the cursor.
    pub fn clear(&self) {
        let mut data = self.data_mut();
        data.elements.clear();
        data.cursor = 0;
    }

    // ------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------

    /// Move the cursor to `pos`, or to 0 when `pos` is not a valid index.
    pub fn seek(&self, pos: usize) {
        let mut data = self.data_mut();
        data.cursor = if pos < data.elements.len() { pos } else { 0 };
    }

    /// Reset the cursor to the first element.
    pub fn rewind(&self) {
        self.seek(0);
    }

    pub fn cursor(&self) -> usize {
        self.data().cursor
    }

    pub fn has_next(&self) -> bool {
        let data = self.data();
        data.cursor < data.elements.len()
    }

    /// Element under the cursor, then advance. The cursor advances even when
    /// the scan is exhausted.
    pub fn scan(&self) -> Option<Value> {
        let mut data = self.data_mut();
        let found = data.elements.get(data.cursor).map(Value::share);
        data.cursor = data.cursor.saturating_add(1);
        found
    }

    /// Advance the cursor without reading.
    pub fn skip(&self) {
        let mut data = self.data_mut();
        data.cursor = data.cursor.saturating_add(1);
    }
}

impl Clone for Sequence {
    /// Deep copy. The clone's cursor starts at 0.
    fn clone(&self) -> Self {
        let elements = self.data().elements.clone();
        Sequence {
            inner: Rc::new(RefCell::new(SequenceData {
                elements,
                cursor: 0,
            })),
        }
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.data().elements == other.data().elements
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data().elements.iter()).finish()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl<T: Into<Value>> FromIterator<T> for Sequence {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let seq = Sequence::new();
        for item in iter {
            seq.push_back(item);
        }
        seq
    }
}
