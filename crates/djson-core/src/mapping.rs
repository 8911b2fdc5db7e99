//! Keyed container.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::coerce;
use crate::sequence::Sequence;
use crate::value::{Kind, Value};

/// Handle to a key → value association with unique keys.
///
/// Like [`Sequence`], the storage is shared between handles created with
/// [`Mapping::share`] and deep-copied by [`Clone`]. Enumeration order is not
/// part of the contract; rendering always emits keys in sorted order.
#[derive(Default)]
pub struct Mapping {
    inner: Rc<RefCell<BTreeMap<String, Value>>>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Another handle onto the same storage. Putting it into this
    /// mapping, or into anything nested inside it, is refused.
    pub fn share(&self) -> Mapping {
        Mapping {
            inner: Rc::clone(&self.inner),
        }
    }

    /// True when both handles point at the same storage.
    pub fn ptr_eq(&self, other: &Mapping) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn storage_ptr(&self) -> *const () {
        Rc::as_ptr(&self.inner).cast()
    }

    /// A value may be stored unless it is a non-finite float or leads back
    /// to this mapping.
    fn admits(&self, value: &Value) -> bool {
        coerce::is_storable(value) && !value.reaches(self.storage_ptr())
    }

    pub(crate) fn entries_ref(&self) -> Ref<'_, BTreeMap<String, Value>> {
        self.inner.borrow()
    }

    fn entries_mut(&self) -> RefMut<'_, BTreeMap<String, Value>> {
        self.inner.borrow_mut()
    }

    pub fn len(&self) -> usize {
        self.entries_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries_ref().is_empty()
    }

    /// Insert or overwrite `key`. A NaN or infinite float, or a container
    /// that holds this mapping, is rejected and any existing value under
    /// `key` is kept.
    pub fn put(&self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        let value = value.into();
        if !self.admits(&value) {
            return false;
        }
        self.entries_mut().insert(key.into(), value);
        true
    }

    /// Put every entry of `other` into this mapping. Nested containers of
    /// `other` are shared, not copied. Returns false when any entry was
    /// rejected.
    pub fn merge(&self, other: &Mapping) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        other
            .entries()
            .into_iter()
            .fold(true, |stored, (key, value)| self.put(key, value) && stored)
    }

    /// Value under `key`. Containers come back as live views, scalars as
    /// copies.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries_ref().get(key).map(Value::share)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries_ref().contains_key(key)
    }

    /// Remove `key`, returning its value.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.entries_mut().remove(key)
    }

    /// Remove every listed key; returns how many were present.
    pub fn remove_all<I, K>(&self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut entries = self.entries_mut();
        keys.into_iter()
            .filter(|key| entries.remove(key.as_ref()).is_some())
            .count()
    }

    /// Move the value under `from` to `to`.
    ///
    /// Fails when `from` is absent or equal to `to`. An existing `to` is
    /// overwritten.
    pub fn rename(&self, from: &str, to: &str) -> bool {
        if from == to {
            return false;
        }
        let mut entries = self.entries_mut();
        match entries.remove(from) {
            Some(value) => {
                entries.insert(to.to_owned(), value);
                true
            }
            None => false,
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries_ref().keys().cloned().collect()
    }

    /// Snapshot of the entries. Nested containers are live views.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.entries_ref()
            .iter()
            .map(|(key, value)| (key.clone(), value.share()))
            .collect()
    }

    pub fn clear(&self) {
        self.entries_mut().clear();
    }

    pub fn kind_of(&self, key: &str) -> Option<Kind> {
        self.entries_ref().get(key).map(Value::kind)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.entries_ref().get(key).and_then(coerce::int_strict)
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.entries_ref().get(key).and_then(coerce::float_strict)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.entries_ref().get(key).and_then(coerce::bool_strict)
    }

    /// Canonical text of the value under `key`.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.entries_ref().get(key).map(coerce::to_text)
    }

    /// Live view of a nested object.
    pub fn get_object(&self, key: &str) -> Option<Mapping> {
        self.entries_ref().get(key).and_then(Value::as_object)
    }

    /// Live view of a nested array.
    pub fn get_array(&self, key: &str) -> Option<Sequence> {
        self.entries_ref().get(key).and_then(Value::as_array)
    }
}

impl Clone for Mapping {
    /// Deep copy.
    fn clone(&self) -> Self {
        let entries = self.entries_ref().clone();
        Mapping {
            inner: Rc::new(RefCell::new(entries)),
        }
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.entries_ref() == *other.entries_ref()
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries_ref().iter()).finish()
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = Mapping::new();
        for (key, value) in iter {
            map.put(key, value);
        }
        map
    }
}
