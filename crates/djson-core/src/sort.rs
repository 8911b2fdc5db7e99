//! In-place sorting of homogeneous sequences.
//!
//! Two modes:
//!
//! - **Primitive**: every element must have the same scalar kind.
//! - **By field**: every element must be an object holding the field, and the
//!   field must have the same scalar kind in every element.
//!
//! Homogeneity is checked before anything moves, so a rejected sort leaves
//! the sequence exactly as it was. Strings order by Unicode code point with
//! the shorter string first on a common prefix; ints and floats order
//! numerically. Bools group `false` before `true` when ascending and `true`
//! before `false` when descending. The sort is stable.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{DocError, Result};
use crate::sequence::Sequence;
use crate::value::{Kind, Value};

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Scalar extracted from an element (or its field) before sorting.
#[derive(Debug)]
enum SortKey {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SortKey {
    fn extract(value: &Value) -> Option<SortKey> {
        match value {
            Value::Null => Some(SortKey::Null),
            Value::Bool(b) => Some(SortKey::Bool(*b)),
            Value::Int(_) => Some(SortKey::Int(value.as_int())),
            Value::Float(_) => Some(SortKey::Float(value.as_float())),
            Value::String(s) => Some(SortKey::Text(s.clone())),
            Value::Object(_) | Value::Array(_) => None,
        }
    }

    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.chars().cmp(b.chars()),
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.total_cmp(b),
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            // Mixed kinds never reach the comparator.
            _ => Ordering::Equal,
        }
    }
}

/// Sort `seq` by element value, or by `field` of each element when given.
pub fn sort(seq: &Sequence, order: SortOrder, field: Option<&str>) -> Result<()> {
    match field {
        Some(field) => sort_by_field(seq, order, field),
        None => sort_primitive(seq, order),
    }
}

/// Sort a sequence of scalars of one kind.
pub fn sort_primitive(seq: &Sequence, order: SortOrder) -> Result<()> {
    let keys = {
        let data = seq.data();
        let mut kind = None;
        let mut keys = Vec::with_capacity(data.elements.len());
        for element in &data.elements {
            check_kind(&mut kind, element.kind())?;
            let key = SortKey::extract(element)
                .ok_or_else(|| unsortable(format!("{} elements have no order", element.kind())))?;
            keys.push(key);
        }
        keys
    };
    apply_order(seq, keys, order)
}

/// Sort a sequence of objects by the value each holds under `field`.
pub fn sort_by_field(seq: &Sequence, order: SortOrder, field: &str) -> Result<()> {
    let keys = {
        let data = seq.data();
        let mut kind = None;
        let mut keys = Vec::with_capacity(data.elements.len());
        for (position, element) in data.elements.iter().enumerate() {
            let Value::Object(map) = element else {
                return Err(unsortable(format!(
                    "element {position} is {}, not an object",
                    element.kind()
                )));
            };
            let entries = map.entries_ref();
            let value = entries
                .get(field)
                .ok_or_else(|| unsortable(format!("element {position} has no field {field:?}")))?;
            check_kind(&mut kind, value.kind())?;
            let key = SortKey::extract(value).ok_or_else(|| {
                unsortable(format!("field {field:?} holds {} values", value.kind()))
            })?;
            keys.push(key);
        }
        keys
    };
    apply_order(seq, keys, order)
}

fn check_kind(expected: &mut Option<Kind>, found: Kind) -> Result<()> {
    match *expected {
        None => {
            *expected = Some(found);
            Ok(())
        }
        Some(kind) if kind == found => Ok(()),
        Some(kind) => Err(unsortable(format!("mixed {kind} and {found} values"))),
    }
}

/// Reorder the elements of `seq` by their precomputed keys.
fn apply_order(seq: &Sequence, keys: Vec<SortKey>, order: SortOrder) -> Result<()> {
    if keys.is_empty() {
        return Err(unsortable("sequence is empty".to_owned()));
    }

    let mut ranked: Vec<(usize, SortKey)> = keys.into_iter().enumerate().collect();
    ranked.sort_by(|(_, a), (_, b)| order.apply(a.compare(b)));

    let mut data = seq.data_mut();
    let mut slots: Vec<Option<Value>> = data.elements.drain(..).map(Some).collect();
    data.elements = ranked
        .into_iter()
        .filter_map(|(position, _)| slots[position].take())
        .collect();
    Ok(())
}

fn unsortable(reason: String) -> DocError {
    debug!(%reason, "sort rejected");
    DocError::Unsortable(reason)
}
