//! Bracket-notation paths and the traversal engine behind every path
//! operation.
//!
//! # Grammar
//!
//! A path is a run of bracketed selectors: `[0]["name"]['skills'][1]`.
//!
//! - Text outside brackets is ignored.
//! - Inside a bracket, a `"` or `'` opens a quoted run that lasts until the
//!   same quote character recurs; brackets inside a quoted run are literal.
//!   Quoting is only needed for keys containing structural characters.
//! - A backslash directly before `[`, `]`, `"` or `'` makes that character
//!   literal. Any other backslash is kept as-is.
//! - A selector whose text is a base-10 integer (optional sign) is an index,
//!   quoted or not. Everything else is a key. `[]` selects nothing and is
//!   skipped; `[""]` selects the empty key.
//!
//! # Traversal
//!
//! [`walk`] descends through every selector but the last, then hands the
//! final container and selector to one of two callbacks. Index selectors
//! grow arrays on the way down: an intermediate index grows the array to
//! `index + 1` elements with `Int(0)` placeholders, the final index grows it
//! to `index` elements so that the callback sees the append slot. Growth is
//! not undone when the walk later fails.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{DocError, Result};
use crate::mapping::Mapping;
use crate::sequence::Sequence;
use crate::value::Value;

/// One step of a path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Key(String),
    /// Negative indices never match an element.
    Index(i64),
}

impl Selector {
    /// Classify raw selector text.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(index) => Selector::Index(index),
            Err(_) => Selector::Key(raw.to_owned()),
        }
    }

    pub fn as_key(&self) -> Option<&str> {
        match self {
            Selector::Key(key) => Some(key),
            Selector::Index(_) => None,
        }
    }

    /// The index as a position, if it is a non-negative index.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Selector::Key(_) => None,
            Selector::Index(index) => usize::try_from(*index).ok(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Index(index) => write!(f, "[{index}]"),
            Selector::Key(key) => {
                f.write_str("[\"")?;
                for c in key.chars() {
                    if is_structural(c) {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("\"]")
            }
        }
    }
}

impl From<&str> for Selector {
    fn from(key: &str) -> Self {
        Selector::Key(key.to_owned())
    }
}

impl From<String> for Selector {
    fn from(key: String) -> Self {
        Selector::Key(key)
    }
}

impl From<&String> for Selector {
    fn from(key: &String) -> Self {
        Selector::Key(key.clone())
    }
}

impl From<i32> for Selector {
    fn from(index: i32) -> Self {
        Selector::Index(i64::from(index))
    }
}

impl From<i64> for Selector {
    fn from(index: i64) -> Self {
        Selector::Index(index)
    }
}

impl From<u32> for Selector {
    fn from(index: u32) -> Self {
        Selector::Index(i64::from(index))
    }
}

impl From<usize> for Selector {
    fn from(index: usize) -> Self {
        Selector::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

/// A tokenized path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Selector>);

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `text`.
    ///
    /// Fails when the text yields no selector or ends inside a bracket or a
    /// quoted run.
    ///
    /// ```
    /// use djson_core::{Path, Selector};
    ///
    /// let path = Path::parse(r#"[0]["name"]['skills'][1]"#).unwrap();
    /// assert_eq!(
    ///     path.selectors(),
    ///     &[
    ///         Selector::Index(0),
    ///         Selector::Key("name".into()),
    ///         Selector::Key("skills".into()),
    ///         Selector::Index(1),
    ///     ]
    /// );
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let selectors = tokenize(text).ok_or_else(|| DocError::invalid_path(text))?;
        if selectors.is_empty() {
            return Err(DocError::invalid_path(text));
        }
        Ok(Path(selectors))
    }

    /// Builder: append a key selector.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.0.push(Selector::Key(key.into()));
        self
    }

    /// Builder: append an index selector.
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(Selector::from(index));
        self
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for selector in &self.0 {
            write!(f, "{selector}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Path {
    type Err = DocError;

    fn from_str(text: &str) -> Result<Self> {
        Path::parse(text)
    }
}

impl From<Vec<Selector>> for Path {
    fn from(selectors: Vec<Selector>) -> Self {
        Path(selectors)
    }
}

// ============================================================================
// Tokenizer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    InBracket,
    InQuote(char),
}

fn is_structural(c: char) -> bool {
    matches!(c, '[' | ']' | '"' | '\'')
}

/// Split path text into selectors. `None` when the text ends inside a
/// bracket or a quoted run.
fn tokenize(text: &str) -> Option<Vec<Selector>> {
    let mut selectors = Vec::new();
    let mut state = State::Outside;
    let mut token = String::new();
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        // An escaped structural character is literal in every state.
        let escaped = c == '\\' && chars.peek().copied().is_some_and(is_structural);
        let c = if escaped {
            chars.next().unwrap_or(c)
        } else {
            c
        };

        match state {
            State::Outside => {
                if c == '[' && !escaped {
                    token.clear();
                    quoted = false;
                    state = State::InBracket;
                }
            }
            State::InBracket => match c {
                ']' if !escaped => {
                    if !token.is_empty() || quoted {
                        selectors.push(Selector::parse(&token));
                    }
                    token.clear();
                    state = State::Outside;
                }
                '"' | '\'' if !escaped => {
                    quoted = true;
                    state = State::InQuote(c);
                }
                _ => token.push(c),
            },
            State::InQuote(quote) => {
                if c == quote && !escaped {
                    state = State::InBracket;
                } else {
                    token.push(c);
                }
            }
        }
    }

    (state == State::Outside).then_some(selectors)
}

// ============================================================================
// Traversal
// ============================================================================

/// Walk `root` along `path` and run a callback at the final selector.
///
/// `on_array(sequence, index, payload)` runs when the last selector is an
/// index into an array; `on_object(mapping, key, payload)` when it is a key
/// into an object. The payload is moved into whichever callback runs. The
/// callback decides what happens at the site: read, replace, insert, remove.
///
/// The walk fails with [`DocError::InvalidPath`] when a selector does not
/// match the node it is applied to, when an intermediate key is missing, or
/// when an intermediate child is a scalar. The final key need not exist.
pub fn walk<P, R, A, O>(
    root: &Value,
    path: &Path,
    payload: P,
    on_array: A,
    on_object: O,
) -> Result<R>
where
    A: FnOnce(&Sequence, usize, P) -> R,
    O: FnOnce(&Mapping, &str, P) -> R,
{
    let reject = |reason: &str| {
        debug!(path = %path, reason, "path walk rejected");
        DocError::invalid_path(path.to_string())
    };

    let (last, intermediate) = path
        .selectors()
        .split_last()
        .ok_or_else(|| reject("empty path"))?;

    let mut node = root.share();
    for selector in intermediate {
        let child = match (selector, &node) {
            (Selector::Key(key), Value::Object(map)) => {
                map.get(key).ok_or_else(|| reject("missing key"))?
            }
            (Selector::Index(index), Value::Array(seq)) => {
                let index = usize::try_from(*index).map_err(|_| reject("negative index"))?;
                grow(seq, index.saturating_add(1));
                seq.get(index).ok_or_else(|| reject("index out of range"))?
            }
            _ => return Err(reject("selector does not match node")),
        };
        if !child.is_container() {
            return Err(reject("intermediate node is a scalar"));
        }
        node = child;
    }

    match (last, &node) {
        (Selector::Key(key), Value::Object(map)) => Ok(on_object(map, key, payload)),
        (Selector::Index(index), Value::Array(seq)) => {
            let index = usize::try_from(*index).map_err(|_| reject("negative index"))?;
            grow(seq, index);
            Ok(on_array(seq, index, payload))
        }
        _ => Err(reject("selector does not match node")),
    }
}

/// Parse `text` and [`walk`] it.
pub fn walk_str<P, R, A, O>(
    root: &Value,
    text: &str,
    payload: P,
    on_array: A,
    on_object: O,
) -> Result<R>
where
    A: FnOnce(&Sequence, usize, P) -> R,
    O: FnOnce(&Mapping, &str, P) -> R,
{
    let path = Path::parse(text).inspect_err(|_| debug!(path = text, "path failed to tokenize"))?;
    walk(root, &path, payload, on_array, on_object)
}

fn grow(seq: &Sequence, len: usize) {
    let before = seq.len();
    if before < len {
        trace!(from = before, to = len, "auto-growing array");
        seq.grow_to(len);
    }
}
