//! Helpers over ordered key/value containers.
//!
//! The home-grown container is [`Arr`], an insertion ordered map from
//! [`Key`] to anything. But every helper here takes an
//! `IntoIterator<Item = (K, V)>`, so a `Vec` of pairs, a `BTreeMap`, an
//! enumerated iterator or a borrowed map all work just as well.
//!
//! ```
//! use fnkit::arr;
//! use fnkit::arr::*;
//! use fnkit::key::Key;
//!
//! let letters: Arr<&str> = arr!["zero", "one", "x" => "ex"];
//! assert_eq!(kvjoin(&letters, &JoinSettings::default()), "0=zero, 1=one, x=ex");
//!
//! let picked: Vec<_> = pick(letters, &[Key::from("x")]);
//! assert_eq!(picked, vec![(Key::from("x"), "ex")]);
//! ```

use crate::error::{Error, Result};
use crate::key::Key;
use indexmap::IndexMap;
use std::fmt::Display;

/// An insertion ordered map, with integer or string keys.
pub type Arr<V> = IndexMap<Key, V>;

/// Append a value under the next free integer key, and return that key.
///
/// The next key is one more than the largest integer key so far, or 0 if
/// there aren't any integer keys yet. String keys don't count. Past
/// `i64::MAX` there is no next key, and `arr` is left as it was.
pub fn push<V>(arr: &mut Arr<V>, value: V) -> Result<Key> {
    let next = match arr.keys().filter_map(Key::as_int).max() {
        Some(max) => max.checked_add(1).ok_or(Error::NextKeyOccupied)?,
        None => 0,
    };
    arr.insert(Key::Int(next), value);
    Ok(Key::Int(next))
}

/// Build an [`Arr`] from a list of values and `key => value` entries.
///
/// Bare values get the next free integer key. Explicit keys overwrite any
/// earlier entry with the same key, in place.
///
/// # Panics
///
/// When a bare value follows the key `i64::MAX`, like `vec!` does when it
/// can't allocate. Use [`push`] directly to handle that case.
#[macro_export]
macro_rules! arr {
    (@fill $arr:ident; ) => {};
    (@fill $arr:ident; $k:expr => $v:expr $(, $($rest:tt)*)?) => {
        $arr.insert($crate::key::Key::from($k), ::std::convert::Into::into($v));
        $crate::arr!(@fill $arr; $($($rest)*)?);
    };
    (@fill $arr:ident; $v:expr $(, $($rest:tt)*)?) => {
        if let Err(e) = $crate::arr::push(&mut $arr, ::std::convert::Into::into($v)) {
            ::std::panic!("{}", e);
        }
        $crate::arr!(@fill $arr; $($($rest)*)?);
    };
    () => {
        $crate::arr::Arr::new()
    };
    ( $($tt:tt)+ ) => {{
        let mut arr = $crate::arr::Arr::new();
        $crate::arr!(@fill arr; $($tt)+);
        arr
    }};
}

/// Keep only the entries whose key is one of `keys`, in container order.
pub fn pick<I, K, V, C>(container: I, keys: &[K]) -> C
where
    I: IntoIterator<Item = (K, V)>,
    K: PartialEq,
    C: FromIterator<(K, V)>,
{
    container
        .into_iter()
        .filter(|(k, _)| keys.contains(k))
        .collect()
}

/// The first value for which `predicate(&value, &key)` holds.
pub fn find_by<I, K, V, P>(container: I, mut predicate: P) -> Option<V>
where
    I: IntoIterator<Item = (K, V)>,
    P: FnMut(&V, &K) -> bool,
{
    container
        .into_iter()
        .find(|(k, v)| predicate(v, k))
        .map(|(_, v)| v)
}

/// Like [`find_by`], but yields the key of the match.
pub fn find_key_by<I, K, V, P>(container: I, mut predicate: P) -> Option<K>
where
    I: IntoIterator<Item = (K, V)>,
    P: FnMut(&V, &K) -> bool,
{
    container
        .into_iter()
        .find(|(k, v)| predicate(v, k))
        .map(|(k, _)| k)
}

/// Where a [`reduce`] starts from.
#[derive(Debug, PartialEq, Clone, Default)]
pub enum Initial<V> {
    /// The first element is the starting carry, and the callback isn't
    /// called for it. Reducing nothing is an error.
    #[default]
    First,

    /// Start from this carry. Reducing nothing yields it.
    Value(V),

    /// Like `First`, except that reducing nothing yields this instead of
    /// failing.
    OnEmpty(V),
}

/// Left fold where the callback also sees each key: `f(carry, value, key)`.
///
/// ```
/// use fnkit::arr::{reduce, Initial};
///
/// let add = |carry: i32, next: i32, _| carry + next;
/// assert_eq!(reduce(vec![2, 3].into_iter().enumerate(), add, Initial::Value(1)), Ok(6));
/// assert_eq!(reduce(vec![2, 3].into_iter().enumerate(), add, Initial::OnEmpty(1)), Ok(5));
/// assert!(reduce(Vec::<i32>::new().into_iter().enumerate(), add, Initial::First).is_err());
/// ```
pub fn reduce<I, K, V, F>(iterable: I, f: F, initial: Initial<V>) -> Result<V>
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(V, V, K) -> V,
{
    let on_empty = match initial {
        Initial::Value(carry) => return Ok(fold(iterable, carry, f)),
        Initial::OnEmpty(v) => Some(v),
        Initial::First => None,
    };
    let mut iter = iterable.into_iter();
    match iter.next() {
        Some((_, first)) => Ok(fold(iter, first, f)),
        None => on_empty.ok_or(Error::EmptyReduce),
    }
}

/// Left fold with a key-aware callback, where the carry can be any type.
pub fn fold<I, K, V, A, F>(iterable: I, init: A, mut f: F) -> A
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(A, V, K) -> A,
{
    iterable
        .into_iter()
        .fold(init, |carry, (k, v)| f(carry, v, k))
}

/// Separators for [`kvjoin`].
#[derive(Debug, PartialEq, Clone)]
pub struct JoinSettings {
    /// Goes between entries.
    pub sep: String,
    /// Goes between the key and the value of an entry.
    pub kv_sep: String,
}

impl JoinSettings {
    pub fn sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    pub fn kv_sep(mut self, kv_sep: impl Into<String>) -> Self {
        self.kv_sep = kv_sep.into();
        self
    }
}

impl Default for JoinSettings {
    fn default() -> Self {
        Self {
            sep: ", ".into(),
            kv_sep: "=".into(),
        }
    }
}

/// Join entries as `key{kv_sep}value`, separated by `sep`.
pub fn kvjoin<I, K, V>(data: I, settings: &JoinSettings) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    kvjoin_with(data, &settings.sep, &settings.kv_sep)
}

/// [`kvjoin`] without building a [`JoinSettings`] first.
pub fn kvjoin_with<I, K, V>(data: I, sep: &str, kv_sep: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let mut out = String::new();
    for (i, (k, v)) in data.into_iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(&format!("{}{}{}", k, kv_sep, v));
    }
    out
}

/// The first entry, if there is one.
pub fn first<I, K, V>(iterable: I) -> Option<(K, V)>
where
    I: IntoIterator<Item = (K, V)>,
{
    iterable.into_iter().next()
}

/// The first entry (in container order) whose key is one of `keys`.
pub fn find<I, K, V>(container: I, keys: &[K]) -> Option<(K, V)>
where
    I: IntoIterator<Item = (K, V)>,
    K: PartialEq,
{
    container.into_iter().find(|(k, _)| keys.contains(k))
}
