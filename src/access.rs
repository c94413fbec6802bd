use crate::arr::Arr;
use crate::error::{Error, Result};
use crate::key::Key;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Take one element out of a container. Backs `Pipe::get`.
pub trait Lookup<K> {
    type Output;

    fn lookup(self, key: K) -> Result<Self::Output>;
}

/// Put one element into a container.
pub trait Assign<K, V> {
    fn assign(&mut self, key: K, value: V) -> Result<()>;
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn index(key: &Key, len: usize) -> Option<usize> {
    key.as_int()
        .and_then(|i| usize::try_from(i).ok())
        .filter(|i| *i < len)
}

/// Integer keys index arrays. Objects are looked up by the key's text, so
/// `1` finds the field `"1"`.
impl<K: Into<Key>> Lookup<K> for Value {
    type Output = Value;

    fn lookup(self, key: K) -> Result<Value> {
        let key = key.into();
        match self {
            Value::Array(mut a) => match index(&key, a.len()) {
                Some(i) => Ok(a.swap_remove(i)),
                None => Err(Error::MissingKey(key)),
            },
            Value::Object(mut o) => o
                .remove(&key.to_string())
                .ok_or(Error::MissingKey(key)),
            other => Err(Error::NotAContainer(kind(&other))),
        }
    }
}

/// An array takes an existing index, or the one just past its end.
impl<K: Into<Key>, V: Into<Value>> Assign<K, V> for Value {
    fn assign(&mut self, key: K, value: V) -> Result<()> {
        let key = key.into();
        match self {
            Value::Array(a) => match index(&key, a.len() + 1) {
                Some(i) if i == a.len() => a.push(value.into()),
                Some(i) => a[i] = value.into(),
                None => return Err(Error::MissingKey(key)),
            },
            Value::Object(o) => {
                o.insert(key.to_string(), value.into());
            }
            other => return Err(Error::NotAContainer(kind(other))),
        }
        Ok(())
    }
}

impl<V> Lookup<usize> for Vec<V> {
    type Output = V;

    fn lookup(mut self, key: usize) -> Result<V> {
        match key < self.len() {
            true => Ok(self.swap_remove(key)),
            false => Err(Error::MissingKey(key.into())),
        }
    }
}

impl<V> Assign<usize, V> for Vec<V> {
    fn assign(&mut self, key: usize, value: V) -> Result<()> {
        match key.cmp(&self.len()) {
            std::cmp::Ordering::Less => self[key] = value,
            std::cmp::Ordering::Equal => self.push(value),
            std::cmp::Ordering::Greater => return Err(Error::MissingKey(key.into())),
        }
        Ok(())
    }
}

impl<Q: Into<Key>, V> Lookup<Q> for Arr<V> {
    type Output = V;

    fn lookup(mut self, key: Q) -> Result<V> {
        let key = key.into();
        self.swap_remove(&key).ok_or(Error::MissingKey(key))
    }
}

impl<Q: Into<Key>, V> Assign<Q, V> for Arr<V> {
    fn assign(&mut self, key: Q, value: V) -> Result<()> {
        self.insert(key.into(), value);
        Ok(())
    }
}

impl<K, V> Lookup<K> for HashMap<K, V>
where
    K: Hash + Eq + Into<Key>,
{
    type Output = V;

    fn lookup(mut self, key: K) -> Result<V> {
        match self.remove(&key) {
            Some(v) => Ok(v),
            None => Err(Error::MissingKey(key.into())),
        }
    }
}

impl<K: Hash + Eq, V> Assign<K, V> for HashMap<K, V> {
    fn assign(&mut self, key: K, value: V) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }
}

impl<K, V> Lookup<K> for BTreeMap<K, V>
where
    K: Ord + Into<Key>,
{
    type Output = V;

    fn lookup(mut self, key: K) -> Result<V> {
        match self.remove(&key) {
            Some(v) => Ok(v),
            None => Err(Error::MissingKey(key.into())),
        }
    }
}

impl<K: Ord, V> Assign<K, V> for BTreeMap<K, V> {
    fn assign(&mut self, key: K, value: V) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }
}
