//! Row records: one table row keyed by column identifier.

use std::ops::Index;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::{ColumnKey, Value};

/// An ordered mapping from column identifier to cell value.
///
/// Key order is insertion order. Equality ignores key order, so two rows
/// with the same entries compare equal however they were built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    values: IndexMap<ColumnKey, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Row {
            values: IndexMap::with_capacity(capacity),
        }
    }

    /// Build a row from positional values keyed `0..n`
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(pos, v)| (ColumnKey::Position(pos), v.into()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get<K: Into<ColumnKey>>(&self, key: K) -> Option<&Value> {
        self.values.get(&key.into())
    }

    /// Like [`Row::get`], but a missing key is a `ColumnNotFound` error
    pub fn try_get<K: Into<ColumnKey>>(&self, key: K) -> Result<&Value> {
        let key = key.into();
        self.values
            .get(&key)
            .ok_or_else(|| Error::ColumnNotFound(key.to_string()))
    }

    pub fn contains_key<K: Into<ColumnKey>>(&self, key: K) -> bool {
        self.values.contains_key(&key.into())
    }

    /// Insert or overwrite a value. An existing key keeps its position.
    pub fn insert<K: Into<ColumnKey>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Builder form of [`Row::insert`]
    pub fn with<K: Into<ColumnKey>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &ColumnKey> {
        self.values.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.values.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnKey, &Value)> {
        self.values.iter()
    }

    pub(crate) fn remove(&mut self, key: &ColumnKey) -> Option<Value> {
        self.values.shift_remove(key)
    }
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .values
                .iter()
                .all(|(k, v)| other.values.get(k) == Some(v))
    }
}

impl<K: Into<ColumnKey>> Index<K> for Row {
    type Output = Value;

    /// Panics on a missing key; use [`Row::get`] for a checked lookup.
    fn index(&self, key: K) -> &Value {
        let key = key.into();
        match self.values.get(&key) {
            Some(value) => value,
            None => panic!("column '{}' is not in this row", key),
        }
    }
}

impl<K: Into<ColumnKey>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Row {
    type Item = (ColumnKey, Value);
    type IntoIter = indexmap::map::IntoIter<ColumnKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a ColumnKey, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, ColumnKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
