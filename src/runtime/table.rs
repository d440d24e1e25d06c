//! Host tables
//!
//! A table has an array part holding the keys `1..=len()` and a record part
//! holding every other key. `createtable` pre-sizes both parts.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::Value;

/// Key of a table entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKey {
    Boolean(bool),
    Integer(i64),
    String(String),
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKey::Boolean(b) => write!(f, "{}", b),
            TableKey::Integer(i) => write!(f, "{}", i),
            TableKey::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for TableKey {
    fn from(i: i64) -> Self {
        TableKey::Integer(i)
    }
}

impl From<&str> for TableKey {
    fn from(s: &str) -> Self {
        TableKey::String(s.to_string())
    }
}

impl From<bool> for TableKey {
    fn from(b: bool) -> Self {
        TableKey::Boolean(b)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    array: Vec<Value>,
    record: HashMap<TableKey, Value>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty table with room for `narr` array slots and `nrec` record slots
    pub fn with_capacity(narr: usize, nrec: usize) -> Self {
        Self {
            array: Vec::with_capacity(narr),
            record: HashMap::with_capacity(nrec),
        }
    }

    /// Length of the array part
    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn record_len(&self) -> usize {
        self.record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty() && self.record.is_empty()
    }

    pub fn array_capacity(&self) -> usize {
        self.array.capacity()
    }

    pub fn record_capacity(&self) -> usize {
        self.record.capacity()
    }

    pub fn array(&self) -> &[Value] {
        &self.array
    }

    pub fn get(&self, key: &TableKey) -> Option<&Value> {
        match self.array_index(key) {
            Some(idx) => self.array.get(idx),
            None => self.record.get(key),
        }
    }

    /// Store `value` under `key`. Storing `nil` removes the entry.
    ///
    /// The array part never holds `nil`: clearing an index inside it ends
    /// the array there and the keys after the hole move to the record part.
    pub fn set(&mut self, key: TableKey, value: Value) {
        if let Some(idx) = self.array_index(&key) {
            if value.is_nil() {
                let tail = self.array.split_off(idx);
                for (offset, moved) in tail.into_iter().enumerate().skip(1) {
                    self.record
                        .insert(TableKey::Integer((idx + offset) as i64 + 1), moved);
                }
            } else {
                self.array[idx] = value;
            }
            return;
        }

        if key == TableKey::Integer(self.array.len() as i64 + 1) && !value.is_nil() {
            self.push(value);
            return;
        }

        if value.is_nil() {
            self.record.remove(&key);
        } else {
            self.record.insert(key, value);
        }
    }

    /// Append to the array part, pulling any following integer keys out of
    /// the record part. Pushing `nil` does nothing.
    pub fn push(&mut self, value: Value) {
        if value.is_nil() {
            return;
        }
        self.array.push(value);
        while let Some(next) = self
            .record
            .remove(&TableKey::Integer(self.array.len() as i64 + 1))
        {
            self.array.push(next);
        }
    }

    fn array_index(&self, key: &TableKey) -> Option<usize> {
        match key {
            TableKey::Integer(i) if *i >= 1 && (*i as u64) <= self.array.len() as u64 => {
                Some(*i as usize - 1)
            }
            _ => None,
        }
    }
}

/// Serialized as `{"array": [...], "record": {...}}` with record keys
/// rendered as strings in sorted order.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record: BTreeMap<String, &Value> = self
            .record
            .iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("array", &self.array)?;
        map.serialize_entry("record", &record)?;
        map.end()
    }
}
