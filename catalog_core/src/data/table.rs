use std::{collections::HashMap, fmt::Debug, hash::Hash};

use tracing::warn;

/// A record that can be looked up by a unique key.
pub trait Keyed {
    type Key: Copy + Eq + Hash + Debug;

    /// What kind of record this is, used when reporting problems with a table.
    const KIND: &'static str;

    fn key(&self) -> Self::Key;
}

/// An ordered, immutable collection of records with lookup by key.
///
/// Records keep the order in which they were given. If several records share a
/// key, lookups resolve to the first of them; the later ones are still listed
/// by [`Table::records`] but can never be found by key.
#[derive(Debug)]
pub struct Table<R: Keyed> {
    records: Vec<R>,
    index: HashMap<R::Key, usize>,
}

impl<R: Keyed> Table<R> {
    pub fn new(records: Vec<R>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            let key = record.key();
            if index.contains_key(&key) {
                warn!(table = R::KIND, ?key, position, "duplicate key, keeping the first record");
                continue;
            }
            index.insert(key, position);
        }
        Table { records, index }
    }

    pub fn get(&self, key: R::Key) -> Option<&R> {
        self.index.get(&key).map(|&position| &self.records[position])
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Keyed> Default for Table<R> {
    fn default() -> Self {
        Table { records: Vec::new(), index: HashMap::new() }
    }
}
