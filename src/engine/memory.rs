use std::num::NonZeroUsize;

use super::storage::Storage;
use crate::database::{DictStats, FixedDict};

/// Integer key-value store backed by a fixed-size chained [`FixedDict`].
#[derive(Debug, Default)]
pub struct KeyValueStore {
    data: FixedDict<i64>,
}

impl KeyValueStore {
    pub fn new() -> Self {
        Self {
            data: FixedDict::new(),
        }
    }

    pub fn with_buckets(bucket_count: NonZeroUsize) -> Self {
        Self {
            data: FixedDict::with_buckets(bucket_count),
        }
    }

    pub fn put(
        &mut self,
        key: i64,
        value: i64,
    ) {
        self.data.insert(key, value);
    }

    pub fn get(
        &self,
        key: i64,
    ) -> Option<i64> {
        self.data.get(key).copied()
    }

    pub fn delete(
        &mut self,
        key: i64,
    ) -> Option<i64> {
        self.data.remove(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn bucket_count(&self) -> NonZeroUsize {
        self.data.bucket_count()
    }

    pub fn stats(&self) -> DictStats {
        self.data.stats()
    }
}

impl Storage for KeyValueStore {
    fn put(
        &mut self,
        key: i64,
        value: i64,
    ) {
        KeyValueStore::put(self, key, value)
    }

    fn get(
        &self,
        key: i64,
    ) -> Option<i64> {
        KeyValueStore::get(self, key)
    }

    fn delete(
        &mut self,
        key: i64,
    ) -> Option<i64> {
        KeyValueStore::delete(self, key)
    }

    fn len(&self) -> usize {
        KeyValueStore::len(self)
    }
}
