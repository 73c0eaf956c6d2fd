//! In-process backend with the same `ADD` semantics. Used for local runs and
//! tests; a `DashMap` entry lock serializes concurrent increments.

use async_trait::async_trait;
use dashmap::DashMap;

use visitor_counter_core::error::{CounterError, Result};

use crate::store::CounterStore;

pub struct MemoryCounterStore {
    key: String,
    /// Holds at most the one counter record. `entry()` locks its shard, so
    /// create-if-absent and the add happen under one lock, like DynamoDB `ADD`.
    counts: DashMap<String, u64>,
    fail_with: Option<CounterError>,
}

impl MemoryCounterStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            counts: DashMap::new(),
            fail_with: None,
        }
    }

    /// Seed the counter record.
    pub fn with_value(self, value: u64) -> Self {
        self.counts.insert(self.key.clone(), value);
        self
    }

    /// Every increment fails with `err` and leaves the record untouched.
    pub fn failing(mut self, err: CounterError) -> Self {
        self.fail_with = Some(err);
        self
    }

    /// Current value, `None` while the record does not exist.
    pub fn get(&self) -> Option<u64> {
        self.counts.get(&self.key).map(|v| *v)
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn increment(&self) -> Result<String> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }

        let mut entry = self.counts.entry(self.key.clone()).or_insert(0);
        let next = entry.checked_add(1).ok_or_else(|| {
            CounterError::Store(format!("counter {:?} overflowed", self.key))
        })?;
        *entry = next;
        Ok(next.to_string())
    }
}
