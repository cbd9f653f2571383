use std::collections::BTreeMap;

use anon_core::AnonTask;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Cumulative counters for one anonymizer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    calls: usize,
    hits: BTreeMap<AnonTask, usize>,
}

impl Stats {
    /// Key under which the number of processed documents is reported
    pub const CALLS: &'static str = "calls";

    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_call(&mut self) {
        self.calls += 1;
    }

    pub(crate) fn record_hits(&mut self, task: AnonTask, count: usize) {
        *self.hits.entry(task).or_default() += count;
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn hits(&self, task: AnonTask) -> usize {
        self.hits.get(&task).copied().unwrap_or(0)
    }

    /// Look up by task name or `"calls"`
    pub fn get(&self, key: &str) -> Option<usize> {
        if key == Self::CALLS {
            return Some(self.calls);
        }
        let task: AnonTask = key.parse().ok()?;
        self.hits.get(&task).copied()
    }

    /// `calls` first, then every task that has run, in priority order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        std::iter::once((Self::CALLS, self.calls))
            .chain(self.hits.iter().map(|(task, count)| (task.name(), *count)))
    }

    pub fn to_map(&self) -> BTreeMap<String, usize> {
        self.iter()
            .map(|(key, count)| (key.to_string(), count))
            .collect()
    }
}

impl Serialize for Stats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.hits.len() + 1))?;
        for (key, count) in self.iter() {
            map.serialize_entry(key, &count)?;
        }
        map.end()
    }
}
