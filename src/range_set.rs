use std::collections::HashSet;

use crate::diagnostics::{DiagnosticSink, Notice};

/// Flat membership set over integers. Runs only exist once the set is
/// formatted; nothing about intervals is stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    members: HashSet<i64>,
}

impl RangeSet {
    pub fn new() -> Self {
        RangeSet::default()
    }

    /// Inserts every value, noting the ones that were already present.
    pub fn add<I>(&mut self, values: I, sink: &mut dyn DiagnosticSink)
    where
        I: IntoIterator<Item = i64>,
    {
        for value in values {
            if !self.members.insert(value) {
                sink.notice(&Notice::AlreadyInRange(value));
            }
        }
    }

    /// Removes every value, noting the ones that were not present.
    pub fn remove<I>(&mut self, values: I, sink: &mut dyn DiagnosticSink)
    where
        I: IntoIterator<Item = i64>,
    {
        for value in values {
            if !self.members.remove(&value) {
                sink.notice(&Notice::NotInRange(value));
            }
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.members.contains(&value)
    }

    /// One answer per input value, in input order.
    pub fn contains_each<I>(&self, values: I) -> Vec<bool>
    where
        I: IntoIterator<Item = i64>,
    {
        values.into_iter().map(|v| self.contains(v)).collect()
    }

    /// True iff every value is present; stops at the first miss.
    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = i64>,
    {
        values.into_iter().all(|v| self.contains(v))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn sorted_values(&self) -> Vec<i64> {
        let mut values: Vec<i64> = self.members.iter().copied().collect();
        values.sort_unstable();
        values
    }
}

impl FromIterator<i64> for RangeSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        RangeSet {
            members: iter.into_iter().collect(),
        }
    }
}
