use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::formatter;
use crate::parser::{Section, parse};
use crate::range_set::RangeSet;
use crate::validator::{InvalidSpecError, SpecResult};

/// A set of integers built from range specs such as `"-10..10,12,100..120"`.
///
/// Duplicate adds, deletes of absent values and odd bounds are reported to
/// the sink `S` and never fail. Only a malformed spec is an error, and a call
/// containing one leaves the set untouched.
///
/// A `Range` is not synchronized; share one across threads only behind a lock.
pub struct Range<S = LogSink> {
    set: RangeSet,
    sink: S,
}

impl Range<LogSink> {
    /// Builds a range from `specs`, reporting notices through `log`.
    pub fn new<I, T>(specs: I) -> SpecResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut range = Range::with_sink(LogSink);
        range.add_range(specs)?;
        Ok(range)
    }
}

impl Default for Range<LogSink> {
    fn default() -> Self {
        Range::with_sink(LogSink)
    }
}

impl<S: DiagnosticSink> Range<S> {
    /// An empty range reporting to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Range {
            set: RangeSet::new(),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    // Every spec is parsed before the caller applies anything.
    fn parse_all<I, T>(&mut self, specs: I) -> SpecResult<Vec<Section>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut sections = Vec::new();
        for spec in specs {
            sections.extend(parse(spec.as_ref(), &mut self.sink)?);
        }
        Ok(sections)
    }

    pub fn add_range<I, T>(&mut self, specs: I) -> SpecResult<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let sections = self.parse_all(specs)?;
        log::debug!(target: "rangespec", "adding {} section(s)", sections.len());
        for section in sections {
            self.set.add(section.values(), &mut self.sink);
        }
        Ok(())
    }

    pub fn delete_range<I, T>(&mut self, specs: I) -> SpecResult<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let sections = self.parse_all(specs)?;
        log::debug!(target: "rangespec", "deleting {} section(s)", sections.len());
        for section in sections {
            self.set.remove(section.values(), &mut self.sink);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.set.clear();
    }

    pub fn in_range(&self, value: i64) -> bool {
        self.set.contains(value)
    }

    /// Membership of each value, in the order given.
    pub fn in_range_each<I>(&self, values: I) -> Vec<bool>
    where
        I: IntoIterator<Item = i64>,
    {
        self.set.contains_each(values)
    }

    /// True only if every value is in the range.
    pub fn in_range_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = i64>,
    {
        self.set.contains_all(values)
    }

    pub fn sorted_values(&self) -> Vec<i64> {
        self.set.sorted_values()
    }

    /// The maximal runs of consecutive members, ascending.
    pub fn runs(&self) -> Vec<RangeInclusive<i64>> {
        formatter::runs(&self.sorted_values())
    }

    /// The minimal spec describing the current members; empty when the
    /// range is empty.
    pub fn as_string(&self) -> String {
        formatter::format(&self.sorted_values())
    }

    pub fn size(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl<S: DiagnosticSink> fmt::Display for Range<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl<S: DiagnosticSink> fmt::Debug for Range<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Range")
            .field("members", &self.as_string())
            .field("size", &self.size())
            .finish()
    }
}

impl FromStr for Range<LogSink> {
    type Err = InvalidSpecError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        Range::new([spec])
    }
}
