//! The shapes of data a caller can offer for picking.
//!
//! Every shape answers two questions: which lines to write to the picker, and
//! what a line the picker printed back means to the caller.

use std::collections::HashMap;
use std::io;
use std::io::Write;

/// Strategy for feeding candidates to a picker and mapping its answers back.
pub trait CandidateSource: Sync {
    /// Writes one candidate per line.
    ///
    /// # Errors
    ///
    /// - If writing to the picker fails
    fn feed(&self, writer: &mut dyn Write) -> io::Result<()>;

    /// Maps a trimmed, non-empty line printed by the picker to the value the
    /// caller gets back. `None` drops the line.
    fn resolve(&self, line: &str) -> Option<String>;
}

/// Display labels mapped to the payloads returned for them. Feed order is the
/// map's iteration order.
#[derive(Debug, Clone, Copy)]
pub struct Labeled<'a> {
    entries: &'a HashMap<String, String>,
}

impl<'a> Labeled<'a> {
    #[must_use]
    pub fn new(entries: &'a HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl CandidateSource for Labeled<'_> {
    fn feed(&self, writer: &mut dyn Write) -> io::Result<()> {
        for label in self.entries.keys() {
            writeln!(writer, "{label}")?;
        }
        Ok(())
    }

    fn resolve(&self, line: &str) -> Option<String> {
        self.entries.get(line).map(|value| value.trim().to_owned())
    }
}

/// Ordered strings that are their own payload.
#[derive(Debug, Clone, Copy)]
pub struct Plain<'a, S> {
    items: &'a [S],
}

impl<'a, S> Plain<'a, S> {
    #[must_use]
    pub fn new(items: &'a [S]) -> Self {
        Self { items }
    }
}

impl<S> CandidateSource for Plain<'_, S>
where
    S: AsRef<str> + Sync,
{
    fn feed(&self, writer: &mut dyn Write) -> io::Result<()> {
        for item in self.items {
            writeln!(writer, "{}", item.as_ref())?;
        }
        Ok(())
    }

    fn resolve(&self, line: &str) -> Option<String> {
        Some(line.to_owned())
    }
}

/// Caller-driven input: the callback writes whatever it likes, and each line
/// the picker returns is passed through as-is.
pub struct Streamed<F> {
    feeder: F,
}

impl<F> Streamed<F>
where
    F: Fn(&mut dyn Write) -> io::Result<()> + Sync,
{
    pub fn new(feeder: F) -> Self {
        Self { feeder }
    }
}

impl<F> CandidateSource for Streamed<F>
where
    F: Fn(&mut dyn Write) -> io::Result<()> + Sync,
{
    fn feed(&self, writer: &mut dyn Write) -> io::Result<()> {
        (self.feeder)(writer)
    }

    fn resolve(&self, line: &str) -> Option<String> {
        Some(line.to_owned())
    }
}

/// Labels of a map with arbitrary values. Labels are fed in sorted order so
/// the picker sees the same list on every call, and the label itself is
/// returned.
#[derive(Debug)]
pub struct Keys<'a, V> {
    entries: &'a HashMap<String, V>,
}

impl<'a, V> Keys<'a, V> {
    #[must_use]
    pub fn new(entries: &'a HashMap<String, V>) -> Self {
        Self { entries }
    }
}

impl<V> CandidateSource for Keys<'_, V>
where
    V: Sync,
{
    fn feed(&self, writer: &mut dyn Write) -> io::Result<()> {
        let mut labels: Vec<&String> = self.entries.keys().collect();
        labels.sort_unstable();
        for label in labels {
            writeln!(writer, "{label}")?;
        }
        Ok(())
    }

    fn resolve(&self, line: &str) -> Option<String> {
        Some(line.to_owned())
    }
}
