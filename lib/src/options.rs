use std::collections::HashMap;
use std::io;
use std::io::Write;

use tracing::debug;

use crate::context::SelectionContext;
use crate::error::Result;
use crate::invocation::Invocation;
use crate::mapper;
use crate::registry;
use crate::registry::Lookup;
use crate::registry::PathLookup;
use crate::select::select;
use crate::session::PipeSession;
use crate::source::CandidateSource;
use crate::source::Keys;
use crate::source::Labeled;
use crate::source::Plain;
use crate::source::Streamed;

/// Which pickers may be used, and the context to choose among them.
///
/// With no invocations, every call probes the system for known pickers. Nothing
/// is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub invocations: Vec<Invocation>,

    pub context: SelectionContext,
}

impl Options {
    #[must_use]
    pub fn new(context: SelectionContext) -> Self {
        Self {
            invocations: Vec::new(),
            context,
        }
    }

    /// Adds a caller-supplied invocation. Its position is its priority.
    #[must_use]
    pub fn with(mut self, invocation: Invocation) -> Self {
        self.invocations.push(invocation);
        self
    }

    /// Offers the labels of `entries` and returns the payloads of the picked
    /// ones.
    ///
    /// # Errors
    ///
    /// See [`Options::choose`].
    pub fn from_map(&self, entries: &HashMap<String, String>) -> Result<Vec<String>> {
        self.choose(&Labeled::new(entries))
    }

    /// Offers `items` in order and returns the picked ones.
    ///
    /// # Errors
    ///
    /// See [`Options::choose`].
    pub fn from_lines<S>(&self, items: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        self.choose(&Plain::new(items))
    }

    /// Lets `feeder` write the picker's input directly and returns the picked
    /// lines verbatim.
    ///
    /// # Errors
    ///
    /// See [`Options::choose`].
    pub fn from_filter<F>(&self, feeder: F) -> Result<Vec<String>>
    where
        F: Fn(&mut dyn Write) -> io::Result<()> + Sync,
    {
        self.choose(&Streamed::new(feeder))
    }

    /// Offers the sorted labels of `entries` and returns the picked labels.
    ///
    /// # Errors
    ///
    /// See [`Options::choose`].
    pub fn from_keys<V>(&self, entries: &HashMap<String, V>) -> Result<Vec<String>>
    where
        V: Sync,
    {
        self.choose(&Keys::new(entries))
    }

    /// Runs one selection over any [`CandidateSource`], probing `PATH` when no
    /// invocations were supplied.
    ///
    /// # Errors
    ///
    /// - [`Error::NoExecutablesFound`](crate::Error::NoExecutablesFound)
    /// - [`Error::NoSuitableExecutable`](crate::Error::NoSuitableExecutable)
    /// - Any [`PipeSession::run`] error
    pub fn choose(&self, source: &impl CandidateSource) -> Result<Vec<String>> {
        self.choose_with(source, &PathLookup)
    }

    /// Like [`Options::choose`], with a custom way of probing for pickers.
    ///
    /// # Errors
    ///
    /// See [`Options::choose`].
    pub fn choose_with(
        &self,
        source: &impl CandidateSource,
        lookup: &impl Lookup,
    ) -> Result<Vec<String>> {
        let invocations = self.resolve_with(lookup)?;
        let invocation = select(&invocations, &self.context)?;

        let output =
            PipeSession::new(&self.context.shell).run(invocation, |writer| source.feed(writer))?;
        let selection = mapper::map(&output, source);

        debug!(count = selection.len(), "selection finished");
        Ok(selection)
    }

    /// The invocations a call would pick from, without running anything.
    ///
    /// # Errors
    ///
    /// - [`Error::NoExecutablesFound`](crate::Error::NoExecutablesFound)
    pub fn resolve_with(&self, lookup: &impl Lookup) -> Result<Vec<Invocation>> {
        registry::resolve(self.invocations.clone(), &self.context, lookup)
    }
}
