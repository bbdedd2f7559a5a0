use std::collections::HashSet;

use tracing::debug;

use crate::context::SelectionContext;
use crate::error::Error;
use crate::error::Result;
use crate::invocation::Invocation;
use crate::invocation::InvocationClass;
use crate::util::shell;

/// Fuzzy finder installed at a fixed location, tried before a `PATH` lookup.
pub const FZF_FIXED_PATH: &str = "/usr/local/bin/fzf";

const FZF_BASE_ARGS: &str = "-m -i --bind 'esc:become(exit)'";
const ROFI_BASE_ARGS: &str = "-dmenu -multi-select -matching fuzzy -i";

/// Answers whether a program can be executed.
pub trait Lookup {
    fn is_executable(&self, program: &str) -> bool;
}

/// Looks programs up on `PATH`. Names containing a path separator are
/// checked as paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathLookup;

impl Lookup for PathLookup {
    fn is_executable(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// Fixed set of executable names, for callers that already know what is
/// installed.
#[derive(Debug, Default, Clone)]
pub struct StaticLookup {
    programs: HashSet<String>,
}

impl StaticLookup {
    pub fn new<I, S>(programs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            programs: programs.into_iter().map(Into::into).collect(),
        }
    }
}

impl Lookup for StaticLookup {
    fn is_executable(&self, program: &str) -> bool {
        self.programs.contains(program)
    }
}

/// A picker this crate knows how to drive, in probe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KnownPicker {
    FzfFixed,
    Fzf,
    Rofi,
    Dmenu,
}

const KNOWN_PICKERS: &[KnownPicker] = &[
    KnownPicker::FzfFixed,
    KnownPicker::Fzf,
    KnownPicker::Rofi,
    KnownPicker::Dmenu,
];

impl KnownPicker {
    fn program(self) -> &'static str {
        match self {
            KnownPicker::FzfFixed => FZF_FIXED_PATH,
            KnownPicker::Fzf => "fzf",
            KnownPicker::Rofi => "rofi",
            KnownPicker::Dmenu => "dmenu",
        }
    }

    fn class(self) -> InvocationClass {
        match self {
            KnownPicker::FzfFixed | KnownPicker::Fzf => InvocationClass::Terminal,
            KnownPicker::Rofi | KnownPicker::Dmenu => InvocationClass::Desktop,
        }
    }

    fn arguments(self, context: &SelectionContext) -> String {
        match self {
            KnownPicker::FzfFixed | KnownPicker::Fzf => {
                with_flag(FZF_BASE_ARGS, "--preview", context.preview.as_deref())
            }
            KnownPicker::Rofi => with_flag(ROFI_BASE_ARGS, "-p", context.description.as_deref()),
            KnownPicker::Dmenu => String::new(),
        }
    }

    fn invocation(self, context: &SelectionContext) -> Invocation {
        Invocation::new(self.program(), self.arguments(context), self.class())
    }
}

/// Appends `flag <quoted value>` to `base` when a value is present, non-empty
/// and quotable.
fn with_flag(base: &str, flag: &str, value: Option<&str>) -> String {
    match value.filter(|v| !v.is_empty()).and_then(shell::quote) {
        Some(quoted) => format!("{base} {flag} {quoted}"),
        None => base.to_owned(),
    }
}

/// Returns the caller's invocations untouched if there are any, otherwise
/// probes for every known picker and builds an invocation for each one found.
///
/// # Errors
///
/// - [`Error::NoExecutablesFound`] if the result would be empty
pub fn resolve(
    existing: Vec<Invocation>,
    context: &SelectionContext,
    lookup: &impl Lookup,
) -> Result<Vec<Invocation>> {
    if !existing.is_empty() {
        debug!(count = existing.len(), "using caller-supplied invocations");
        return Ok(existing);
    }

    let invocations: Vec<Invocation> = KNOWN_PICKERS
        .iter()
        .filter(|picker| {
            let found = lookup.is_executable(picker.program());
            debug!(program = picker.program(), found, "probed picker");
            found
        })
        .map(|picker| picker.invocation(context))
        .collect();

    if invocations.is_empty() {
        return Err(Error::NoExecutablesFound);
    }

    debug!(?invocations, "resolved invocations");
    Ok(invocations)
}
