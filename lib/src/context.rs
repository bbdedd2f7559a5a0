use std::env;

use bon::Builder;

const TERM: &str = "TERM";
const FORCE_DESKTOP: &str = "FORCE_DESKTOP";
const SHELL: &str = "SHELL";

/// Shell used to interpret picker command lines when `SHELL` is unset.
pub const DEFAULT_SHELL: &str = "sh";

/// Snapshot of the process environment variables that influence picking.
///
/// The core never reads the environment itself. Build one of these at the
/// program boundary with [`Environment::from_env`] and pass it down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct Environment {
    #[builder(into)]
    pub term: Option<String>,
    #[builder(into)]
    pub force_desktop: Option<String>,
    #[builder(into)]
    pub shell: Option<String>,
}

impl Environment {
    /// Reads `TERM`, `FORCE_DESKTOP` and `SHELL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            term: env::var(TERM).ok(),
            force_desktop: env::var(FORCE_DESKTOP).ok(),
            shell: env::var(SHELL).ok(),
        }
    }

    /// A terminal session is one with a non-empty `TERM`, unless
    /// `FORCE_DESKTOP=true` suppresses the detection.
    #[must_use]
    pub fn running_in_terminal(&self) -> bool {
        let has_term = self.term.as_deref().is_some_and(|t| !t.is_empty());
        let suppressed = self.force_desktop.as_deref() == Some("true");
        has_term && !suppressed
    }

    /// The shell to run pickers through, falling back to [`DEFAULT_SHELL`].
    #[must_use]
    pub fn shell(&self) -> String {
        self.shell
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SHELL)
            .to_owned()
    }
}

/// Runtime facts and caller preferences that drive both invocation building
/// and picker selection.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct SelectionContext {
    #[builder(default = true)]
    pub running_in_terminal: bool,

    #[builder(default)]
    pub force_desktop: bool,

    /// Prompt label shown by pickers that support one.
    #[builder(into)]
    pub description: Option<String>,

    /// Command for the fuzzy finder's preview pane.
    #[builder(into)]
    pub preview: Option<String>,

    #[builder(default = DEFAULT_SHELL.to_owned(), into)]
    pub shell: String,
}

impl Default for SelectionContext {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SelectionContext {
    /// Seeds a context from the environment snapshot. Description, preview and
    /// the explicit desktop flag are left for the caller to fill in.
    #[must_use]
    pub fn from_environment(environment: &Environment) -> Self {
        Self::builder()
            .running_in_terminal(environment.running_in_terminal())
            .shell(environment.shell())
            .build()
    }

    /// Whether a desktop-class picker must be used. Being detached from a
    /// terminal always forces desktop mode.
    #[must_use]
    pub fn effective_desktop(&self) -> bool {
        self.force_desktop || !self.running_in_terminal
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("xterm-256color"), None, true)]
    #[case(Some("xterm-256color"), Some("false"), true)]
    #[case(Some("xterm-256color"), Some("true"), false)]
    #[case(Some(""), None, false)]
    #[case(None, None, false)]
    fn running_in_terminal_works(
        #[case] term: Option<&str>,
        #[case] force_desktop: Option<&str>,
        #[case] expected: bool,
    ) {
        let environment = Environment {
            term: term.map(str::to_owned),
            force_desktop: force_desktop.map(str::to_owned),
            shell: None,
        };
        assert_eq!(environment.running_in_terminal(), expected);
    }

    #[rstest]
    #[case(Some("bash"), "bash")]
    #[case(Some(""), "sh")]
    #[case(None, "sh")]
    fn shell_works(#[case] shell: Option<&str>, #[case] expected: &str) {
        let environment = Environment {
            shell: shell.map(str::to_owned),
            ..Environment::default()
        };
        assert_eq!(environment.shell(), expected);
    }

    #[rstest]
    #[case(true, false, false)]
    #[case(true, true, true)]
    #[case(false, false, true)]
    #[case(false, true, true)]
    fn effective_desktop_works(
        #[case] running_in_terminal: bool,
        #[case] force_desktop: bool,
        #[case] expected: bool,
    ) {
        let context = SelectionContext::builder()
            .running_in_terminal(running_in_terminal)
            .force_desktop(force_desktop)
            .build();
        assert_eq!(context.effective_desktop(), expected);
    }

    #[test]
    fn from_environment_carries_shell() {
        let environment = Environment::builder().term("dumb").shell("zsh").build();
        let context = SelectionContext::from_environment(&environment);
        assert!(context.running_in_terminal);
        assert!(!context.force_desktop);
        assert_eq!(context.shell, "zsh");
    }
}
