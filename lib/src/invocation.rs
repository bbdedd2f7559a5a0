use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumString;

/// The kind of session a picker is built for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum InvocationClass {
    /// Draws its UI on the controlling terminal.
    Terminal,
    /// Opens its own window in a graphical session.
    Desktop,
}

impl InvocationClass {
    #[must_use]
    pub fn from_desktop(desktop: bool) -> Self {
        if desktop {
            Self::Desktop
        } else {
            Self::Terminal
        }
    }
}

/// A ready-to-run picker: a program plus the argument string the shell will
/// interpret after it.
///
/// The argument string is shell syntax, not an argument vector. Whoever builds
/// it is responsible for quoting anything that came from outside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Invocation {
    program: String,
    arguments: String,
    class: InvocationClass,
}

impl Invocation {
    #[must_use]
    pub fn new(
        program: impl Into<String>,
        arguments: impl Into<String>,
        class: InvocationClass,
    ) -> Self {
        Self {
            program: program.into(),
            arguments: arguments.into(),
            class,
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn arguments(&self) -> &str {
        &self.arguments
    }

    #[must_use]
    pub fn class(&self) -> InvocationClass {
        self.class
    }

    /// The full line handed to `$SHELL -c`.
    #[must_use]
    pub fn command_line(&self) -> String {
        if self.arguments.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.arguments)
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.class, self.command_line())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseInvocationError {
    #[error("expected `<class>:<program> [arguments]`, got {0:?}")]
    MissingClass(String),

    #[error("unknown invocation class {0:?}")]
    UnknownClass(String),

    #[error("invocation has no program")]
    MissingProgram,
}

/// Parses `terminal:fzf -m` or `desktop:rofi -dmenu`. The program is the first
/// whitespace-delimited word; the rest is kept verbatim as the argument string.
impl FromStr for Invocation {
    type Err = ParseInvocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (class, command) = s
            .split_once(':')
            .ok_or_else(|| ParseInvocationError::MissingClass(s.to_owned()))?;
        let class = InvocationClass::from_str(class.trim())
            .map_err(|_| ParseInvocationError::UnknownClass(class.to_owned()))?;

        let command = command.trim();
        let (program, arguments) = match command.split_once(char::is_whitespace) {
            Some((program, arguments)) => (program, arguments.trim_start()),
            None => (command, ""),
        };
        if program.is_empty() {
            return Err(ParseInvocationError::MissingProgram);
        }

        Ok(Self::new(program, arguments, class))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("fzf", "-m -i", "fzf -m -i")]
    #[case("dmenu", "", "dmenu")]
    fn command_line_works(#[case] program: &str, #[case] arguments: &str, #[case] expected: &str) {
        let invocation = Invocation::new(program, arguments, InvocationClass::Terminal);
        assert_eq!(invocation.command_line(), expected);
    }

    #[rstest]
    #[case("terminal:fzf -m -i", "fzf", "-m -i", InvocationClass::Terminal)]
    #[case("desktop:dmenu", "dmenu", "", InvocationClass::Desktop)]
    #[case("Desktop: rofi  -dmenu -p 'a b'", "rofi", "-dmenu -p 'a b'", InvocationClass::Desktop)]
    fn from_str_works(
        #[case] input: &str,
        #[case] program: &str,
        #[case] arguments: &str,
        #[case] class: InvocationClass,
    ) {
        let invocation = Invocation::from_str(input).unwrap();
        assert_eq!(invocation, Invocation::new(program, arguments, class));
    }

    #[rstest]
    #[case("fzf -m")]
    #[case("window:fzf")]
    #[case("terminal:   ")]
    fn from_str_rejects(#[case] input: &str) {
        assert!(Invocation::from_str(input).is_err());
    }

    #[test]
    fn display_round_trips() {
        let invocation = Invocation::new("rofi", "-dmenu", InvocationClass::Desktop);
        assert_eq!(invocation.to_string(), "desktop:rofi -dmenu");
        assert_eq!(Invocation::from_str(&invocation.to_string()).unwrap(), invocation);
    }
}
