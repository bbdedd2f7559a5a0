use std::io::Write;

use anyhow::Result;
use chooser::Environment;
use chooser::Invocation;
use chooser::Options;
use chooser::SelectionContext;
use clap::Args;

const HEADING: Option<&str> = Some("Picker Options");

/// Arguments shared by every command that runs a picker.
#[derive(Debug, Args, Clone)]
pub struct PickerArgs {
    /// Prompt shown by pickers that support one.
    #[clap(short, long, help_heading = HEADING)]
    pub description: Option<String>,

    /// Preview command for the fuzzy finder, e.g. `cat {}`.
    #[clap(short, long, help_heading = HEADING)]
    pub preview: Option<String>,

    /// Use a desktop picker even when attached to a terminal.
    ///
    /// `FORCE_DESKTOP=true` in the environment has the same effect.
    #[clap(long, help_heading = HEADING)]
    pub force_desktop: bool,

    /// Picker to use instead of probing, as `<terminal|desktop>:<command>`.
    /// Repeat to give fallbacks, highest priority first.
    #[clap(short, long = "invocation", help_heading = HEADING)]
    pub invocations: Vec<Invocation>,

    /// Print the selection as a JSON array instead of one per line.
    #[clap(long, help_heading = HEADING)]
    pub json: bool,
}

impl PickerArgs {
    /// Builds library options from these arguments and the environment.
    pub fn options(&self, environment: &Environment) -> Options {
        let context = SelectionContext {
            force_desktop: self.force_desktop,
            description: self.description.clone(),
            preview: self.preview.clone(),
            ..SelectionContext::from_environment(environment)
        };
        Options {
            invocations: self.invocations.clone(),
            context,
        }
    }

    /// Writes the selection to stdout in the requested format.
    pub fn emit(&self, selection: &[String]) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        if self.json {
            serde_json::to_writer(&mut stdout, selection)?;
            writeln!(stdout)?;
        } else {
            for value in selection {
                writeln!(stdout, "{value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chooser::InvocationClass;
    use clap::Parser;
    use rstest::rstest;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[clap(flatten)]
        picker: PickerArgs,
    }

    fn parse(args: &[&str]) -> PickerArgs {
        TestCli::try_parse_from(std::iter::once("chooser").chain(args.iter().copied()))
            .unwrap()
            .picker
    }

    #[test]
    fn options_carry_context() {
        let args = parse(&["-d", "files", "-p", "cat {}"]);
        let environment = Environment::builder().term("xterm").shell("bash").build();
        let options = args.options(&environment);

        assert!(options.invocations.is_empty());
        assert!(options.context.running_in_terminal);
        assert_eq!(options.context.description.as_deref(), Some("files"));
        assert_eq!(options.context.preview.as_deref(), Some("cat {}"));
        assert_eq!(options.context.shell, "bash");
    }

    #[rstest]
    #[case(&[], false)]
    #[case(&["--force-desktop"], true)]
    fn force_desktop_flag(#[case] args: &[&str], #[case] expected: bool) {
        let options = parse(args).options(&Environment::builder().term("xterm").build());
        assert_eq!(options.context.effective_desktop(), expected);
    }

    #[rstest]
    #[case("1", false)]
    #[case("", false)]
    #[case("yes", false)]
    #[case("true", true)]
    fn force_desktop_env_never_breaks_parsing(#[case] value: &str, #[case] expected: bool) {
        std::env::set_var("FORCE_DESKTOP", value);
        let args = TestCli::try_parse_from(["chooser"]);
        std::env::remove_var("FORCE_DESKTOP");

        let args = args.unwrap().picker;
        assert!(!args.force_desktop);

        let environment = Environment::builder()
            .term("xterm")
            .force_desktop(value)
            .build();
        assert_eq!(args.options(&environment).context.effective_desktop(), expected);
    }

    #[test]
    fn invocations_keep_order() {
        let args = parse(&["-i", "terminal:fzf -m", "-i", "desktop:dmenu"]);
        let classes: Vec<_> = args.invocations.iter().map(Invocation::class).collect();
        assert_eq!(classes, [InvocationClass::Terminal, InvocationClass::Desktop]);
    }

    #[test]
    fn bad_invocation_is_rejected() {
        let result = TestCli::try_parse_from(["chooser", "-i", "fzf -m"]);
        assert!(result.is_err());
    }
}
