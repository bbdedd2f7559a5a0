use std::io;
use std::io::Write;
use std::process::Command;
use std::process::Stdio;

use anyhow::Context;
use anyhow::Result;
use chooser::Environment;
use clap::Args;
use tracing::debug;
use tracing::warn;

use crate::args::PickerArgs;
use crate::cmd::Run;

/// Stream the output of a shell command into the picker
#[derive(Debug, Args)]
pub struct FilterArgs {
    #[command(flatten)]
    picker_args: PickerArgs,

    /// Command whose stdout becomes the candidates. A single word is run as
    /// a shell string; several words are quoted individually.
    #[arg(trailing_var_arg = true, required = true)]
    command: Vec<String>,
}

impl Run for FilterArgs {
    fn run(&self, environment: &Environment) -> Result<()> {
        let shell = environment.shell();
        let command_line = self.command_line()?;

        let selection = self
            .picker_args
            .options(environment)
            .from_filter(|writer| produce(&shell, &command_line, writer))?;
        self.picker_args.emit(&selection)
    }
}

impl FilterArgs {
    fn command_line(&self) -> Result<String> {
        match self.command.as_slice() {
            [single] => Ok(single.clone()),
            words => shlex::try_join(words.iter().map(String::as_str))
                .context("producer command cannot be shell-quoted"),
        }
    }
}

/// Runs `command_line` and copies its stdout into `writer`.
fn produce(shell: &str, command_line: &str, writer: &mut dyn Write) -> io::Result<()> {
    debug!(%command_line, "starting candidate producer");
    let mut producer = Command::new(shell)
        .arg("-c")
        .arg(command_line)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()?;

    let Some(mut stdout) = producer.stdout.take() else {
        producer.kill()?;
        return Err(io::Error::other("producer stdout was not captured"));
    };

    if let Err(error) = io::copy(&mut stdout, writer) {
        // The picker stopped reading; the producer has nowhere left to write.
        if let Err(kill_error) = producer.kill() {
            warn!(?kill_error, "unable to stop candidate producer");
        }
        if let Err(wait_error) = producer.wait() {
            warn!(?wait_error, "unable to reap candidate producer");
        }
        return Err(error);
    }

    let status = producer.wait()?;
    if !status.success() {
        return Err(io::Error::other(format!(
            "candidate producer exited with {status}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[clap(flatten)]
        filter: FilterArgs,
    }

    #[rstest]
    #[case(&["ls -la | grep x"], "ls -la | grep x")]
    #[case(&["echo", "a b"], "echo 'a b'")]
    #[case(&["printf", "%s\\n", "it's"], "printf '%s\\n' \"it's\"")]
    fn command_line_keeps_word_boundaries(#[case] words: &[&str], #[case] expected: &str) {
        let args = TestCli::try_parse_from(std::iter::once("chooser").chain(words.iter().copied()))
            .unwrap()
            .filter;
        let command_line = args.command_line().unwrap();
        assert_eq!(shlex::split(&command_line).unwrap(), shlex::split(expected).unwrap());
    }

    #[test]
    fn quoted_words_reach_the_producer_intact() {
        let args = TestCli::try_parse_from(["chooser", "printf", "%s\n", "a b"])
            .unwrap()
            .filter;
        let mut buf = Vec::new();
        produce("sh", &args.command_line().unwrap(), &mut buf).unwrap();
        assert_eq!(buf, b"a b\n");
    }

    #[test]
    fn produce_copies_stdout() {
        let mut buf = Vec::new();
        produce("sh", "printf 'a\\nb\\n'", &mut buf).unwrap();
        assert_eq!(buf, b"a\nb\n");
    }

    #[test]
    fn produce_reports_failure() {
        let mut buf = Vec::new();
        let error = produce("sh", "echo partial; exit 3", &mut buf).unwrap_err();
        assert_eq!(buf, b"partial\n");
        assert!(error.to_string().contains("exited"));
    }
}
