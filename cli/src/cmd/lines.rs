use std::io::BufRead;

use anyhow::Context;
use anyhow::Result;
use chooser::Environment;
use clap::Args;

use crate::args::PickerArgs;
use crate::cmd::Run;

/// Pick from the given items, or from stdin lines when none are given
#[derive(Debug, Args)]
pub struct LinesArgs {
    #[command(flatten)]
    picker_args: PickerArgs,

    /// Candidates to offer, in order.
    items: Vec<String>,
}

impl Run for LinesArgs {
    fn run(&self, environment: &Environment) -> Result<()> {
        let items = if self.items.is_empty() {
            std::io::stdin()
                .lock()
                .lines()
                .collect::<Result<Vec<_>, _>>()
                .context("unable to read candidates from stdin")?
        } else {
            self.items.clone()
        };

        let selection = self.picker_args.options(environment).from_lines(&items)?;
        self.picker_args.emit(&selection)
    }
}
