use std::collections::HashMap;

use anyhow::Context;
use anyhow::Result;
use chooser::Environment;
use clap::Args;

use crate::args::PickerArgs;
use crate::cmd::Run;

/// Pick labels from a JSON object on stdin and print their values
///
/// Input looks like `{"foo.txt": "/abs/foo.txt"}`.
#[derive(Debug, Args)]
pub struct MapArgs {
    #[command(flatten)]
    picker_args: PickerArgs,
}

impl Run for MapArgs {
    fn run(&self, environment: &Environment) -> Result<()> {
        let entries: HashMap<String, String> = serde_json::from_reader(std::io::stdin().lock())
            .context("stdin must be a JSON object of string labels to string values")?;

        let selection = self.picker_args.options(environment).from_map(&entries)?;
        self.picker_args.emit(&selection)
    }
}
