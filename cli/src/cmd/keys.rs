use std::collections::HashMap;

use anyhow::Context;
use anyhow::Result;
use chooser::Environment;
use clap::Args;
use serde_json::Value;

use crate::args::PickerArgs;
use crate::cmd::Run;

/// Pick keys of a JSON object on stdin, offered in sorted order
#[derive(Debug, Args)]
pub struct KeysArgs {
    #[command(flatten)]
    picker_args: PickerArgs,
}

impl Run for KeysArgs {
    fn run(&self, environment: &Environment) -> Result<()> {
        let entries: HashMap<String, Value> = serde_json::from_reader(std::io::stdin().lock())
            .context("stdin must be a JSON object")?;

        let selection = self.picker_args.options(environment).from_keys(&entries)?;
        self.picker_args.emit(&selection)
    }
}
