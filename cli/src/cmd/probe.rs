use anyhow::Result;
use chooser::select::select;
use chooser::Environment;
use chooser::Invocation;
use chooser::PathLookup;
use clap::Args;
use serde::Serialize;

use crate::args::PickerArgs;
use crate::cmd::Run;

/// Show which pickers are available and which one would be used
#[derive(Debug, Args)]
pub struct ProbeArgs {
    #[command(flatten)]
    picker_args: PickerArgs,
}

#[derive(Debug, Serialize)]
struct ProbeReport<'a> {
    desktop: bool,
    invocations: &'a [Invocation],
    selected: Option<&'a Invocation>,
}

impl Run for ProbeArgs {
    fn run(&self, environment: &Environment) -> Result<()> {
        let options = self.picker_args.options(environment);
        let invocations = options.resolve_with(&PathLookup)?;
        let selected = select(&invocations, &options.context).ok();

        if self.picker_args.json {
            let report = ProbeReport {
                desktop: options.context.effective_desktop(),
                invocations: &invocations,
                selected,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        for invocation in &invocations {
            let marker = if selected == Some(invocation) { "*" } else { " " };
            println!("{marker} {invocation}");
        }
        if selected.is_none() {
            let mode = if options.context.effective_desktop() {
                "desktop"
            } else {
                "terminal"
            };
            println!("no {mode} picker available");
        }
        Ok(())
    }
}
