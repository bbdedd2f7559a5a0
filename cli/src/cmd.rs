mod filter;
mod keys;
mod lines;
mod map;
mod probe;

use anyhow::Result;
use chooser::Environment;
use clap::Parser;
use clap::Subcommand;
use enum_dispatch::enum_dispatch;

use crate::args::GlobalArgs;

/// Pick from a list with whatever fuzzy finder or menu is installed
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    #[clap(flatten)]
    global_args: GlobalArgs,
}

/// Subcommands must implement [`Run`] to be executed at runtime.
#[enum_dispatch]
pub trait Run {
    fn run(&self, environment: &Environment) -> Result<()>;
}

#[enum_dispatch(Run)]
#[derive(Debug, Subcommand)]
enum Command {
    Lines(lines::LinesArgs),
    Map(map::MapArgs),
    Keys(keys::KeysArgs),
    Filter(filter::FilterArgs),
    Probe(probe::ProbeArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _guard = cli.global_args.init_tracing()?;

    let environment = Environment::from_env();

    cli.command.run(&environment)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use rstest::rstest;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(&["chooser", "lines", "a", "b"])]
    #[case(&["chooser", "map", "--json"])]
    #[case(&["chooser", "keys", "-d", "pick one"])]
    #[case(&["chooser", "filter", "--", "ls", "-la"])]
    #[case(&["chooser", "probe", "--force-desktop"])]
    fn parses(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_ok());
    }
}
