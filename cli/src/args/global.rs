use std::any::Any;
use std::fs::OpenOptions;
use std::io::IsTerminal;

use anyhow::Context;
use anyhow::Result;
use camino::Utf8PathBuf;
use chooser::util::dirs;
use clap::Args;
use tracing::debug;
use tracing_appender::non_blocking;
use tracing_glog::Glog;
use tracing_glog::GlogFields;
use tracing_glog::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::Registry;

const HEADING: Option<&str> = Some("Global Options");

/// Global arguments that apply to every subcommand.
#[derive(Debug, Args, Clone)]
pub struct GlobalArgs {
    /// Filter directive for stderr logs
    #[clap(long, env = "RUST_LOG", default_value = "error", help_heading = HEADING, global = true)]
    pub log_level: String,

    /// Filter directive for log file
    #[clap(long, default_value = "chooser=debug,chooser_cli=debug", help_heading = HEADING, global = true)]
    pub file_level: String,

    /// Data directory. Defaults to `$XDG_DATA_HOME/chooser` if unset
    #[clap(long, help_heading = HEADING, global = true)]
    pub data_dir: Option<Utf8PathBuf>,
}

/// Guard holder for [`tracing`] things that need to live until the end of the
/// program.
#[derive(Debug, Default)]
pub struct TracingGuard {
    guards: Vec<Box<dyn Any>>,
}

impl GlobalArgs {
    /// Initializes all [`tracing`] config.
    pub fn init_tracing(&self) -> Result<TracingGuard> {
        let mut guard = TracingGuard::default();

        // Pickers draw on the terminal too, so stderr only gets errors unless
        // asked otherwise. The log file gets the full story.
        let stderr_filter = EnvFilter::builder().parse_lossy(&self.log_level);
        let stderr_layer = tracing_subscriber::fmt::layer()
            .event_format(Glog::default().with_timer(LocalTime::default()))
            .fmt_fields(GlogFields::default())
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .with_filter(stderr_filter);

        let log_file_path = self.data_dir()?.join("last.log");
        let log_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file_path)
            .context("unable to create log file")?;
        let (file_writer, file_writer_guard) = non_blocking(log_file);
        let file_filter = EnvFilter::builder().parse_lossy(&self.file_level);
        let file_layer = tracing_subscriber::fmt::layer()
            .event_format(Glog::default().with_timer(LocalTime::default()))
            .fmt_fields(GlogFields::default())
            .with_ansi(false)
            .with_writer(file_writer)
            .with_filter(file_filter);
        guard.guards.push(Box::new(file_writer_guard));

        let subscriber = Registry::default().with(stderr_layer).with(file_layer);
        tracing::subscriber::set_global_default(subscriber)?;

        debug!(%log_file_path, "Initialized tracing");

        Ok(guard)
    }

    fn data_dir(&self) -> Result<Utf8PathBuf> {
        if let Some(dir) = &self.data_dir {
            std::fs::create_dir_all(dir).context("unable to create data dir")?;
            return Ok(dir.clone());
        }
        let dir = dirs::data_dir("chooser").context("unable to get data dir")?;
        Utf8PathBuf::try_from(dir).context("data dir is not valid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::try_from(tmp.path().join("nested/chooser")).unwrap();
        let args = GlobalArgs {
            log_level: "error".to_owned(),
            file_level: "debug".to_owned(),
            data_dir: Some(dir.clone()),
        };
        assert_eq!(args.data_dir().unwrap(), dir);
        assert!(dir.is_dir());
    }
}
