use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// `<level> <module>: <fields>`, e.g. `debug registry: adding employee id=4`.
pub struct RosterFormatter;

impl<S, N> FormatEvent<S, N> for RosterFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} {}: ",
            level_label(meta.level()),
            module_label(meta.target()).dimmed()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_label(level: &Level) -> ColoredString {
    match *level {
        Level::ERROR => "error".red().bold(),
        Level::WARN => "warn".yellow().bold(),
        Level::INFO => "info".green(),
        Level::DEBUG => "debug".blue(),
        Level::TRACE => "trace".dimmed(),
    }
}

/// Strips the crate prefix so registry events read as `registry`, shell events as `cli::commands`.
fn module_label(target: &str) -> &str {
    target.strip_prefix("roster::").unwrap_or(target)
}

fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    // A subscriber may already be set (e.g. in tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(RosterFormatter)
        .try_init();
}
