//! Runs the round-robin collaboration pipeline over a workspace checklist.
//!
//! Usage:
//!
//! ```text
//! atelier [--cycles <N>] [--root <DIR>] [--document <NAME>] [--format text|json]
//! ```
//!
//! Every option can also be supplied through its `ATELIER_*` environment
//! variable. The report goes to stdout; logs go to stderr and honour
//! `RUST_LOG`.

use atelier::board::adapters::filesystem::FilesystemWorkspace;
use atelier::config::{ConfigError, DEFAULT_DOCUMENT, DEFAULT_ROOT, OutputFormat, RunSettings};
use atelier::pipeline::services::{CycleBudget, run_round_robin};
use atelier::report::write_report;
use atelier::telemetry::init_tracing;
use camino::Utf8PathBuf;
use clap::Parser;
use mockable::DefaultClock;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::Level;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Parser)]
#[command(
    name = "atelier",
    version,
    about = "Run the round-robin multi-agent collaboration loop over a checklist"
)]
struct Cli {
    /// Number of full round-robin cycles to execute (values below 1 run once).
    #[arg(
        long,
        env = "ATELIER_CYCLES",
        default_value_t = i64::from(CycleBudget::DEFAULT.get()),
        allow_negative_numbers = true
    )]
    cycles: i64,

    /// Workspace root containing the checklist document.
    #[arg(long, env = "ATELIER_ROOT", default_value = DEFAULT_ROOT)]
    root: Utf8PathBuf,

    /// Checklist document, relative to the workspace root.
    #[arg(long, env = "ATELIER_DOCUMENT", default_value = DEFAULT_DOCUMENT)]
    document: String,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Default log level when `RUST_LOG` is unset.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    /// Validates the parsed options into run settings.
    fn into_settings(self) -> Result<RunSettings, ConfigError> {
        RunSettings::new(
            self.root,
            &self.document,
            CycleBudget::new(self.cycles),
            self.format,
        )
    }
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    init_tracing(cli.log_json, cli.log_level);

    let settings = cli.into_settings()?;
    let workspace = FilesystemWorkspace::open(settings.root())?;
    tracing::info!(
        root = %workspace.root(),
        document = settings.document(),
        cycles = settings.cycles().get(),
        "workspace opened"
    );
    let run = run_round_robin(
        &workspace,
        settings.document(),
        settings.cycles(),
        Arc::new(DefaultClock),
    );

    let mut out = io::stdout().lock();
    write_report(&run, settings.format(), &mut out)?;
    out.flush()?;
    Ok(())
}
