// ============================================================================
// decimal-add
// Adds a fixed numeral to every line of a file and prints the exact sums
// ============================================================================

use clap::Parser;
use decimal_strings::prelude::*;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Exact decimal addition for every line of a file
#[derive(Parser, Debug)]
#[command(name = "decimal-add")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file, one numeral per line
    file: PathBuf,

    /// Numeral added to each valid line
    #[arg(short, long, default_value = DEFAULT_ADDEND, allow_hyphen_values = true)]
    addend: String,

    /// Echo each accepted line in canonical form
    #[arg(long)]
    canonical: bool,

    /// Report blank lines as invalid instead of skipping them
    #[arg(long)]
    keep_blank_lines: bool,

    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

impl Cli {
    fn driver_config(&self) -> DriverConfig {
        let echo_mode = if self.canonical {
            EchoMode::Canonical
        } else {
            EchoMode::Raw
        };
        DriverConfig::new()
            .with_addend(self.addend.clone())
            .with_skip_blank_lines(!self.keep_blank_lines)
            .with_echo_mode(echo_mode)
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let processor = match LineProcessor::new(cli.driver_config(), Arc::new(LoggingEventHandler)) {
        Ok(processor) => processor,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        },
    };

    let file = match File::open(&cli.file) {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!(error = %e, "open failed");
            eprintln!("Error: Could not open file '{}'", cli.file.display());
            return ExitCode::FAILURE;
        },
    };

    match processor.process(BufReader::new(file), io::stdout().lock()) {
        Ok(summary) => {
            tracing::info!(lines = summary.total(), "done");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
