use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use incrementable::core::check::run_checks;
use incrementable::Error;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Integer value to double-increment
    #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
    start: i32,
    /// Write JSON logs to a daily rolling file in this directory instead of stderr
    #[arg(short, long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = parse_command_line_args();

    match run(args) {
        Ok(()) => {
            eprintln!("PASSED");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn parse_command_line_args() -> Args {
    Args::parse()
}

fn run(args: Args) -> Result<(), Error> {
    let _guard = init_tracing(args.log_dir.as_deref())?;

    let report = run_checks(args.start)?;
    tracing::info!("All checks passed: {:?}", report);

    Ok(())
}

fn init_tracing(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>, Error> {
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (writer, guard) = match log_dir {
        Some(dir) => {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("trace.log")
                .build(dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, writer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()?;

    Ok(guard)
}
