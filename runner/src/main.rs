use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rtl8::{Interpreter, StdoutSink};
use tracing::Level;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Print the register file after the program finishes
    YesOutput,
    /// Skip the final register dump
    NoOutput,
}

#[derive(Parser, Debug)]
#[command(version, about = "Run an 8-bit register-transfer program", long_about = None)]
struct Args {
    /// Program source file
    source: PathBuf,

    /// Whether to dump registers at the end
    #[arg(value_enum, default_value_t = Mode::YesOutput)]
    mode: Mode,

    /// Print a listing of parsed lines before running
    #[arg(long)]
    listing: bool,

    /// Save the listing to this file
    #[arg(long, value_name = "PATH")]
    listing_file: Option<PathBuf>,

    /// One of `TRACE`, `DEBUG`, `INFO`, `WARN`, or `ERROR`
    #[arg(short, long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("{e:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let source = fs::read_to_string(&args.source)
        .with_context(|| format!("cannot open file {}", args.source.display()))?;

    if args.listing {
        rtl8::print_listing(&source)?;
    }
    if let Some(path) = &args.listing_file {
        rtl8::save_listing(&source, path)
            .with_context(|| format!("cannot write listing {}", path.display()))?;
        tracing::info!("listing saved to {}", path.display());
    }

    let mut vm = Interpreter::new(StdoutSink::stdout());
    let summary = vm.run_source(&source);
    tracing::info!(
        lines = summary.lines,
        executed = summary.executed,
        failures = summary.failures,
        "done"
    );

    if args.mode == Mode::YesOutput {
        print!("{}", vm.state());
    }
    Ok(())
}
