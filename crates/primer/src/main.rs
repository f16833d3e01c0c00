use clap::Parser;
use primer_support::logging::{init_logging, LogLevel};
use std::io::{self, Write};
use std::process::{ExitCode, Termination};
use tracing::info;

/// Application configuration.
#[derive(clap::Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// The demo to run. Runs every demo when omitted.
    #[command(subcommand)]
    subcommand: Option<Subcommand>,

    /// The global options.
    #[clap(flatten)]
    global: GlobalArgs,
}

/// Global configuration options.
#[derive(clap::Args, Debug)]
struct GlobalArgs {
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[arg(long = "debug", global = true)]
    debug: bool,

    /// Line width used when pretty printing records.
    #[arg(
        long = "columns",
        default_value_t = primer_support::COLUMNS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(1..=primer_support::MAX_COLUMNS as u64),
        global = true
    )]
    columns: usize,
}

/// The demos.
#[derive(clap::Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Subcommand {
    /// Value and reference parameters, variadic arguments, multiple results.
    Function,
    /// A record with exported and internal fields.
    Record,
    /// Every demo, in order.
    All,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = init_logging(LogLevel::from_flags(args.global.verbose, args.global.debug)) {
        eprintln!("{err}");
    }
    info!(?args, "starting");

    let subcommand = args.subcommand.unwrap_or(Subcommand::All);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args.global, subcommand, &mut out).report()
}

fn run<W: Write>(global: &GlobalArgs, subcommand: Subcommand, out: &mut W) -> anyhow::Result<()> {
    match subcommand {
        Subcommand::Function => cmd_function(out),
        Subcommand::Record => cmd_record(global, out),
        Subcommand::All => {
            cmd_function(out)?;
            cmd_record(global, out)
        }
    }
}

fn cmd_function<W: Write>(out: &mut W) -> anyhow::Result<()> {
    primer_function::run(out)?;
    out.flush()?;
    Ok(())
}

fn cmd_record<W: Write>(global: &GlobalArgs, out: &mut W) -> anyhow::Result<()> {
    primer_record::run(out, global.columns)?;
    out.flush()?;
    Ok(())
}
