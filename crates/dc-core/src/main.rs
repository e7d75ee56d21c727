//! Decision Cognizant Core - divergence scores for paired vector files
//!
//! The main entry point for dc-core, handling:
//! - Pairing two probability vector files line by line
//! - Scoring each pair with a selected divergence measure
//! - Writing one value per pair and reporting run accounting

use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

use dc_common::{Measure, OutputFormat};
use dc_core::compare::{compare_files, CompareOptions};
use dc_core::error::format_error_human;
use dc_core::exit_codes::ExitCode;
use dc_core::logging::init_logging;
use dc_core::output::render_report;

/// Decision Cognizant Core - divergence scores for classifier output distributions
#[derive(Parser)]
#[command(name = "dc-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format for the run report
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two probability vector files with a divergence measure
    Compare(CompareArgs),

    /// List the available divergence measures
    Measures,

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// File with one reference vector per line
    vectors1: PathBuf,

    /// File with one comparison vector per line
    vectors2: PathBuf,

    /// Divergence measure to apply
    #[arg(long, short = 'm', env = "DC_MEASURE")]
    measure: Measure,

    /// Output file (defaults to <VECTORS1>.div)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Skip pairs that fail to parse or validate instead of aborting
    #[arg(long)]
    skip_invalid: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose, cli.global.quiet, cli.global.no_color);

    let code = match cli.command {
        Commands::Compare(args) => run_compare_command(&args, &cli.global),
        Commands::Measures => {
            print_measures();
            ExitCode::Clean
        }
        Commands::Version => {
            println!("dc-core {}", env!("CARGO_PKG_VERSION"));
            ExitCode::Clean
        }
    };

    std::process::exit(code.as_i32());
}

fn run_compare_command(args: &CompareArgs, global: &GlobalOpts) -> ExitCode {
    let opts = CompareOptions {
        measure: args.measure,
        skip_invalid: args.skip_invalid,
    };

    match compare_files(&args.vectors1, &args.vectors2, args.output.as_deref(), &opts) {
        Ok(report) => {
            println!("{}", render_report(&report, global.format));
            if report.pairs_skipped > 0 {
                ExitCode::PartialFail
            } else {
                ExitCode::Clean
            }
        }
        Err(err) => {
            let use_color = !global.no_color && std::io::stderr().is_terminal();
            eprintln!("{}", format_error_human(&err, use_color));
            err.exit_code()
        }
    }
}

fn print_measures() {
    println!("Available divergence measures:");
    for measure in Measure::ALL {
        println!("\t{} - {}", measure, measure.description());
    }
}
