//! The primegen CLI tool

mod util;

use clap::{CommandFactory, Parser, Subcommand};
use env_logger::fmt::Color;
use env_logger::{Builder, Target};
use itertools::Itertools;
use log::{Level, LevelFilter};

use primegen::{Algorithm, Mismatch, PrimeGenerator};

use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "primegen", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prints all primes up to and including the given limit.
    Generate {
        /// Upper bound (inclusive)
        #[arg(allow_negative_numbers = true)]
        limit: i64,

        /// The algorithm to use
        #[arg(short, long)]
        #[arg(default_value_t = Algorithm::Eratosthenes)]
        #[arg(value_parser = clap_enum_variants!(Algorithm))]
        algorithm: Algorithm,

        /// Only print the number of primes found.
        #[arg(short, long)]
        #[arg(default_value_t = false)]
        count: bool,

        /// Separator placed between the printed primes.
        #[arg(short, long)]
        #[arg(default_value_t = String::from(","))]
        separator: String,
    },
    /// Runs every algorithm up to the given limit and checks that they agree.
    Compare {
        /// Upper bound (inclusive)
        #[arg(allow_negative_numbers = true)]
        limit: i64,
    },
    /// Tells whether the given value is a power of two.
    PowerOfTwo {
        /// Value to check, must be positive
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
}

fn main() -> Result<(), io::Error> {
    let args = Cli::parse();

    let mut builder = Builder::new();
    builder
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stdout)
        .format(|buf, record| {
            let mut style = buf.style();
            match record.level() {
                Level::Error => {
                    style.set_color(Color::Red);
                }
                Level::Warn => {
                    style.set_color(Color::Yellow);
                }
                _ => {}
            }

            writeln!(buf, "{}", style.value(record.args()))
        })
        .init();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        Ok(())
    } else if let Some(command) = args.command {
        if let Err(errors) = run_command(command, &mut io::stdout().lock()) {
            report_and_exit(errors);
        }
        Ok(())
    } else {
        Cli::command().print_help()
    }
}

#[allow(clippy::print_stderr)]
fn report_and_exit(errors: Vec<String>) -> ! {
    for error in errors {
        eprintln!("{error}");
    }
    std::process::exit(1);
}

fn run_command(command: Commands, out: &mut impl Write) -> Result<(), Vec<String>> {
    let generator = PrimeGenerator::new();
    match command {
        Commands::Generate {
            limit,
            algorithm,
            count,
            separator,
        } => generate(&generator, algorithm, limit, count, &separator, out),
        Commands::Compare { limit } => compare(&generator, limit, out),
        Commands::PowerOfTwo { value } => {
            let result =
                primegen::primes::is_power_of_two(value).map_err(|e| vec![e.to_string()])?;
            writeln!(out, "{result}").map_err(|e| vec![e.to_string()])
        }
    }
}

fn generate(
    generator: &PrimeGenerator,
    algorithm: Algorithm,
    limit: i64,
    count: bool,
    separator: &str,
    out: &mut impl Write,
) -> Result<(), Vec<String>> {
    let primes = generator
        .run(algorithm, limit)
        .map_err(|e| vec![e.to_string()])?
        .primes;

    let written = if count {
        writeln!(out, "{}", primes.len())
    } else {
        writeln!(out, "{}", primes.iter().join(separator))
    };
    written.map_err(|e| vec![e.to_string()])
}

fn compare(
    generator: &PrimeGenerator,
    limit: i64,
    out: &mut impl Write,
) -> Result<(), Vec<String>> {
    let runs = generator.run_all(limit).map_err(|e| vec![e.to_string()])?;
    for run in &runs {
        writeln!(
            out,
            "{:<16}{:>10} primes in {:.2?}",
            run.algorithm.to_string(),
            run.primes.len(),
            run.elapsed
        )
        .map_err(|e| vec![e.to_string()])?;
    }

    let mismatches = generator
        .cross_check(limit)
        .map_err(|e| vec![e.to_string()])?;
    check_agreement(limit, mismatches)
}

/// Turns the disagreements found by the cross check into CLI errors.
fn check_agreement(limit: i64, mismatches: Vec<Mismatch>) -> Result<(), Vec<String>> {
    if mismatches.is_empty() {
        log::info!("All algorithms agree up to {limit}.");
        Ok(())
    } else {
        Err(mismatches.iter().map(Mismatch::to_string).collect())
    }
}
