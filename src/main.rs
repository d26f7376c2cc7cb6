use std::{fs, process::ExitCode};

use clap::Parser;
use yardcalc::{Calculator, OperatorKind, PopPolicy, interpreter::operator::core::MULTIPLICATIVE_PRECEDENCE};

/// yardcalc evaluates arithmetic expressions such as `10 * -5 + 3.5`, one
/// expression per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells yardcalc to read expressions from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Registers `%` as the modulus operator.
    #[arg(short, long)]
    modulus: bool,

    /// Lets an operator pop every waiting operator that binds at least as
    /// tightly, instead of only one.
    #[arg(short, long)]
    exhaustive: bool,

    /// Prints the registered operators and their precedences.
    #[arg(short, long)]
    list_operators: bool,

    /// Logs each evaluation; repeat for per-stage detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(required_unless_present = "list_operators")]
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let policy = if args.exhaustive { PopPolicy::UntilLower } else { PopPolicy::Once };
    let mut calculator = Calculator::new().with_pop_policy(policy);

    if args.modulus
       && let Err(e) =
           calculator.define_operator('%', MULTIPLICATIVE_PRECEDENCE, OperatorKind::Modulus)
    {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    if args.list_operators {
        for (symbol, operator) in calculator.operators().iter() {
            println!("{symbol}  precedence {}", operator.precedence);
        }
    }

    let Some(contents) = args.contents else {
        return ExitCode::SUCCESS;
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let mut failed = false;
    for expr in script.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match calculator.solve(expr) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{expr}: {e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{
        filter::{LevelFilter, Targets},
        fmt,
        prelude::*,
    };

    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                    .with_filter(Targets::new().with_default(LevelFilter::WARN)
                                                                               .with_target("yardcalc", level)))
                                  .init();
}
