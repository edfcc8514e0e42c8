use crate::{commands::Commands, error::CliError};
use clap::Parser;
use ql_planner::{FieldValidator, FilterCompiler, FilterConfig, operator::BUILTIN_OPERATORS};
use ql_syntax::{Clause, tokenize};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser, Debug)]
#[command(name = "ql", version, about = "Compile filter expressions into SQL predicates")]
struct Cli {
    #[arg(short, long, global = true, help = "Log at debug level unless RUST_LOG is set")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compile {
            filter,
            config,
            compact,
        } => {
            let config = match config {
                Some(path) => {
                    debug!("Loading filter config from {path}");
                    FilterConfig::from_path(&path)?
                }
                None => FilterConfig::default(),
            };

            let policy = config.policy();
            let compiler = FilterCompiler::new().limits(config.limits);
            let compiled = compiler.compile(
                &filter,
                policy.as_ref().map(|p| p as &dyn FieldValidator),
            )?;

            output::print_json(&compiled, compact)?;
        }
        Commands::Tokenize { filter, compact } => {
            let clauses: Vec<Clause> = tokenize(&filter).collect();
            output::print_json(&clauses, compact)?;
        }
        Commands::Operators => {
            for name in BUILTIN_OPERATORS.names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
