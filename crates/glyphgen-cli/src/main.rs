use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use glyphgen_generate::{
    GenerateRequest, GenerationError, generate_request, generate_request_with, seeded_rng,
};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read request: {0}")]
    Io(#[from] io::Error),
    #[error("invalid request: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

#[derive(Parser, Debug)]
#[command(name = "glyphgen", version, about = "Random strings from code point ranges")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate strings from a JSON request.
    Gen(GenArgs),
}

#[derive(Args, Debug)]
struct GenArgs {
    /// Request file, or `-` for stdin.
    #[arg(value_name = "REQUEST")]
    request: PathBuf,
    /// Override the request's length.
    #[arg(long)]
    length: Option<i64>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of strings to generate.
    #[arg(long, default_value_t = 1)]
    count: u32,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Gen(args) => run_gen(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_gen(args: GenArgs) -> Result<(), CliError> {
    let raw = if args.request.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&args.request)?
    };

    let mut request: GenerateRequest = serde_json::from_str(&raw)?;
    if let Some(length) = args.length {
        request.length = Some(serde_json::Value::from(length));
    }
    debug!(count = args.count, seed = ?args.seed, "generating");

    match args.seed {
        Some(seed) => {
            let mut rng = seeded_rng(seed);
            for _ in 0..args.count {
                println!("{}", generate_request_with(&request, &mut rng)?);
            }
        }
        None => {
            for _ in 0..args.count {
                println!("{}", generate_request(&request)?);
            }
        }
    }

    Ok(())
}
