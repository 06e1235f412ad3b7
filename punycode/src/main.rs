//! Command-line interface for Punycode encoding/decoding.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use punycode::Punycode;
use tracing_subscriber::EnvFilter;

/// punycode - Convert Unicode strings to and from Punycode (RFC 3492)
#[derive(Parser, Debug)]
#[command(name = "punycode")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  punycode encode 'Bücher'
  punycode decode 'Bcher-kva'
  punycode -d _ encode 'étoile'
  echo 'München' | punycode encode")]
struct Args {
    /// Character separating the literal prefix from the digits
    #[arg(short, long, default_value_t = punycode::DEFAULT_DELIMITER, global = true)]
    delimiter: char,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode strings; reads stdin one per line when none are given
    Encode { inputs: Vec<String> },
    /// Decode Punycode strings; reads stdin one per line when none are given
    Decode { inputs: Vec<String> },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("PUNYCODE_LOG"))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let puny = Punycode::new().with_delimiter(args.delimiter);

    let (inputs, convert): (Vec<String>, fn(&Punycode, &str) -> punycode::Result<String>) =
        match args.command {
            Command::Encode { inputs } => (inputs, Punycode::encode),
            Command::Decode { inputs } => (inputs, Punycode::decode),
        };

    let result = if inputs.is_empty() {
        run_stdin(&puny, convert)
    } else {
        run_args(&puny, &inputs, convert)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_args(
    puny: &Punycode,
    inputs: &[String],
    convert: fn(&Punycode, &str) -> punycode::Result<String>,
) -> Result<(), String> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    for input in inputs {
        let output = convert(puny, input).map_err(|e| format!("'{}': {}", input, e))?;
        writeln!(stdout, "{}", output).map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn run_stdin(
    puny: &Punycode,
    convert: fn(&Punycode, &str) -> punycode::Result<String>,
) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("reading input: {}", e))?;
        let output = convert(puny, &line).map_err(|e| format!("'{}': {}", line, e))?;
        writeln!(stdout, "{}", output).map_err(|e| e.to_string())?;
    }

    Ok(())
}
