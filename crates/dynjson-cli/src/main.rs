use std::io::Read as _;
use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use dynjson_core::{Destination, TokenBuffer, decode_value};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "dynjson-cli",
    about = "Decode JSON token-record streams into dynamic values printed as JSON",
    version
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Decode a token-record stream and print the value as JSON
    Decode(DecodeArgs),
    /// Decode a token-record stream and report only success or failure
    Check(DecodeArgs),
}

#[derive(ClapArgs, Debug)]
struct DecodeArgs {
    /// Token-record file (JSONL, one token per line), or '-' for stdin
    path: PathBuf,
    /// Print compact JSON instead of pretty-printed
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Decode(a) => cmd_decode(a, true),
        Cmd::Check(a) => cmd_decode(a, false),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_decode(args: DecodeArgs, print_value: bool) {
    let tokens = load_tokens(&args.path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    });
    tracing::debug!(count = tokens.len(), "loaded token records");
    let mut buf = TokenBuffer::new(tokens);
    match decode_value(&mut buf, &Destination::dynamic_bag()) {
        Ok(value) => {
            if print_value {
                let json = value.to_json();
                let rendered = if args.compact {
                    serde_json::to_string(&json)
                } else {
                    serde_json::to_string_pretty(&json)
                };
                match rendered {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("error rendering JSON: {}", e);
                        std::process::exit(4);
                    }
                }
            } else {
                println!("ok");
            }
        }
        Err(e) => {
            eprintln!("decode error: {}", e);
            std::process::exit(3);
        }
    }
}

fn load_tokens(path: &Path) -> Result<Vec<dynjson_core::Token>, dynjson_core::RecordError> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        dynjson_core::read_tokens(input.as_bytes())
    } else {
        dynjson_core::read_tokens_file(path)
    }
}
