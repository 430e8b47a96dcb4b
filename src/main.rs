use clap::{ArgAction, Parser};
use stackwick::parse;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Parse a Newick string and print it in canonical form.
#[derive(Debug, Parser)]
#[command(name = "stackwick")]
struct Cli {
    /// Newick string to parse
    #[arg(default_value = "(A, (B, C))")]
    newick: String,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    match parse(&cli.newick) {
        Ok(tree) => {
            println!("{tree}");
            println!("leaves: {}, depth: {}", tree.num_leaves(), tree.depth());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "stackwick=warn",
        1 => "stackwick=debug",
        _ => "stackwick=trace",
    }
}
