#![allow(unused)]

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fetch::Fetcher;

mod fetch;
mod http;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_ansi(std::io::stdin().is_terminal())
        .with_env_filter(filter)
        .init();

    Fetcher::new()?.run()
}
