use anyhow::Result;
use clap::Parser;
use srcprobe::cli::Cli;
use std::process::ExitCode;
use tracing::Level;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Reports go to stdout, so logs stay on stderr
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    srcprobe::cli::run_cli(cli)
}
