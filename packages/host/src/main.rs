//! Entry point for the stdio host bridge.
//!
//! The editor spawns this binary as a child process and speaks the
//! line-delimited JSON protocol over its stdin/stdout. Logs go to stderr
//! so they never mix with protocol traffic.

mod bridge;
mod protocol;

use clap::Parser;
use pyformat_formatters::SystemRunner;
use tracing_subscriber::EnvFilter;

/// Stdio bridge exposing the Python formatting commands to an editor.
#[derive(Parser, Debug)]
#[command(name = "pyformat-host")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log filter, e.g. "info" or "pyformat_editor=debug"
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    bridge::run(stdin.lock(), stdout.lock(), &SystemRunner)?;
    Ok(())
}
