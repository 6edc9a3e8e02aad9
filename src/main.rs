use std::io;
use std::process::ExitCode;

use anyhow::Result;
use tracing::{Level, debug};

fn main() -> Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let level = if args.iter().any(|arg| arg == "-debug") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let invocation = score4_cli::parse_args(&args)?;
    debug!(board = %invocation.board.pretty(), "score4 starting");

    let outcome = score4_cli::run(invocation);
    outcome.report(&mut io::stdout().lock())?;

    Ok(if outcome.is_terminal() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
