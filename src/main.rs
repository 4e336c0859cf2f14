//! Hooks stdin/stdout up to a chat session.
//!
//! Every line read on stdin is typed into the input field and followed by
//! Enter. Every line appended to the log is printed on stdout. Diagnostics
//! go to stderr through `env_logger`, so set `RUST_LOG=debug` to see them.
//!
//!     wslog ws://127.0.0.1:8080/
//!     wslog --format stamped ws://127.0.0.1:8080/

use std::io;
use std::thread;

use clap::Parser;
use futures_channel::mpsc;

use wslog::{input::forward_lines, Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();
    let config = Config::parse();

    // Tokio's stdin is backed by a blocking read that can keep the runtime
    // from shutting down, so lines are read on a plain thread instead.
    let (stdin_tx, stdin_rx) = mpsc::unbounded();
    thread::spawn(move || forward_lines(io::stdin().lock(), stdin_tx));

    let mut stdout = tokio::io::stdout();
    wslog::run(&config, stdin_rx, &mut stdout).await?;
    Ok(())
}
