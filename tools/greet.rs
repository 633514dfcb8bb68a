/// Greet — prints the Sunvale story for the default name.
///
/// Usage: greet
use std::io::Write;
use std::process;
use sunvale_greeter::greet;
use tracing::Level;

fn main() {
    // stderr only, fixed level; stdout carries the story alone.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .try_init();

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", greet(None)).and_then(|()| stdout.flush()) {
        tracing::error!(error = %e, "failed to write story to stdout");
        process::exit(1);
    }
}
