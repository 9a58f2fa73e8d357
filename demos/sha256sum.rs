//! Hash command-line arguments (or stdin) and print `<hex>  <label>`.
//!
//! Run with `cargo run --example sha256sum -- abc ""`. Set `RUST_LOG=trace`
//! to see every padded block rendered as a bit table.

use std::env;
use std::error::Error;
use std::io::{self, Read};

use sha256_engine::{TracingObserver, hash_observed};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing(Level::WARN);

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        let mut input = Vec::new();
        io::stdin().read_to_end(&mut input)?;
        let digest = hash_observed(&input, &mut TracingObserver)?;
        println!("{digest}  -");
        return Ok(());
    }

    for arg in &args {
        let digest = hash_observed(arg.as_bytes(), &mut TracingObserver)?;
        println!("{digest}  {arg:?}");
    }
    Ok(())
}

fn setup_tracing(level: Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}
