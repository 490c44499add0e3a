//! Headless match-3 driver (default binary).
//!
//! Reads line-delimited JSON requests on stdin and writes one JSON response
//! per line on stdout. Diagnostics go to stderr.

use std::io;

use anyhow::{Context, Result};

use match3::adapter::{AdapterConfig, Driver};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AdapterConfig::from_env()
        .with_args(&args)
        .context("bad command line")?;
    config.validate().context("invalid configuration")?;

    let seed = config.seed.unwrap_or_else(rand::random::<u32>);
    eprintln!(
        "[match3] driver ready: {}x{} board, {} moves, policy={}, seed={}",
        config.width,
        config.height,
        config.max_moves,
        config.policy.as_str(),
        seed
    );

    let mut driver = Driver::new(config, seed);
    let stdin = io::stdin();
    let stdout = io::stdout();
    driver.run(stdin.lock(), stdout.lock())
}
