//! Entry point for gen-symtab.
//!
//! This file handles high-level application flow:
//! 1. Parse command-line arguments using `clap`.
//! 2. Set up logging on stderr; stdout may carry the generated source.
//! 3. Read the whole listing, building the table.
//! 4. Write the table.
//!
//! The output is only opened after the listing was read successfully, so a bad
//! listing never leaves a truncated output file behind.
//!
//! Error handling is done via `anyhow`.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use symtab::config::Config;
use symtab::emitter::Emitter;

fn main() -> Result<()> {
    let config = Config::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let filter = config.filter();
    if !filter.is_empty() {
        tracing::debug!("excluding prefixes: {:?}", filter.prefixes());
    }
    let mut emitter = Emitter::new(filter);

    // 1. Read the listing
    let input = config.input()?;
    emitter.read(input).context("failed to read symbol listing")?;

    // 2. Write the table
    let mut output = config.output()?;
    emitter
        .write(&mut output)
        .context("failed to write symbol table")?;

    Ok(())
}
