//! Configuration module.
//!
//! This module defines the command-line interface (CLI) for the generator using `clap`.
//! It handles selecting input/output streams and building the symbol filter.
//! Run without arguments, it reads stdin, writes stdout and filters nothing.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::filter::prefix::PrefixFilter;

/// Generate a kernel symbol table from an `nm -S` style listing.
///
/// Each input line must be `<address> <size> <kind> <name>`, separated by single
/// spaces. The output is a C fragment declaring `symbol_table` and
/// `symbol_table_size`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Symbol listing to read
    #[arg(short, long, help = "Read the listing from a file instead of stdin")]
    pub input: Option<PathBuf>,

    /// Generated C source
    #[arg(short, long, help = "Write the table to a file instead of stdout")]
    pub output: Option<PathBuf>,

    /// Name prefixes to leave out of the table
    #[arg(
        long = "exclude-prefix",
        value_name = "PREFIX",
        help = "Drop symbols whose name starts with PREFIX (repeatable)"
    )]
    pub exclude_prefixes: Vec<String>,

    /// Drop GCC nested-function labels
    #[arg(long, help = "Drop compiler-generated nested-function labels (__func__.*)")]
    pub skip_nested_functions: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", help = "Set the logging level")]
    pub log_level: String,
}

impl Config {
    /// Open the listing stream.
    pub fn input(&self) -> Result<Box<dyn BufRead>> {
        Ok(match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                Box::new(BufReader::new(file))
            }
            None => Box::new(io::stdin().lock()),
        })
    }

    /// Open the output stream. A file is created or truncated.
    pub fn output(&self) -> Result<Box<dyn Write>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout().lock())),
        })
    }

    /// Build the exclusion filter from the command line.
    pub fn filter(&self) -> PrefixFilter {
        let mut filter = if self.skip_nested_functions {
            PrefixFilter::nested_functions()
        } else {
            PrefixFilter::default()
        };
        for prefix in &self.exclude_prefixes {
            filter.push(prefix.as_str());
        }
        filter
    }
}
