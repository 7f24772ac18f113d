//! Symbol table generation.
//!
//! The `Emitter` drives a symbol listing through the generation steps:
//! 1. Split: lines without exactly four single-space separated fields are dropped.
//! 2. Filter: names the configured `SymbolFilter` excludes are dropped.
//! 3. Validate: address/size must be hex, kind a single character (fatal otherwise).
//! 4. Collect: the record is rendered and appended to the `SymbolTable`.
//! 5. Output: once the whole input is consumed, the table is written as C source.

use std::io::{BufRead, Write};

use crate::error::{SymtabError, SymtabResult};
use crate::filter::SymbolFilter;
use crate::symbol::{split_fields, SymbolRecord};
use crate::table::SymbolTable;
use crate::writer;

/// Counts of lines seen by an `Emitter`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub lines: usize,
    pub retained: usize,
    pub malformed: usize,
    pub excluded: usize,
}

pub struct Emitter<F: SymbolFilter> {
    filter: F,
    table: SymbolTable,
    stats: Stats,
}

impl<F: SymbolFilter> Emitter<F> {
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            table: SymbolTable::new(),
            stats: Stats::default(),
        }
    }

    /// Process the next listing line.
    ///
    /// Malformed and excluded lines are skipped without error; only a
    /// well-formed, retained line with bad field contents fails.
    pub fn add_line(&mut self, line: &str) -> SymtabResult<()> {
        self.stats.lines += 1;

        let Some(fields) = split_fields(line) else {
            self.stats.malformed += 1;
            return Ok(());
        };

        if self.filter.excludes(fields[3]) {
            self.stats.excluded += 1;
            return Ok(());
        }

        let record = SymbolRecord::from_fields(self.stats.lines, fields)?;
        self.table.push(&record);
        self.stats.retained += 1;
        Ok(())
    }

    /// Consume a whole listing.
    ///
    /// Lines are split on `\n` only; a trailing `\r` is stripped with the
    /// rest of the surrounding whitespace.
    pub fn read<R: BufRead>(&mut self, mut reader: R) -> SymtabResult<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = std::str::from_utf8(&buf).map_err(|_| SymtabError::InvalidUtf8 {
                line: self.stats.lines + 1,
            })?;
            self.add_line(line)?;
        }
        tracing::info!(
            lines = self.stats.lines,
            retained = self.stats.retained,
            malformed = self.stats.malformed,
            excluded = self.stats.excluded,
            "symbol listing read"
        );
        Ok(())
    }

    /// Write the collected table as C source.
    pub fn write<W: Write + ?Sized>(&self, out: &mut W) -> SymtabResult<()> {
        tracing::debug!("writing {} symbols", self.table.len());
        writer::write_table(out, &self.table)?;
        Ok(())
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }
}
