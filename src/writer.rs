//! C source writer.
//!
//! This module writes the final symbol table fragment. The header path and the
//! section annotation belong to the kernel tree (`struct symbol` and the
//! `__symtab` attribute are declared in `kern/symbols.h`) and must match it.

use std::io::{self, Write};

use crate::table::SymbolTable;

/// Header declaring `struct symbol` and `__symtab`.
pub const SYMBOLS_HEADER: &str = "kern/symbols.h";
/// Attribute placing both declarations in the symbol table linker section.
pub const SECTION_ANNOTATION: &str = "__symtab";

const INDENT: &str = "    ";

/// Write the table as a C fragment.
///
/// Every entry is followed by a comma, the last one included.
pub fn write_table<W: Write + ?Sized>(out: &mut W, table: &SymbolTable) -> io::Result<()> {
    writeln!(out, "#include <{}>", SYMBOLS_HEADER)?;
    writeln!(
        out,
        "int symbol_table_size {} = {};",
        SECTION_ANNOTATION,
        table.len()
    )?;
    writeln!(out, "struct symbol symbol_table[] {} = {{", SECTION_ANNOTATION)?;
    for entry in table.entries() {
        writeln!(out, "{}{},", INDENT, entry)?;
    }
    writeln!(out, "}};")?;
    out.flush()
}
