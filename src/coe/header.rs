use crate::constants::{RADIX_LINE, VECTOR_LINE};
use std::io::{self, Write};

/// Writes the radix declaration and the vector opener, one per line.
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{RADIX_LINE}")?;
    writeln!(out, "{VECTOR_LINE}")
}
