use crate::coe::header::write_header;
use crate::constants::{MAX_SAMPLES, RADIX_LINE, SEPARATOR, VECTOR_LINE};
use std::io::{self, Write};
use tracing::debug;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";
const HEADER_LEN: usize = RADIX_LINE.len() + VECTOR_LINE.len() + 2;

/// Number of leading samples that make it into the vector.
#[inline]
pub fn effective_count(len: usize) -> usize {
    len.min(MAX_SAMPLES)
}

/// Lowercase, zero-padded hex digits for one sample.
#[inline]
pub fn hex_token(byte: u8) -> [u8; 2] {
    [
        HEX_DIGITS[(byte >> 4) as usize],
        HEX_DIGITS[(byte & 0x0f) as usize],
    ]
}

/// Streams the COE text for `samples` into `out` and returns how many
/// samples were written. Anything past `MAX_SAMPLES` is dropped silently.
pub fn write_coe<W: Write>(
    samples: &[u8],
    out: &mut W,
) -> io::Result<usize> {
    write_header(out)?;
    let count = effective_count(samples.len());
    if count < samples.len() {
        debug!(
            "truncating {} samples to {}",
            samples.len(),
            count
        );
    }
    for &byte in &samples[..count] {
        out.write_all(&hex_token(byte))?;
        out.write_all(SEPARATOR)?;
    }
    Ok(count)
}

/// Same output as [`write_coe`], collected into a `String`.
pub fn render_coe(samples: &[u8]) -> io::Result<String> {
    let mut buf = Vec::with_capacity(HEADER_LEN + effective_count(samples.len()) * 4);
    write_coe(samples, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
