#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};

pub const HEADER: &str = "memory_initialization_radix=16;\nmemory_initialization_vector=\n";

/// Builds a fixture dir holding `clip.raw` with the given samples.
pub fn raw_fixture(samples: &[u8]) -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("clip.raw").write_binary(samples).unwrap();
    td
}

/// Data lines of a COE text, header stripped.
pub fn data_lines(coe: &str) -> Vec<&str> {
    coe.strip_prefix(HEADER)
        .expect("missing COE header")
        .lines()
        .collect()
}
