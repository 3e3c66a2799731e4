// Centralized magic numbers & default values
pub const SAMPLE_RATE_HZ: usize = 8000;
pub const MAX_SECONDS: usize = 28;
pub const MAX_SAMPLES: usize = SAMPLE_RATE_HZ * MAX_SECONDS;

pub const RADIX_LINE: &str = "memory_initialization_radix=16;";
pub const VECTOR_LINE: &str = "memory_initialization_vector=";
pub const SEPARATOR: &[u8] = b",\n";

pub const USAGE: &str = "Usage: file.raw audio.coe";
