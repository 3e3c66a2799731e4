use clap::Parser;
use std::{ffi::OsString, path::PathBuf};

/// Every argument is positional; hyphen-led values are taken as paths.
#[derive(Parser, Debug)]
#[command(name = "raw2coe")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(
    about = "Convert raw 8-bit audio samples into a hex memory-initialization (.coe) file, \
                   keeping at most 28 seconds at 8 kHz."
)]
pub struct Cli {
    /// Raw sample file to read.
    #[arg(allow_hyphen_values = true)]
    pub input: Option<PathBuf>,

    /// COE file to write.
    #[arg(allow_hyphen_values = true)]
    pub output: Option<PathBuf>,

    /// Anything after the output path is ignored.
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<OsString>,
}
