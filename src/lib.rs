pub mod cli;
pub mod coe;
pub mod config;
pub mod constants;
pub mod io;
pub mod pipeline;

pub use coe::{effective_count, hex_token, render_coe, write_coe};
pub use pipeline::Pipeline;
