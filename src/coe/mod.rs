pub mod header;
pub mod transcode;

pub use transcode::{effective_count, hex_token, render_coe, write_coe};
