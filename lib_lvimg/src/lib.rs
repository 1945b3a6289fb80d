pub mod constants;
pub mod emit;
pub mod error;
pub mod extract;
pub mod pixel;
pub mod source;

use std::io::Write;

pub use crate::emit::{emit, emit_file, Emission};
pub use crate::error::LvImgError;
pub use crate::extract::{extract, extract_file, Diagnostics, Extraction};
pub use crate::pixel::{Dimensions, Pixel, PixelGrid};
pub use crate::source::ParseError;

/// Logs to stderr. `RUST_LOG` overrides the default `lib_lvimg=info` filter.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("lib_lvimg=info"))
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
