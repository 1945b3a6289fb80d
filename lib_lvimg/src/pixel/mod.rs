pub mod codec;
pub mod format;

pub use codec::{decode_pixel, decode_wire, encode_grid, encode_pixel};
pub use format::{Dimensions, Pixel, PixelGrid};
