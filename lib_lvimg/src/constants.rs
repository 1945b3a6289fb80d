/// Extension of generated C sources.
pub const SOURCE_EXT: &str = "c";
/// Extension of extracted raster images.
pub const RASTER_EXT: &str = "png";
/// Source read by the extractor when no input is given.
pub const DEFAULT_SOURCE_FILE: &str = "img_star.c";

/// Opens the pixel data of the 32-bit color depth variant.
pub const PAYLOAD_START_MARKER: &str = "LV_COLOR_DEPTH == 32";
/// Closes the pixel data region.
pub const PAYLOAD_END_MARKER: &str = "#endif";

pub const BYTES_PER_PIXEL: usize = 4;
pub const BYTES_PER_LINE: usize = 16;

/// RGB color reserved as the transparent marker.
pub const CHROMA_KEY: [u8; 3] = [0, 255, 0];
/// Black pixels with alpha below this are written out as the chroma key.
pub const CHROMA_ALPHA_THRESHOLD: u8 = 128;

/// Largest `width * height` accepted from a source, 4096x4096.
pub const MAX_PIXEL_COUNT: usize = 1 << 24;
/// Byte stored in place of a numeric literal above 255.
pub const OUT_OF_RANGE_PLACEHOLDER: u8 = 0;
