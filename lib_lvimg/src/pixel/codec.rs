//! Byte order and chroma-key rules shared by extraction and emission.
//!
//! LVGL stores 32-bit pixels as `B, G, R, A`. Decoding marks the chroma key
//! color as transparent; encoding paints transparent black with the opaque
//! chroma key. The two rules are deliberately not inverses of each other.

use log::debug;

use super::format::{Dimensions, Pixel, PixelGrid};
use crate::constants::{BYTES_PER_PIXEL, CHROMA_ALPHA_THRESHOLD, CHROMA_KEY};

const CHROMA_KEY_OPAQUE: Pixel = Pixel::new(CHROMA_KEY[0], CHROMA_KEY[1], CHROMA_KEY[2], 255);

/// Builds a pixel from one wire tuple.
pub fn decode_pixel(b: u8, g: u8, r: u8, a: u8) -> Pixel {
    let a = if [r, g, b] == CHROMA_KEY { 0 } else { a };
    Pixel::new(r, g, b, a)
}

/// Returns the wire tuple `[b, g, r, a]` for `pixel`.
pub fn encode_pixel(pixel: Pixel) -> [u8; 4] {
    let pixel = if is_chroma_substituted(pixel) {
        CHROMA_KEY_OPAQUE
    } else {
        pixel
    };
    [pixel.b, pixel.g, pixel.r, pixel.a]
}

/// Whether `encode_pixel` replaces this pixel with the chroma key.
pub fn is_chroma_substituted(pixel: Pixel) -> bool {
    pixel.rgb() == [0, 0, 0] && pixel.a < CHROMA_ALPHA_THRESHOLD
}

/// Decodes wire bytes into a grid of `dimensions`.
///
/// Pixels are filled in row-major order while complete 4-byte groups remain.
/// Pixels past the end of the data keep their default value. Returns the grid
/// together with the number of pixels that were filled.
pub fn decode_wire(dimensions: Dimensions, bytes: &[u8]) -> (PixelGrid, usize) {
    let mut grid = PixelGrid::new(dimensions);
    let mut filled = 0;

    for (slot, group) in grid
        .pixels_mut()
        .iter_mut()
        .zip(bytes.chunks_exact(BYTES_PER_PIXEL))
    {
        *slot = decode_pixel(group[0], group[1], group[2], group[3]);
        filled += 1;
    }

    debug!(
        "Decoded {} of {} pixels from {} bytes",
        filled,
        dimensions.pixel_count(),
        bytes.len()
    );
    (grid, filled)
}

/// Encodes every pixel of `grid` in row-major order.
pub fn encode_grid(grid: &PixelGrid) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(grid.len() * BYTES_PER_PIXEL);
    for &pixel in grid.pixels() {
        bytes.extend_from_slice(&encode_pixel(pixel));
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_swaps_channel_order() {
        assert_eq!(decode_pixel(0x10, 0x20, 0x30, 0xFF), Pixel::new(0x30, 0x20, 0x10, 0xFF));
    }

    #[test]
    fn test_decode_chroma_key_is_transparent() {
        assert_eq!(decode_pixel(0, 255, 0, 255), Pixel::new(0, 255, 0, 0));
        assert_eq!(decode_pixel(0, 255, 0, 17), Pixel::new(0, 255, 0, 0));
        // Near-green keeps its alpha
        assert_eq!(decode_pixel(1, 255, 0, 200), Pixel::new(0, 255, 1, 200));
    }

    #[test]
    fn test_encode_transparent_black_becomes_chroma_key() {
        assert_eq!(encode_pixel(Pixel::new(0, 0, 0, 0)), [0x00, 0xFF, 0x00, 0xFF]);
        assert_eq!(encode_pixel(Pixel::new(0, 0, 0, 127)), [0x00, 0xFF, 0x00, 0xFF]);
    }

    #[test]
    fn test_encode_keeps_opaque_black() {
        assert_eq!(encode_pixel(Pixel::new(0, 0, 0, 128)), [0, 0, 0, 128]);
        assert_eq!(encode_pixel(Pixel::new(0, 0, 0, 255)), [0, 0, 0, 255]);
    }

    #[test]
    fn test_encoded_chroma_key_decodes_transparent() {
        let [b, g, r, a] = encode_pixel(Pixel::new(0, 0, 0, 10));
        assert_eq!(decode_pixel(b, g, r, a).a, 0);
    }

    #[test]
    fn test_ordinary_pixels_survive_encode_decode() {
        let samples = [
            Pixel::new(255, 0, 0, 255),
            Pixel::new(12, 34, 56, 78),
            Pixel::new(0, 0, 1, 0),
            Pixel::new(0, 254, 0, 255),
            Pixel::new(255, 255, 255, 0),
            Pixel::new(0, 0, 0, 200),
        ];
        for pixel in samples {
            let [b, g, r, a] = encode_pixel(pixel);
            assert_eq!(decode_pixel(b, g, r, a), pixel);
        }
    }

    #[test]
    fn test_decode_wire_stops_early() {
        let bytes = [0x10, 0x20, 0x30, 0xFF, 0x01, 0x02];
        let (grid, filled) = decode_wire(Dimensions::new(2, 2), &bytes);

        assert_eq!(filled, 1);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.pixels()[0], Pixel::new(0x30, 0x20, 0x10, 0xFF));
        assert!(grid.pixels()[1..].iter().all(|p| *p == Pixel::default()));
    }

    #[test]
    fn test_decode_wire_ignores_surplus() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        let (grid, filled) = decode_wire(Dimensions::new(1, 1), &bytes);
        assert_eq!(filled, 1);
        assert_eq!(grid.pixels(), &[Pixel::new(3, 2, 1, 4)]);
    }

    #[test]
    fn test_encode_grid_order() {
        let pixels = vec![Pixel::new(1, 2, 3, 4), Pixel::new(0, 0, 0, 0)];
        let grid = PixelGrid::from_pixels(Dimensions::new(2, 1), pixels).unwrap();
        assert_eq!(encode_grid(&grid), vec![3, 2, 1, 4, 0, 255, 0, 255]);
    }
}
