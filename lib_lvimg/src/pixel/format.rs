use std::fmt;

use image::RgbaImage;

use crate::constants::BYTES_PER_PIXEL;

/// A single RGBA pixel in the raster domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Saturates instead of overflowing.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Number of bytes the pixel map occupies on the wire.
    pub fn wire_len(&self) -> usize {
        self.pixel_count().saturating_mul(BYTES_PER_PIXEL)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Row-major pixel storage, indexed as `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    dimensions: Dimensions,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Creates a grid filled with fully transparent black pixels.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            pixels: vec![Pixel::default(); dimensions.pixel_count()],
        }
    }

    /// Returns `None` if `pixels` does not hold exactly `width * height` entries.
    pub fn from_pixels(dimensions: Dimensions, pixels: Vec<Pixel>) -> Option<Self> {
        if pixels.len() != dimensions.pixel_count() {
            return None;
        }
        Some(Self { dimensions, pixels })
    }

    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let pixels = image
            .pixels()
            .map(|p| Pixel::new(p[0], p[1], p[2], p[3]))
            .collect();

        Self {
            dimensions: Dimensions::new(width, height),
            pixels,
        }
    }

    /// Builds an RGBA raster with the same contents.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        let raw = self
            .pixels
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect();
        RgbaImage::from_raw(self.dimensions.width, self.dimensions.height, raw)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return None;
        }
        let index = y as usize * self.dimensions.width as usize + x as usize;
        self.pixels.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_transparent() {
        let grid = PixelGrid::new(Dimensions::new(3, 2));
        assert_eq!(grid.len(), 6);
        assert!(grid.pixels().iter().all(|p| *p == Pixel::new(0, 0, 0, 0)));
    }

    #[test]
    fn test_from_pixels_rejects_wrong_length() {
        let pixels = vec![Pixel::default(); 5];
        assert!(PixelGrid::from_pixels(Dimensions::new(3, 2), pixels).is_none());
    }

    #[test]
    fn test_get_is_row_major() {
        let pixels = (0..6).map(|i| Pixel::new(i, 0, 0, 255)).collect();
        let grid = PixelGrid::from_pixels(Dimensions::new(3, 2), pixels).unwrap();

        assert_eq!(grid.get(0, 0).unwrap().r, 0);
        assert_eq!(grid.get(2, 0).unwrap().r, 2);
        assert_eq!(grid.get(1, 1).unwrap().r, 4);
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 2).is_none());
    }

    #[test]
    fn test_rgba_image_conversion() {
        let pixels = vec![
            Pixel::new(1, 2, 3, 4),
            Pixel::new(5, 6, 7, 8),
            Pixel::new(9, 10, 11, 12),
            Pixel::new(13, 14, 15, 16),
        ];
        let grid = PixelGrid::from_pixels(Dimensions::new(2, 2), pixels).unwrap();

        let image = grid.to_rgba_image().unwrap();
        assert_eq!(image.get_pixel(1, 0).0, [5, 6, 7, 8]);
        assert_eq!(image.get_pixel(0, 1).0, [9, 10, 11, 12]);

        assert_eq!(PixelGrid::from_rgba_image(&image), grid);
    }

    #[test]
    fn test_dimensions_display() {
        assert_eq!(Dimensions::new(32, 16).to_string(), "32x16");
        assert_eq!(Dimensions::new(32, 16).wire_len(), 2048);
    }

    #[test]
    fn test_wire_len_saturates() {
        assert_eq!(Dimensions::new(u32::MAX, u32::MAX).wire_len(), usize::MAX);
    }
}
