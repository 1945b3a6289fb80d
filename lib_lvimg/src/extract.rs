use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::constants::{OUT_OF_RANGE_PLACEHOLDER, RASTER_EXT};
use crate::error::LvImgError;
use crate::pixel::{decode_wire, Dimensions, PixelGrid};
use crate::source::{parse_source, ParseError};

/// Degradations tolerated while extracting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Payload tokens that were not byte literals.
    pub discarded_tokens: Vec<String>,
    /// Numbers above 255, each stored as a placeholder byte.
    pub out_of_range_tokens: Vec<String>,
    /// Bytes the declared dimensions need but the payload lacks.
    pub missing_bytes: usize,
    /// Payload bytes past the end of the declared image.
    pub surplus_bytes: usize,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.discarded_tokens.is_empty()
            && self.out_of_range_tokens.is_empty()
            && self.missing_bytes == 0
            && self.surplus_bytes == 0
    }
}

#[derive(Debug)]
pub struct Extraction {
    pub grid: PixelGrid,
    pub diagnostics: Diagnostics,
}

impl Extraction {
    pub fn dimensions(&self) -> Dimensions {
        self.grid.dimensions()
    }
}

/// Decodes the 32-bit pixel map of an LVGL image source.
///
/// Malformed payloads do not fail the extraction; the problems are reported
/// in [`Extraction::diagnostics`]. Pixels without data stay transparent black.
pub fn extract(text: &str) -> Result<Extraction, ParseError> {
    let parsed = parse_source(text)?;
    let dimensions = parsed.dimensions;
    let expected = dimensions.wire_len();

    let (grid, filled) = decode_wire(dimensions, &parsed.bytes);
    debug!("Filled {} of {} pixels", filled, grid.len());

    let diagnostics = Diagnostics {
        discarded_tokens: parsed.discarded_tokens,
        out_of_range_tokens: parsed.out_of_range_tokens,
        missing_bytes: expected.saturating_sub(parsed.bytes.len()),
        surplus_bytes: parsed.bytes.len().saturating_sub(expected),
    };

    if !diagnostics.discarded_tokens.is_empty() {
        warn!(
            "Discarded {} non-numeric tokens: {:?}",
            diagnostics.discarded_tokens.len(),
            diagnostics.discarded_tokens
        );
    }
    if !diagnostics.out_of_range_tokens.is_empty() {
        warn!(
            "Replaced {} literals above 255 with {}: {:?}",
            diagnostics.out_of_range_tokens.len(),
            OUT_OF_RANGE_PLACEHOLDER,
            diagnostics.out_of_range_tokens
        );
    }
    if diagnostics.missing_bytes > 0 {
        warn!(
            "Pixel data is {} bytes short of {}, remaining pixels left transparent",
            diagnostics.missing_bytes, dimensions
        );
    }
    if diagnostics.surplus_bytes > 0 {
        warn!("Ignoring {} bytes past the end of the image", diagnostics.surplus_bytes);
    }

    Ok(Extraction { grid, diagnostics })
}

/// Reads an LVGL source from `input` and saves its pixels as an RGBA image at `output`.
///
/// The output format follows the extension of `output`.
pub fn extract_file(input: &Path, output: &Path) -> Result<Extraction, LvImgError> {
    info!("Extracting {}", input.display());

    let text = fs::read_to_string(input).map_err(|e| {
        error!("Failed to read {}: {}", input.display(), e);
        LvImgError::io(input, e)
    })?;

    let extraction = extract(&text)?;
    let dimensions = extraction.dimensions();

    let image = extraction.grid.to_rgba_image().ok_or_else(|| {
        error!("Pixel grid does not fill a {} image", dimensions);
        LvImgError::BufferMismatch {
            width: dimensions.width,
            height: dimensions.height,
        }
    })?;
    image.save(output).map_err(|e| {
        error!("Failed to save {}: {}", output.display(), e);
        LvImgError::image(output, e)
    })?;

    info!("Saved {} image to {}", dimensions, output.display());
    Ok(extraction)
}

/// `input` with its extension replaced by the raster extension.
pub fn raster_path_for(input: &Path) -> PathBuf {
    input.with_extension(RASTER_EXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_path_for() {
        assert_eq!(raster_path_for(Path::new("img_star.c")), PathBuf::from("img_star.png"));
        assert_eq!(
            raster_path_for(Path::new("assets/icons/wifi.c")),
            PathBuf::from("assets/icons/wifi.png")
        );
        assert_eq!(raster_path_for(Path::new("noext")), PathBuf::from("noext.png"));
    }

    #[test]
    fn test_diagnostics_clean() {
        assert!(Diagnostics::default().is_clean());
        let diagnostics = Diagnostics {
            missing_bytes: 3,
            ..Default::default()
        };
        assert!(!diagnostics.is_clean());
    }
}
