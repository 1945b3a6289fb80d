use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use log::{debug, error, info};

use crate::constants::SOURCE_EXT;
use crate::error::LvImgError;
use crate::pixel::codec::is_chroma_substituted;
use crate::pixel::{encode_grid, Dimensions, PixelGrid};
use crate::source::template::{map_name, render_source};

const FALLBACK_NAME: &str = "image";

#[derive(Debug)]
pub struct Emission {
    /// Name of the `lv_img_dsc_t` descriptor.
    pub name: String,
    /// Name of the pixel byte array.
    pub map_name: String,
    pub dimensions: Dimensions,
    /// Pixels written as the chroma key instead of their own color.
    pub chroma_keyed_pixels: usize,
    /// The generated C source.
    pub source: String,
}

pub fn emit(grid: &PixelGrid, name: &str) -> Emission {
    let dimensions = grid.dimensions();
    let chroma_keyed_pixels = grid
        .pixels()
        .iter()
        .filter(|&&p| is_chroma_substituted(p))
        .count();

    let bytes = encode_grid(grid);
    debug!(
        "Encoded {} pixels into {} bytes ({} chroma keyed)",
        grid.len(),
        bytes.len(),
        chroma_keyed_pixels
    );

    Emission {
        name: name.to_string(),
        map_name: map_name(name),
        dimensions,
        chroma_keyed_pixels,
        source: render_source(name, dimensions, &bytes),
    }
}

/// Converts any decoded image to RGBA before emitting it.
pub fn emit_image(image: &DynamicImage, name: &str) -> Emission {
    let rgba = image.to_rgba8();
    emit(&PixelGrid::from_rgba_image(&rgba), name)
}

/// Reads the raster at `input` and writes its LVGL source to `output`.
///
/// `name` defaults to [`default_name`] of `input`.
pub fn emit_file(input: &Path, output: &Path, name: Option<&str>) -> Result<Emission, LvImgError> {
    info!("Emitting {}", input.display());

    let image = image::open(input).map_err(|e| {
        error!("Failed to open {}: {}", input.display(), e);
        LvImgError::image(input, e)
    })?;

    let name = match name {
        Some(name) => name.to_string(),
        None => default_name(input),
    };
    let emission = emit_image(&image, &name);

    fs::write(output, &emission.source).map_err(|e| {
        error!("Failed to write {}: {}", output.display(), e);
        LvImgError::io(output, e)
    })?;

    info!(
        "Wrote {} ({}) to {}",
        emission.name,
        emission.dimensions,
        output.display()
    );
    Ok(emission)
}

/// Base file name of `input` without its extension.
pub fn default_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

/// `<stem>.c` in the current directory.
pub fn source_path_for(input: &Path) -> PathBuf {
    PathBuf::from(format!("{}.{}", default_name(input), SOURCE_EXT))
}
