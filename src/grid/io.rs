//! I/O helpers for raster input and JSON output.
//!
//! - `load_pixel_grid`: decode a PNG/BMP/JPEG/GIF into a classified `PixelGrid`.
//! - `save_bitmap`: write a binary grid as a black-on-white PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{BinaryGrid, PixelGrid};
use crate::pixel::{ForegroundRule, Pixel};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as RGB pixels classified by `rule`.
pub fn load_pixel_grid(path: &Path, rule: ForegroundRule) -> Result<PixelGrid, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    log::debug!("Decoded {} as {width}x{height} RGB", path.display());
    let pixels = img.pixels().map(|p| Pixel::from(p.0)).collect();
    Ok(PixelGrid::new(width, height, pixels, rule))
}

/// Save any binary grid as a PNG, foreground black on white.
pub fn save_bitmap<G: BinaryGrid + ?Sized>(grid: &G, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(grid.width() as u32, grid.height() as u32);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let v = if grid.is_foreground(x, y) { 0 } else { 255 };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
