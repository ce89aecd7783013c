use crate::glider::{render_icon, Canvas, BACKGROUND, FOREGROUND};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Size in pixels and output file name of one icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub filename: &'static str,
}

/// Icons written on every run
pub const ICON_SPECS: [IconSpec; 3] = [
    IconSpec {
        size: 16,
        filename: "icon16.png",
    },
    IconSpec {
        size: 48,
        filename: "icon48.png",
    },
    IconSpec {
        size: 128,
        filename: "icon128.png",
    },
];

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// Render every icon in [`ICON_SPECS`] and write it into `out_dir`
///
/// The directory is created if missing and existing files are overwritten.
/// Prints a single completion line once every icon is written.
/// Returns the paths that were written, in table order.
pub fn generate_icons(out_dir: &Path) -> Result<Vec<PathBuf>> {
    create_dir_all(out_dir)
        .with_context(|| format!("Can't create output directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(ICON_SPECS.len());
    for spec in ICON_SPECS {
        let canvas = render_icon(spec.size);
        let output_path = out_dir.join(spec.filename);
        save_png(&canvas, &output_path)?;
        written.push(output_path);
    }

    println!("Icons generated in {}", out_dir.display());
    Ok(written)
}

fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(canvas, &mut out_file)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    out_file
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

// Encode an RGB canvas as PNG with compression
fn write_png<W: Write>(canvas: &Canvas, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ColorType::Rgb8,
    )?;
    Ok(())
}

/// Check a written icon against a fresh render of `expected_size`
pub fn verify_icon(path: &Path, expected_size: u32) -> Result<()> {
    let decoded = image::open(path)
        .with_context(|| format!("Failed to load image {}", path.display()))?
        .to_rgb8();

    let (width, height) = decoded.dimensions();
    if (width, height) != (expected_size, expected_size) {
        anyhow::bail!(
            "{} is {}x{}, expected {}x{}",
            path.display(),
            width,
            height,
            expected_size,
            expected_size
        );
    }

    if let Some((x, y, pixel)) = decoded
        .enumerate_pixels()
        .find(|(_, _, p)| **p != BACKGROUND && **p != FOREGROUND)
    {
        anyhow::bail!(
            "{} has a stray color {:?} at ({}, {})",
            path.display(),
            pixel.0,
            x,
            y
        );
    }

    let expected = render_icon(expected_size);
    if let Some((x, y, _)) = decoded
        .enumerate_pixels()
        .find(|(x, y, p)| *p != expected.get_pixel(*x, *y))
    {
        anyhow::bail!(
            "{} does not match the glider at ({}, {})",
            path.display(),
            x,
            y
        );
    }

    Ok(())
}

/// Verify every icon in [`ICON_SPECS`] under `out_dir`
pub fn verify_icons(out_dir: &Path) -> Result<()> {
    for spec in ICON_SPECS {
        let path = out_dir.join(spec.filename);
        verify_icon(&path, spec.size)?;
        println!("  ✓ {} ({}x{})", path.display(), spec.size, spec.size);
    }
    Ok(())
}
