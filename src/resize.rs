use crate::constants::tables::RESIZER_SIZES;
use crate::png_output::save_optimized_png;
use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use std::fs;
use std::path::{Path, PathBuf};

/// Resize one source image to every iOS icon size
///
/// The source is decoded before anything touches the filesystem, so an
/// unreadable or undecodable input leaves no output directory behind. Every
/// output is forced square; the source aspect ratio is not preserved.
pub fn resize_icon_to_all_sizes(input: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let source = image::open(input)
        .with_context(|| format!("Failed to open image {}", input.display()))?
        .to_rgba8();

    println!("📁 Original size: {}x{}", source.width(), source.height());

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    println!("🔄 Resizing icon...");

    let mut written = Vec::with_capacity(RESIZER_SIZES.len());
    for spec in RESIZER_SIZES {
        println!("  Resizing {} ({}x{})...", spec.label, spec.size, spec.size);

        let resized = imageops::resize(&source, spec.size, spec.size, FilterType::Lanczos3);
        let path = spec.output_path(output_dir);
        save_optimized_png(&resized, &path)?;

        println!("  ✅ Saved: {}", path.display());
        written.push(path);
    }

    let location = fs::canonicalize(output_dir).unwrap_or_else(|_| output_dir.to_path_buf());
    println!();
    println!("🎉 All sizes done!");
    println!("📁 Output directory: {}", location.display());

    Ok(written)
}

/// Resize and report instead of propagating: prints the error and returns `false` on failure
pub fn try_resize_icon(input: &Path, output_dir: &Path) -> bool {
    match resize_icon_to_all_sizes(input, output_dir) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Resizing {} failed: {:?}", input.display(), e);
            println!("❌ Error: {:#}", e);
            false
        }
    }
}
