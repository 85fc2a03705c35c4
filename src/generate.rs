use crate::constants::tables::GENERATOR_SIZES;
use crate::png_output::save_optimized_png;
use crate::render::render_phone_icon;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Render every generator size into `output_dir`, returning the written paths in table order
///
/// A failed write stops the run; files written before it stay on disk.
pub fn generate_all_icons(output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    println!("📱 Generating SoftLight phone icons...");

    let mut written = Vec::with_capacity(GENERATOR_SIZES.len());
    for spec in GENERATOR_SIZES {
        println!("  Creating {} ({}x{})...", spec.label, spec.size, spec.size);

        let icon = render_phone_icon(spec.size);
        let path = spec.output_path(output_dir);
        save_optimized_png(&icon, &path)?;

        println!("  ✅ Saved: {}", path.display());
        written.push(path);
    }

    print_summary(output_dir);

    Ok(written)
}

fn print_summary(output_dir: &Path) {
    let location = fs::canonicalize(output_dir).unwrap_or_else(|_| output_dir.to_path_buf());

    println!();
    println!("🎉 All phone icons generated!");
    println!("📁 Icon location: {}", location.display());
    println!();
    println!("📋 Design:");
    println!("  • Glowing white screen");
    println!("  • Classic phone notch");
    println!("  • Dark plate to make the screen stand out");
    println!("  • Speaker and front camera details");
    println!("  • Warm highlight inside the screen");
}
