use crate::constants::output::BATCH_DIR_SUFFIX;
use crate::resize::try_resize_icon;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Per-file results of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub results: Vec<(PathBuf, bool)>,
}

impl BatchSummary {
    pub fn processed(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|(_, ok)| *ok).count()
    }

    pub fn failed(&self) -> usize {
        self.processed() - self.succeeded()
    }
}

/// Does `path` carry one of `extensions` (without the dot, case-insensitive)?
pub fn has_supported_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Regular files directly inside `dir` with a supported extension, sorted by file name
pub fn find_images(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut images: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_supported_extension(path, extensions))
        .collect();

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

/// `<output_dir>/<file stem>_icons`
pub fn batch_output_dir(image: &Path, output_dir: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    output_dir.join(format!("{}{}", stem, BATCH_DIR_SUFFIX))
}

/// Resize every supported image in `input_dir`, each into its own subdirectory of `output_dir`
///
/// A failing file is reported and recorded; the remaining files are still processed.
pub fn batch_resize_icons(input_dir: &Path, output_dir: &Path, extensions: &[String]) -> Result<BatchSummary> {
    let images = find_images(input_dir, extensions)?;
    resize_each(&images, output_dir)
}

pub(crate) fn resize_each(images: &[PathBuf], output_dir: &Path) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    if images.is_empty() {
        println!("❌ No supported image files found");
        return Ok(summary);
    }

    println!("📁 Found {} image files", images.len());

    for (i, image) in images.iter().enumerate() {
        let name = image
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!();
        println!("Processing file {}/{}: {}", i + 1, images.len(), name);

        let file_output_dir = batch_output_dir(image, output_dir);
        let ok = try_resize_icon(image, &file_output_dir);
        summary.results.push((image.clone(), ok));
    }

    println!();
    println!(
        "Batch finished: {} succeeded, {} failed",
        summary.succeeded(),
        summary.failed()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::output::SUPPORTED_EXTENSIONS;

    fn extensions() -> Vec<String> {
        SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let exts = extensions();
        assert!(has_supported_extension(Path::new("logo.PNG"), &exts));
        assert!(has_supported_extension(Path::new("photo.JpEg"), &exts));
        assert!(has_supported_extension(Path::new("art.webp"), &exts));
        assert!(!has_supported_extension(Path::new("notes.txt"), &exts));
        assert!(!has_supported_extension(Path::new("png"), &exts));
    }

    #[test]
    fn test_batch_output_dir_uses_stem() {
        let dir = batch_output_dir(Path::new("some/where/logo.png"), Path::new("resized_icons"));
        assert_eq!(dir, Path::new("resized_icons").join("logo_icons"));
    }

    #[test]
    fn test_find_images_filters_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["b.jpg", "a.PNG", "c.webp", "readme.md", "d.gif"] {
            fs::write(tmp.path().join(name), b"x").unwrap();
        }
        fs::create_dir(tmp.path().join("folder.png")).unwrap();

        let found = find_images(tmp.path(), &extensions()).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PNG", "b.jpg", "c.webp"]);
    }

    #[test]
    fn test_empty_directory_gives_empty_summary() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        let summary = batch_resize_icons(tmp.path(), &out, &extensions()).unwrap();
        assert_eq!(summary.processed(), 0);
        assert!(!out.exists());
    }

    #[test]
    fn test_summary_counts() {
        let summary = BatchSummary {
            results: vec![
                (PathBuf::from("a.png"), true),
                (PathBuf::from("b.png"), false),
                (PathBuf::from("c.png"), true),
            ],
        };
        assert_eq!(summary.processed(), 3);
        assert_eq!(summary.succeeded(), 2);
        assert_eq!(summary.failed(), 1);
    }
}
