//! Named icon sizes and the file names they map to

use std::path::{Path, PathBuf};

/// One required output icon: a human-readable label and a square edge length in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub label: &'static str,
    pub size: u32,
}

impl SizeSpec {
    pub const fn new(label: &'static str, size: u32) -> Self {
        SizeSpec { label, size }
    }

    /// `icon_<label>_<size>x<size>.png`
    pub fn file_name(&self) -> String {
        format!("icon_{}_{}x{}.png", self.label, self.size, self.size)
    }

    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }
}
