//! Application-wide constants for icon sizes, geometry and output layout

use crate::sizes::SizeSpec;

pub mod tables {
    use super::SizeSpec;

    /// Sizes drawn by the phone icon generator
    pub const GENERATOR_SIZES: &[SizeSpec] = &[
        SizeSpec::new("AppStore", 1024),   // App Store
        SizeSpec::new("iPhone-180", 180),  // iPhone @3x
        SizeSpec::new("iPhone-120", 120),  // iPhone @2x
        SizeSpec::new("iPad-167", 167),    // iPad Pro @2x
        SizeSpec::new("iPad-152", 152),    // iPad @2x
        SizeSpec::new("iPad-76", 76),      // iPad @1x
    ];

    /// Sizes produced when resizing an existing icon
    /// The first six entries match GENERATOR_SIZES
    pub const RESIZER_SIZES: &[SizeSpec] = &[
        SizeSpec::new("AppStore", 1024),
        SizeSpec::new("iPhone-180", 180),
        SizeSpec::new("iPhone-120", 120),
        SizeSpec::new("iPad-167", 167),
        SizeSpec::new("iPad-152", 152),
        SizeSpec::new("iPad-76", 76),
        SizeSpec::new("iPhone-60", 60),    // iPhone @1x
        SizeSpec::new("iPad-40", 40),      // iPad Spotlight @1x
        SizeSpec::new("iPad-80", 80),      // iPad Spotlight @2x
        SizeSpec::new("iPhone-58", 58),    // iPhone Spotlight @2x
        SizeSpec::new("iPhone-87", 87),    // iPhone Spotlight @3x
    ];
}

pub mod colors {
    use image::Rgba;

    /// Icon plate, also used for the notch so it reads as a cutout
    pub const PLATE: Rgba<u8> = Rgba([20, 20, 25, 255]);
    pub const SCREEN: Rgba<u8> = Rgba([255, 255, 255, 255]);
    pub const SCREEN_HALO: Rgba<u8> = Rgba([255, 255, 255, 80]);
    pub const SPEAKER: Rgba<u8> = Rgba([60, 60, 70, 255]);
    pub const CAMERA: Rgba<u8> = Rgba([40, 40, 50, 255]);

    /// Warm highlight inside the screen, alpha is set per ring
    pub const INNER_GLOW_RGB: [u8; 3] = [255, 248, 220];
}

pub mod geometry {
    //! Proportions of the phone icon, as fractions of the icon size unless noted

    /// Matches the iOS app icon corner mask
    pub const PLATE_CORNER: f64 = 0.176;

    pub const SCREEN_WIDTH: f64 = 0.5;
    pub const SCREEN_HEIGHT: f64 = 0.75;
    pub const SCREEN_CORNER: f64 = 0.08;
    pub const HALO_PADDING: f64 = 0.02;

    /// Fraction of the screen width
    pub const NOTCH_WIDTH: f64 = 0.35;
    pub const NOTCH_HEIGHT: f64 = 0.04;
    pub const NOTCH_CORNER: f64 = 0.015;

    /// Fractions of the notch width and height
    pub const SPEAKER_WIDTH: f64 = 0.3;
    pub const SPEAKER_HEIGHT: f64 = 0.25;

    pub const CAMERA_RADIUS: f64 = 0.015;
    /// Distance of the camera centre from the notch's right edge, as a fraction of the notch width
    pub const CAMERA_INSET: f64 = 0.25;

    pub const INNER_GLOW_RADIUS: f64 = 0.15;
    pub const INNER_GLOW_OFFSET_Y: f64 = 0.05;
    pub const INNER_GLOW_RINGS: i32 = 3;
    /// Fraction of the outer ring radius removed per ring
    pub const INNER_GLOW_RING_STEP: f64 = 0.25;
    pub const INNER_GLOW_ALPHA: i32 = 60;
    pub const INNER_GLOW_ALPHA_STEP: i32 = 15;
}

pub mod output {
    pub const GENERATED_DIR: &str = "phone_icons";
    pub const RESIZED_DIR: &str = "resized_icons";

    /// Suffix of the per-image directory in batch mode
    pub const BATCH_DIR_SUFFIX: &str = "_icons";

    /// Source image extensions picked up by discovery (compared case-insensitively)
    pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];
}
