//! Procedural phone icon renderer
//!
//! Draws a dark app-icon plate with a white phone screen, a soft halo around
//! the screen, a notch holding a speaker and a camera, and a warm highlight
//! inside the screen. All geometry is derived from the icon size, so the same
//! size always produces the same pixels.

use crate::constants::{colors, geometry};
use crate::draw::{fill_ellipse, fill_rounded_rect, Bounds};
use image::{Rgba, RgbaImage};

/// One ring of the inner screen highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlowRing {
    pub radius: i32,
    pub alpha: u8,
}

/// Pixel geometry of every element of the phone icon at one size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneLayout {
    pub size: u32,
    pub center: i32,
    pub plate: Bounds,
    pub plate_radius: i32,
    pub screen: Bounds,
    pub screen_radius: i32,
    pub halo: Bounds,
    pub halo_radius: i32,
    pub notch: Bounds,
    pub notch_radius: i32,
    pub speaker: Bounds,
    pub camera_center: (i32, i32),
    pub camera_radius: i32,
    pub glow_center: (i32, i32),
    pub glow_rings: Vec<GlowRing>,
}

/// `size × fraction`, truncated toward zero
fn scaled(value: i32, fraction: f64) -> i32 {
    (value as f64 * fraction) as i32
}

impl PhoneLayout {
    pub fn for_size(size: u32) -> Self {
        let s = size as i32;
        let center = s / 2;

        let plate = Bounds::new(0, 0, s - 1, s - 1);
        let plate_radius = scaled(s, geometry::PLATE_CORNER);

        let screen_w = scaled(s, geometry::SCREEN_WIDTH);
        let screen_h = scaled(s, geometry::SCREEN_HEIGHT);
        let screen_left = center - screen_w / 2;
        let screen_top = center - screen_h / 2;
        let screen = Bounds::new(screen_left, screen_top, screen_left + screen_w, screen_top + screen_h);
        let screen_radius = scaled(s, geometry::SCREEN_CORNER);

        let padding = scaled(s, geometry::HALO_PADDING);
        let halo = screen.expand(padding);
        let halo_radius = screen_radius + padding;

        let notch_w = scaled(screen_w, geometry::NOTCH_WIDTH);
        let notch_h = scaled(s, geometry::NOTCH_HEIGHT);
        let notch_left = center - notch_w / 2;
        let notch = Bounds::new(notch_left, screen_top, notch_left + notch_w, screen_top + notch_h);
        let notch_radius = scaled(s, geometry::NOTCH_CORNER);

        let speaker_w = scaled(notch_w, geometry::SPEAKER_WIDTH);
        let speaker_h = scaled(notch_h, geometry::SPEAKER_HEIGHT);
        let speaker_left = center - speaker_w / 2;
        let speaker_top = notch.top + (notch_h - speaker_h) / 2;
        let speaker = Bounds::new(speaker_left, speaker_top, speaker_left + speaker_w, speaker_top + speaker_h);

        let camera_radius = scaled(s, geometry::CAMERA_RADIUS);
        let camera_center = (
            notch.right - scaled(notch_w, geometry::CAMERA_INSET),
            notch.top + notch_h / 2,
        );

        let outer = scaled(s, geometry::INNER_GLOW_RADIUS);
        let step = scaled(outer, geometry::INNER_GLOW_RING_STEP);
        let glow_center = (center, center + scaled(s, geometry::INNER_GLOW_OFFSET_Y));
        let glow_rings = (0..geometry::INNER_GLOW_RINGS)
            .map(|i| GlowRing {
                radius: outer - i * step,
                alpha: (geometry::INNER_GLOW_ALPHA - i * geometry::INNER_GLOW_ALPHA_STEP).clamp(0, 255) as u8,
            })
            .collect();

        PhoneLayout {
            size,
            center,
            plate,
            plate_radius,
            screen,
            screen_radius,
            halo,
            halo_radius,
            notch,
            notch_radius,
            speaker,
            camera_center,
            camera_radius,
            glow_center,
            glow_rings,
        }
    }
}

/// Render the phone icon as a `size × size` RGBA image
pub fn render_phone_icon(size: u32) -> RgbaImage {
    let layout = PhoneLayout::for_size(size);
    log::debug!("Rendering {}x{} phone icon: {:?}", size, size, layout);
    render_layout(&layout)
}

pub fn render_layout(layout: &PhoneLayout) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(layout.size, layout.size, Rgba([0, 0, 0, 0]));

    fill_rounded_rect(&mut img, layout.plate, layout.plate_radius, colors::PLATE);

    // Halo goes under the screen so only the rim outside the screen is tinted
    fill_rounded_rect(&mut img, layout.halo, layout.halo_radius, colors::SCREEN_HALO);
    fill_rounded_rect(&mut img, layout.screen, layout.screen_radius, colors::SCREEN);

    fill_rounded_rect(&mut img, layout.notch, layout.notch_radius, colors::PLATE);
    fill_ellipse(&mut img, layout.speaker, colors::SPEAKER);

    let (cam_x, cam_y) = layout.camera_center;
    fill_ellipse(&mut img, Bounds::around(cam_x, cam_y, layout.camera_radius), colors::CAMERA);

    let (glow_x, glow_y) = layout.glow_center;
    let [r, g, b] = colors::INNER_GLOW_RGB;
    for ring in &layout.glow_rings {
        fill_ellipse(
            &mut img,
            Bounds::around(glow_x, glow_y, ring.radius),
            Rgba([r, g, b, ring.alpha]),
        );
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::tables::GENERATOR_SIZES;

    /// First and last index along a line where the pixel is part of the screen
    fn screen_extent(pixels: impl Iterator<Item = (u32, Rgba<u8>)>) -> (u32, u32) {
        // Screen pixels are the only ones with a full red channel: the halo and
        // plate are blended onto near-black
        let hits: Vec<u32> = pixels.filter(|(_, p)| p[0] == 255 && p[3] == 255).map(|(i, _)| i).collect();
        (*hits.first().unwrap(), *hits.last().unwrap())
    }

    #[test]
    fn test_dimensions_match_size() {
        for spec in GENERATOR_SIZES {
            let img = render_phone_icon(spec.size);
            assert_eq!(img.dimensions(), (spec.size, spec.size));
        }
    }

    #[test]
    fn test_corners_are_transparent() {
        for size in [16, 32, 76, 120, 152, 167, 180, 512, 1024] {
            let img = render_phone_icon(size);
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({}, {}) at size {}", x, y, size);
            }
        }
    }

    #[test]
    fn test_small_icons_have_cut_corners() {
        // 6 px is the first size whose plate radius truncates to at least one pixel
        for size in 6..=40 {
            let layout = PhoneLayout::for_size(size);
            assert!(layout.plate_radius >= 1);

            let img = render_layout(&layout);
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({}, {}) at size {}", x, y, size);
            }
        }
    }

    #[test]
    fn test_tiny_icons_have_square_plate() {
        for size in 1..=5 {
            let layout = PhoneLayout::for_size(size);
            assert_eq!(layout.plate_radius, 0);

            let img = render_layout(&layout);
            assert_eq!(img.get_pixel(0, 0)[3], 255, "size {}", size);
        }
    }

    #[test]
    fn test_center_is_opaque_screen() {
        for size in [16, 76, 180, 1024] {
            let img = render_phone_icon(size);
            let p = img.get_pixel(size / 2, size / 2);
            assert_eq!(p[3], 255);
            assert_eq!(p[0], 255);
        }
    }

    #[test]
    fn test_screen_is_centered() {
        for spec in GENERATOR_SIZES {
            let size = spec.size;
            let img = render_phone_icon(size);
            let canvas_mid = (size - 1) as f64 / 2.0;

            let row = size / 2;
            let (left, right) = screen_extent((0..size).map(|x| (x, *img.get_pixel(x, row))));
            let mid_x = (left + right) as f64 / 2.0;
            assert!((mid_x - canvas_mid).abs() <= 1.5, "size {}: x mid {} vs {}", size, mid_x, canvas_mid);

            // Off to the side so the notch does not interrupt the column
            let column = (size as f64 * 0.3) as u32;
            let (top, bottom) = screen_extent((0..size).map(|y| (y, *img.get_pixel(column, y))));
            let mid_y = (top + bottom) as f64 / 2.0;
            assert!((mid_y - canvas_mid).abs() <= 1.5, "size {}: y mid {} vs {}", size, mid_y, canvas_mid);
        }
    }

    #[test]
    fn test_layout_screen_centered() {
        for spec in GENERATOR_SIZES {
            let layout = PhoneLayout::for_size(spec.size);
            let (mx, my) = layout.screen.mid();
            let canvas_mid = (spec.size - 1) as f64 / 2.0;
            assert!((mx - canvas_mid).abs() <= 1.0);
            assert!((my - canvas_mid).abs() <= 1.0);
        }
    }

    #[test]
    fn test_halo_surrounds_screen() {
        let size = 1024;
        let layout = PhoneLayout::for_size(size);
        let img = render_layout(&layout);
        let y = size / 2;

        // Just outside the screen's left edge is halo: lighter than the plate, not white
        let halo = img.get_pixel((layout.screen.left - 2) as u32, y);
        assert_eq!(halo[3], 255);
        assert!(halo[0] > colors::PLATE[0] && halo[0] < 255);

        // Just inside stays solid white
        assert_eq!(*img.get_pixel((layout.screen.left + 2) as u32, y), colors::SCREEN);

        // Outside the halo is plain plate
        assert_eq!(*img.get_pixel((layout.halo.left - 2) as u32, y), colors::PLATE);
    }

    #[test]
    fn test_notch_details() {
        let layout = PhoneLayout::for_size(1024);
        let img = render_layout(&layout);
        let (_, notch_mid_y) = layout.notch.mid();
        let mid_y = notch_mid_y as u32;

        let notch_x = (layout.notch.left + layout.notch.span_x() / 8) as u32;
        assert_eq!(*img.get_pixel(notch_x, mid_y), colors::PLATE);

        let (speaker_x, speaker_y) = layout.speaker.mid();
        assert_eq!(*img.get_pixel(speaker_x as u32, speaker_y as u32), colors::SPEAKER);

        let (cam_x, cam_y) = layout.camera_center;
        assert_eq!(*img.get_pixel(cam_x as u32, cam_y as u32), colors::CAMERA);
    }

    #[test]
    fn test_camera_sits_three_quarters_across_notch() {
        let layout = PhoneLayout::for_size(1024);
        let offset = layout.camera_center.0 - layout.notch.left;
        let notch_w = layout.notch.right - layout.notch.left;
        assert_eq!(offset, notch_w - (notch_w as f64 * 0.25) as i32);
    }

    #[test]
    fn test_glow_rings_shrink_and_fade() {
        let layout = PhoneLayout::for_size(1024);
        let radii: Vec<i32> = layout.glow_rings.iter().map(|r| r.radius).collect();
        let alphas: Vec<u8> = layout.glow_rings.iter().map(|r| r.alpha).collect();
        assert_eq!(radii, vec![153, 115, 77]);
        assert_eq!(alphas, vec![60, 45, 30]);
        assert_eq!(layout.glow_center, (512, 563));
    }

    #[test]
    fn test_inner_glow_warms_screen() {
        let size = 1024;
        let layout = PhoneLayout::for_size(size);
        let img = render_layout(&layout);
        let (gx, gy) = layout.glow_center;
        let p = img.get_pixel(gx as u32, gy as u32);
        assert_eq!(p[0], 255);
        assert_eq!(p[3], 255);
        assert!(p[2] < 255);
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_phone_icon(167).as_raw(), render_phone_icon(167).as_raw());
    }

    #[test]
    fn test_zero_size_is_empty() {
        let img = render_phone_icon(0);
        assert_eq!(img.dimensions(), (0, 0));
    }
}
