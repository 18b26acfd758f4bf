//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

// Square viewBox for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="2" y="18" width="60" height="28" rx="14" fill="#115e59"/><circle cx="46" cy="32" r="10" fill="#2dd4bf"/><circle cx="18" cy="32" r="3" fill="#ffffff"/></svg>"##;

/// Get the app data directory (settings and logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Rasterize the icon SVG to a square RGBA image. `None` if the SVG fails to
/// parse or the size is zero.
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_rasterizes_to_requested_size() {
        let (rgba, w, h) = rasterize_icon(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(rgba.len(), 32 * 32 * 4);
        // Knob area is opaque, corners are transparent
        assert!(rgba.chunks(4).any(|px| px[3] == 255));
        assert_eq!(rgba[3], 0);
    }

    #[test]
    fn zero_size_icon_is_none() {
        assert!(rasterize_icon(0).is_none());
    }

    #[test]
    fn data_dir_ends_with_app_name() {
        assert!(get_data_dir().ends_with(APP_NAME));
    }
}
