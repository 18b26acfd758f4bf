//! Centralized theme constants for the enhance panel
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_NOTE: Color32 = Color32::from_rgb(0x14, 0x14, 0x18); // pinned tooltip background

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Switch
// =============================================================================
pub const SWITCH_TRACK_ON: Color32 = Color32::from_rgb(0x11, 0x5e, 0x59); // teal-800
pub const SWITCH_TRACK_OFF: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const SWITCH_KNOB_ON: Color32 = ACCENT;
pub const SWITCH_KNOB_OFF: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const PANEL_WIDTH: f32 = 360.0;
pub const ROW_HEIGHT: f32 = 32.0;
pub const SWITCH_WIDTH: f32 = 36.0;
pub const SWITCH_HEIGHT: f32 = 20.0;
pub const INFO_BUTTON_SIZE: f32 = 20.0;
pub const TOOLTIP_MAX_WIDTH: f32 = 260.0;

// =============================================================================
// CORNER RADIUS / STROKES
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_XS: f32 = 2.0;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: Color32::from_rgb(0x1a, 0x1a, 0x1e), // Slightly elevated for tooltips
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            ..egui::Visuals::dark().widgets
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        popup_shadow: egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(80),
        },
        window_stroke: egui::Stroke::new(1.0, Color32::from_rgb(0x2a, 0x2a, 0x2e)),
        window_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.tooltip_width = TOOLTIP_MAX_WIDTH;
    });
}

// =============================================================================
// HELPER - Card frame
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgb(0x1a, 0x1a, 0x1e))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, Color32::from_rgb(0x2a, 0x2a, 0x2e)))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(20))
}

// =============================================================================
// HELPER - Pinned note frame
// =============================================================================
pub fn note_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_NOTE)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(SPACING_MD as i8, SPACING_SM as i8 + 2))
}

/// Linear blend between two colors, `t` in 0..=1
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

pub fn lighten(c: Color32, amount: f32) -> Color32 {
    mix(c, Color32::WHITE, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_endpoints() {
        assert_eq!(mix(SWITCH_TRACK_OFF, SWITCH_TRACK_ON, 0.0), SWITCH_TRACK_OFF);
        assert_eq!(mix(SWITCH_TRACK_OFF, SWITCH_TRACK_ON, 1.0), SWITCH_TRACK_ON);
        assert_eq!(mix(SWITCH_TRACK_OFF, SWITCH_TRACK_ON, 7.0), SWITCH_TRACK_ON);
    }

    #[test]
    fn lighten_moves_towards_white() {
        let c = lighten(BG_SURFACE, 0.5);
        assert!(c.r() > BG_SURFACE.r());
        assert_eq!(lighten(BG_SURFACE, 1.0), Color32::WHITE);
    }
}
