//! Reusable UI components
//!
//! Custom-painted widgets shared by the panel rows.

use crate::theme;
use eframe::egui;

/// Pill-shaped on/off switch. The caller owns the flag and flips it on `clicked()`.
pub fn toggle_switch(ui: &mut egui::Ui, on: bool, accessibility_label: &str) -> egui::Response {
    let size = egui::vec2(theme::SWITCH_WIDTH, theme::SWITCH_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    response.widget_info(|| {
        egui::WidgetInfo::selected(egui::WidgetType::Checkbox, ui.is_enabled(), on, accessibility_label)
    });

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool(response.id, on);
        let radius = rect.height() / 2.0;
        let painter = ui.painter();

        let track = theme::mix(theme::SWITCH_TRACK_OFF, theme::SWITCH_TRACK_ON, how_on);
        let track = if response.hovered() { theme::lighten(track, 0.06) } else { track };
        let border = if on { theme::ACCENT } else { theme::BORDER_DEFAULT };
        painter.rect_filled(rect, radius, track);
        painter.rect_stroke(
            rect,
            radius,
            egui::Stroke::new(theme::STROKE_DEFAULT, border),
            egui::StrokeKind::Inside,
        );

        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        let knob = theme::mix(theme::SWITCH_KNOB_OFF, theme::SWITCH_KNOB_ON, how_on);
        painter.circle_filled(egui::pos2(knob_x, rect.center().y), radius - 3.0, knob);
    }

    response
}

/// Small "i" icon button that carries a tooltip. `pinned` highlights it while its
/// note is shown inline.
pub fn info_button(ui: &mut egui::Ui, pinned: bool) -> egui::Response {
    let size = theme::INFO_BUTTON_SIZE;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Button, ui.is_enabled(), "More information")
    });

    if ui.is_rect_visible(rect) {
        let color = if pinned {
            theme::ACCENT
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            theme::TEXT_PRIMARY
        } else {
            theme::TEXT_MUTED
        };
        if response.hovered() || pinned {
            ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);
        }
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            egui_phosphor::regular::INFO,
            egui::FontId::proportional(size * 0.8),
            color,
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ctx: &egui::Context, mut add: impl FnMut(&mut egui::Ui)) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(400.0, 300.0))),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add(ui));
        });
    }

    #[test]
    fn switch_has_fixed_size_and_is_not_clicked_without_input() {
        let ctx = egui::Context::default();
        let mut rect = None;
        let mut clicked = false;
        run(&ctx, |ui| {
            let response = toggle_switch(ui, false, "google search");
            rect = Some(response.rect);
            clicked |= response.clicked();
        });
        let rect = rect.unwrap();
        assert_eq!(rect.size(), egui::vec2(theme::SWITCH_WIDTH, theme::SWITCH_HEIGHT));
        assert!(!clicked);
    }

    #[test]
    fn info_button_is_square() {
        let ctx = egui::Context::default();
        let mut rect = None;
        run(&ctx, |ui| {
            rect = Some(info_button(ui, true).rect);
        });
        let rect = rect.unwrap();
        assert_eq!(rect.width(), rect.height());
        assert_eq!(rect.width(), theme::INFO_BUTTON_SIZE);
    }
}
