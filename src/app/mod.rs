//! App module - contains the main application state and window chrome

use crate::constants::{APP_NAME, APP_VERSION};
use crate::settings::Settings;
use crate::theme;
use crate::ui::panel::EnhancePanel;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) panel: EnhancePanel,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            panel: EnhancePanel::new(),
            window_pos: settings.window_pos(),
            window_size: settings.window_size(),
            settings,
            data_dir,
        }
    }

    pub(crate) fn save_settings(&mut self) {
        self.settings.set_window_geometry(self.window_pos, self.window_size);
        self.settings.save(&self.data_dir);
        info!("Settings saved");
    }

    pub(crate) fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_XL);
                theme::card_frame().show(ui, |ui| {
                    ui.set_width(theme::PANEL_WIDTH);
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("Enhance")
                                    .size(theme::FONT_HEADING)
                                    .strong(),
                            )
                            .selectable(false),
                        );
                        ui.add_space(theme::SPACING_SM);
                        ui.separator();
                        ui.add_space(theme::SPACING_SM);
                        self.panel.ui(ui);
                    });
                });
                ui.add_space(theme::SPACING_LG);
                ui.label(
                    egui::RichText::new(format!("{} v{}", APP_NAME, APP_VERSION))
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_DIM),
                );
            });
        });
    }
}
