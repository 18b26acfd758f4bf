//! The enhance panel: two labeled rows, each with an info tooltip and a switch.
//!
//! Both flags start off and live only as long as the panel does. Clicking a
//! row's info button pins its tooltip text under the row, which is how the
//! text is reached without a hovering pointer.

use crate::theme;
use crate::types::EnhanceOption;
use crate::ui::components;
use eframe::egui;
use tracing::debug;

#[derive(Debug, Default)]
pub struct EnhancePanel {
    google_search: bool,
    quivr_second_brain: bool,
    pinned_note: Option<EnhanceOption>,
}

/// Widget responses for a single row
pub struct RowResponse {
    pub info: egui::Response,
    pub switch: egui::Response,
}

/// Responses for every row rendered in one frame, in display order
pub struct PanelResponse {
    pub rows: [RowResponse; 2],
}

impl EnhancePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, option: EnhanceOption) -> bool {
        match option {
            EnhanceOption::GoogleSearch => self.google_search,
            EnhanceOption::QuivrSecondBrain => self.quivr_second_brain,
        }
    }

    /// Flip one flag and return its new value. The other flag is untouched.
    pub fn toggle(&mut self, option: EnhanceOption) -> bool {
        let flag = match option {
            EnhanceOption::GoogleSearch => &mut self.google_search,
            EnhanceOption::QuivrSecondBrain => &mut self.quivr_second_brain,
        };
        *flag = !*flag;
        debug!(?option, enabled = *flag, "Enhance option toggled");
        *flag
    }

    /// Pin `option`'s tooltip, or unpin it if it is already pinned.
    pub fn toggle_note(&mut self, option: EnhanceOption) {
        self.pinned_note = if self.pinned_note == Some(option) {
            None
        } else {
            Some(option)
        };
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> PanelResponse {
        let rows = EnhanceOption::ALL.map(|option| self.row_ui(ui, option));
        PanelResponse { rows }
    }

    fn row_ui(&mut self, ui: &mut egui::Ui, option: EnhanceOption) -> RowResponse {
        let enabled = self.is_enabled(option);
        let pinned = self.pinned_note == Some(option);

        let (info, switch) = ui
            .push_id(option.id_salt(), |ui| {
                ui.horizontal(|ui| {
                    ui.set_min_height(theme::ROW_HEIGHT);
                    ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(option.label())
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );
                    let info = components::info_button(ui, pinned).on_hover_text(option.tooltip());
                    let switch = ui
                        .with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            components::toggle_switch(ui, enabled, option.accessibility_label())
                        })
                        .inner;
                    (info, switch)
                })
                .inner
            })
            .inner;

        if switch.clicked() {
            self.toggle(option);
        }
        if info.clicked() {
            self.toggle_note(option);
        }

        if self.pinned_note == Some(option) {
            theme::note_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(option.tooltip())
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    )
                    .wrap(),
                );
            });
            ui.add_space(theme::SPACING_XS);
        }

        RowResponse { info, switch }
    }
}
