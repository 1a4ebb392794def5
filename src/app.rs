use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BionicApp {
    pub state: AppState,
}

impl BionicApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for BionicApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: limit, columns, details ----
        egui::SidePanel::left("settings_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selectors + results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::search_panel(ui, &mut self.state);
            ui.separator();
            results::results_table(ui, &mut self.state);
        });
    }
}
