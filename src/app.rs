use eframe::egui::{CentralPanel, Context, SidePanel, TopBottomPanel};

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::panels;

const FILTER_PANEL_WIDTH: f32 = 220.0;

/// Window-level layout: menu bar on top, model filter on the left and the
/// report filling the rest.
pub struct DashboardApp {
    state: AppState,
}

impl DashboardApp {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            state: AppState::new(config.base_dir.clone()),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let state = &mut self.state;

        TopBottomPanel::top("menu_bar").show(ctx, |ui| panels::top_bar(ui, state));
        SidePanel::left("model_filter")
            .default_width(FILTER_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| panels::side_panel(ui, state));
        // Panels above claim their space first; the report gets the remainder.
        CentralPanel::default().show(ctx, |ui| panels::central_panel(ui, state));
    }
}
