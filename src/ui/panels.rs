use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::ModelKind;
use crate::state::AppState;
use crate::ui::{plot, tables};

// ---------------------------------------------------------------------------
// Left side panel – model selection
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let available: Vec<ModelKind> = match &state.dashboard {
        Some(d) => d.available_models.clone(),
        None => {
            ui.label("No results loaded.");
            return;
        }
    };

    let n_selected = available.iter().filter(|m| state.is_selected(**m)).count();
    ui.strong(format!("Select Models  ({n_selected}/{})", available.len()));
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    // Apply at most one change per frame so the pipeline re-runs once.
    let mut change: Option<(ModelKind, bool)> = None;
    for model in &available {
        let mut checked = state.is_selected(*model);
        let text = RichText::new(model.label()).color(state.color_map.color_for(*model));
        if ui.checkbox(&mut checked, text).changed() {
            change = Some((*model, checked));
        }
    }
    if let Some((model, selected)) = change {
        log::debug!("Model '{model}' selected: {selected}");
        state.set_model_selected(model, selected);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open results folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload data").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(state.cache.base_dir().display().to_string());

        if let Some(d) = &state.dashboard {
            ui.separator();
            ui.label(format!(
                "{} records loaded, {} visible",
                d.total_records,
                d.filtered.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – the report
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(dashboard) = &state.dashboard else {
        ui.centered_and_justified(|ui: &mut Ui| {
            let msg = state
                .status_message
                .as_deref()
                .unwrap_or("No results loaded  (File → Open results folder…)");
            ui.heading(RichText::new(msg).color(Color32::RED));
        });
        return;
    };
    let colors = &state.color_map;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.label(
                RichText::new("Anomaly Detection Model Comparison Dashboard")
                    .size(26.0)
                    .strong(),
            );
            ui.label("Comparative analysis of four anomaly detection models");
            ui.label("evaluated on industrial time-series datasets.");
            ui.add_space(8.0);

            ui.heading("Dataset Coverage");
            tables::coverage_table(ui, &dashboard.coverage, colors);
            ui.add_space(12.0);

            ui.heading("Average Anomaly Ratio");
            plot::statistic_bar_chart(
                ui,
                "average_ratio",
                &dashboard.average_ratio,
                colors,
                "Average Anomaly Ratio",
            );
            tables::statistic_table(
                ui,
                "average_ratio_table",
                "Average Anomaly Ratio",
                &dashboard.average_ratio,
            );
            ui.add_space(12.0);

            ui.heading("Anomaly Ratio Distribution");
            plot::ratio_box_plot(ui, &dashboard.distribution, colors);
            ui.add_space(12.0);

            ui.heading("Model Stability");
            plot::statistic_bar_chart(
                ui,
                "stability",
                &dashboard.stability,
                colors,
                "Std Dev of Anomaly Ratio",
            );
            tables::statistic_table(
                ui,
                "stability_table",
                "Standard Deviation",
                &dashboard.stability,
            );
            ui.label(RichText::new("Lower standard deviation → more stable detection").strong());
            ui.label(RichText::new("Higher deviation → sensitive to operating conditions").strong());
            ui.add_space(12.0);

            ui.heading("LSTM Supervised Classification Metrics");
            tables::supervised_table(ui, &dashboard.supervised);

            ui.separator();
            ui.weak(
                "End-to-end anomaly detection benchmarking using classical, deep learning, and hybrid models.",
            );
        });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open results folder")
        .set_directory(state.cache.base_dir())
        .pick_folder();

    if let Some(path) = folder {
        state.set_base_dir(path);
    }
}
