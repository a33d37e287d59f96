use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::color::ColorMap;
use crate::data::model::SupervisedRecord;
use crate::data::stats::{Coverage, ModelStatistic};

const ROW_HEIGHT: f32 = 20.0;

/// Text for a statistic that may be undefined, in shortest round-trip form.
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => "n/a".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Dataset coverage
// ---------------------------------------------------------------------------

pub fn coverage_table(ui: &mut Ui, coverage: &[Coverage], colors: &ColorMap) {
    ui.push_id("coverage_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::initial(220.0).resizable(true))
            .column(Column::remainder())
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("Model");
                });
                header.col(|ui: &mut Ui| {
                    ui.strong("Number of Files");
                });
            })
            .body(|mut body| {
                for c in coverage {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.colored_label(colors.color_for(c.model), c.model.label());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(c.files.to_string());
                        });
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Per-model statistic (values behind a bar chart)
// ---------------------------------------------------------------------------

pub fn statistic_table(ui: &mut Ui, id: &str, value_header: &str, stats: &[ModelStatistic]) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::initial(220.0).resizable(true))
            .column(Column::remainder())
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("Model");
                });
                header.col(|ui: &mut Ui| {
                    ui.strong(value_header);
                });
            })
            .body(|mut body| {
                for s in stats {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.label(s.model.label());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(format_metric(s.value));
                        });
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Supervised classification metrics
// ---------------------------------------------------------------------------

pub fn supervised_table(ui: &mut Ui, records: &[SupervisedRecord]) {
    const HEADERS: [&str; 6] = ["folder", "file", "accuracy", "precision", "recall", "f1"];

    ui.push_id("supervised_table", |ui: &mut Ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(420.0)
            .column(Column::initial(160.0).resizable(true).clip(true))
            .column(Column::initial(200.0).resizable(true).clip(true));
        for _ in 2..HEADERS.len() {
            table = table.column(Column::initial(90.0).resizable(true));
        }

        table
            .header(ROW_HEIGHT, |mut header| {
                for name in HEADERS {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, records.len(), |mut row| {
                    let rec = &records[row.index()];
                    row.col(|ui: &mut Ui| {
                        ui.label(&rec.folder);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&rec.file);
                    });
                    for cell in [&rec.accuracy, &rec.precision, &rec.recall, &rec.f1] {
                        row.col(|ui: &mut Ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            });
    });
}
