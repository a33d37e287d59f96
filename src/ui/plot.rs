use std::ops::RangeInclusive;

use eframe::egui::{Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Plot, PlotPoints, Points,
};

use crate::color::ColorMap;
use crate::data::model::ModelKind;
use crate::data::stats::{ModelStatistic, RatioDistribution};

const PLOT_HEIGHT: f32 = 280.0;

// ---------------------------------------------------------------------------
// Shared plot setup
// ---------------------------------------------------------------------------

/// Label integer x positions with the model plotted there.
fn model_axis(models: Vec<ModelKind>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        models
            .get(idx as usize)
            .map(|m| m.label().to_string())
            .unwrap_or_default()
    }
}

/// A static category plot: one slot per model along x, no panning.
fn category_plot(id: &str, models: Vec<ModelKind>, y_label: &str) -> Plot<'static> {
    let n = models.len() as f64;
    Plot::new(id)
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Model")
        .y_axis_label(y_label.to_string())
        .x_axis_formatter(model_axis(models))
        .include_x(-0.5)
        .include_x(n - 0.5)
        .include_y(0.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
}

// ---------------------------------------------------------------------------
// Bar chart of a per-model statistic
// ---------------------------------------------------------------------------

/// Undefined statistics get no bar; they are listed below the chart instead.
pub fn statistic_bar_chart(
    ui: &mut Ui,
    id: &str,
    stats: &[ModelStatistic],
    colors: &ColorMap,
    y_label: &str,
) {
    if stats.is_empty() {
        ui.weak("No models selected.");
        return;
    }

    let models: Vec<ModelKind> = stats.iter().map(|s| s.model).collect();
    let bars: Vec<Bar> = stats
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            let value = s.value?;
            Some(
                Bar::new(i as f64, value)
                    .name(s.model.label())
                    .fill(colors.color_for(s.model))
                    .width(0.6),
            )
        })
        .collect();

    category_plot(id, models, y_label).show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new(bars).name(y_label));
    });

    let undefined: Vec<&str> = stats
        .iter()
        .filter(|s| s.value.is_none())
        .map(|s| s.model.label())
        .collect();
    if !undefined.is_empty() {
        ui.weak(format!(
            "Not enough data to compute a value for: {}",
            undefined.join(", ")
        ));
    }
}

// ---------------------------------------------------------------------------
// Box plot of the ratio distribution
// ---------------------------------------------------------------------------

pub fn ratio_box_plot(ui: &mut Ui, distribution: &[RatioDistribution], colors: &ColorMap) {
    if distribution.is_empty() {
        ui.weak("No models selected.");
        return;
    }

    let models: Vec<ModelKind> = distribution.iter().map(|d| d.model).collect();

    category_plot("ratio_distribution", models, "Anomaly Ratio").show(ui, |plot_ui| {
        for (i, d) in distribution.iter().enumerate() {
            let Some(summary) = &d.summary else {
                continue;
            };
            let color = colors.color_for(d.model);
            let x = i as f64;

            let elem = BoxElem::new(
                x,
                BoxSpread::new(
                    summary.lower_whisker,
                    summary.q1,
                    summary.median,
                    summary.q3,
                    summary.upper_whisker,
                ),
            )
            .name(d.model.label())
            .fill(color.gamma_multiply(0.4))
            .stroke(Stroke::new(1.5, color))
            .box_width(0.5)
            .whisker_width(0.25);
            plot_ui.box_plot(BoxPlot::new(vec![elem]).name(d.model.label()));

            if !summary.outliers.is_empty() {
                let points: Vec<[f64; 2]> = summary.outliers.iter().map(|&v| [x, v]).collect();
                plot_ui.points(
                    Points::new(PlotPoints::new(points))
                        .name(d.model.label())
                        .color(color)
                        .radius(3.0),
                );
            }
        }
    });
}
